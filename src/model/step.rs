// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Tour steps and the validated tour configuration.
//!
//! Step identity is positional: the tour is a non-empty, 0-indexed,
//! insertion-ordered sequence, and reordering steps changes meaning.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::events::{HostEvent, Skin};
use super::page::{Selector, SelectorError};

/// Body of a step dialog: an embeddable help document reference, inline help
/// markup, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent {
    Doc(String),
    Inline(String),
    /// When both are present the document reference wins for the help pane
    /// and the inline markup is ignored.
    Both { url: String, html: String },
}

impl StepContent {
    fn from_parts(url: Option<String>, html: Option<String>) -> Option<Self> {
        match (url, html) {
            (Some(url), Some(html)) => Some(Self::Both { url, html }),
            (Some(url), None) => Some(Self::Doc(url)),
            (None, Some(html)) => Some(Self::Inline(html)),
            (None, None) => None,
        }
    }

    /// The preferred document reference, if one exists.
    pub fn doc_url(&self) -> Option<&str> {
        match self {
            Self::Doc(url) | Self::Both { url, .. } => Some(url),
            Self::Inline(_) => None,
        }
    }

    /// Inline markup, only when no document reference shadows it.
    pub fn inline_html(&self) -> Option<&str> {
        match self {
            Self::Inline(html) => Some(html),
            Self::Doc(_) | Self::Both { .. } => None,
        }
    }
}

/// Tooltip placement relative to its target element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    #[default]
    BottomEnd,
    Left,
    Right,
}

impl Placement {
    /// Lenient parse; unknown placements fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "top-start" => Self::TopStart,
            "top-end" => Self::TopEnd,
            "bottom" => Self::Bottom,
            "bottom-start" => Self::BottomStart,
            "bottom-end" => Self::BottomEnd,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::default(),
        }
    }
}

/// A tooltip shown over the live page after the user presses "Try it out" on
/// a gated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipSpec {
    target: Selector,
    content: String,
    placement: Placement,
}

impl TooltipSpec {
    pub fn new(target: Selector, content: impl Into<String>, placement: Placement) -> Self {
        Self { target, content: content.into(), placement }
    }

    pub fn target(&self) -> &Selector {
        &self.target
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// One ordered unit of tour content with an optional gating event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    title: String,
    content: StepContent,
    details: Option<String>,
    proceed_on_event: Option<HostEvent>,
    tooltips: Vec<TooltipSpec>,
}

impl Step {
    pub fn new(title: impl Into<String>, content: StepContent) -> Self {
        Self {
            title: title.into(),
            content,
            details: None,
            proceed_on_event: None,
            tooltips: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_proceed_on_event(mut self, event: HostEvent) -> Self {
        self.proceed_on_event = Some(event);
        self
    }

    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltips.push(tooltip);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &StepContent {
        &self.content
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Banner line for this step: `details` when present, else `title`.
    pub fn banner_text(&self) -> &str {
        self.details.as_deref().unwrap_or(&self.title)
    }

    pub fn proceed_on_event(&self) -> Option<&HostEvent> {
        self.proceed_on_event.as_ref()
    }

    pub fn tooltips(&self) -> &[TooltipSpec] {
        &self.tooltips
    }
}

/// Validated tour configuration: a non-empty step list plus an initial skin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    steps: Vec<Step>,
    skin: Skin,
}

impl TourConfig {
    pub fn new(steps: Vec<Step>, skin: Skin) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::EmptySteps);
        }
        Ok(Self { steps, skin })
    }

    /// Replaces the initial skin, e.g. from a command-line override.
    pub fn with_skin(mut self, skin: Skin) -> Self {
        self.skin = skin;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }
}

/// On-disk tour configuration document (spec'd JSON shape, camelCase keys).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TourConfigFile {
    #[serde(default)]
    pub steps: Vec<StepFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StepFile {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceed_on_event: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tooltips: Vec<TooltipFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TooltipFile {
    pub target: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

impl TourConfigFile {
    /// Validates the raw document into a [`TourConfig`].
    pub fn into_config(self) -> Result<TourConfig, ConfigError> {
        let mut steps = Vec::with_capacity(self.steps.len());
        for (step_index, raw) in self.steps.into_iter().enumerate() {
            let content = StepContent::from_parts(raw.url, raw.html)
                .ok_or(ConfigError::MissingContent { step_index })?;
            let mut step = Step::new(raw.title, content);
            if let Some(details) = raw.details {
                step = step.with_details(details);
            }
            if let Some(event) = raw.proceed_on_event {
                step = step.with_proceed_on_event(HostEvent::from_name(&event));
            }
            for tooltip in raw.tooltips {
                let target = Selector::parse(&tooltip.target)
                    .map_err(|source| ConfigError::InvalidSelector { step_index, source })?;
                let placement = tooltip
                    .placement
                    .as_deref()
                    .map(Placement::from_name)
                    .unwrap_or_default();
                step = step.with_tooltip(TooltipSpec::new(target, tooltip.content, placement));
            }
            steps.push(step);
        }

        let skin = self.skin.as_deref().map(Skin::from_name).unwrap_or_default();
        TourConfig::new(steps, skin)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The step list is empty; a tour over zero steps is undefined.
    EmptySteps,
    MissingContent {
        step_index: usize,
    },
    InvalidSelector {
        step_index: usize,
        source: SelectorError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySteps => write!(f, "tour configuration has no steps"),
            Self::MissingContent { step_index } => {
                write!(f, "step {step_index} has neither a url nor inline html")
            }
            Self::InvalidSelector { step_index, source } => {
                write!(f, "step {step_index} has an invalid tooltip selector: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSelector { source, .. } => Some(source),
            Self::EmptySteps | Self::MissingContent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Placement, StepContent, TourConfigFile};
    use crate::model::{HostEvent, Skin};

    #[test]
    fn empty_step_list_is_rejected_at_construction() {
        let raw = TourConfigFile::default();
        assert!(matches!(raw.into_config(), Err(ConfigError::EmptySteps)));
    }

    #[test]
    fn step_without_content_is_rejected() {
        let raw: TourConfigFile =
            serde_json::from_str(r#"{ "steps": [ { "title": "Empty" } ] }"#).expect("parse");
        assert!(matches!(
            raw.into_config(),
            Err(ConfigError::MissingContent { step_index: 0 })
        ));
    }

    #[test]
    fn doc_url_wins_when_both_contents_are_present() {
        let content = StepContent::Both {
            url: "./tour/save.html".to_owned(),
            html: "<p>save</p>".to_owned(),
        };
        assert_eq!(content.doc_url(), Some("./tour/save.html"));
        assert_eq!(content.inline_html(), None);
    }

    #[test]
    fn config_document_parses_into_validated_steps() {
        let raw: TourConfigFile = serde_json::from_str(
            r##"{
              "skin": "dark",
              "steps": [
                {
                  "title": "Create Content",
                  "url": "./tour/create.html",
                  "details": "Enter a title and some content, then save.",
                  "proceedOnEvent": "save",
                  "tooltips": [
                    { "target": "#save", "content": "Click save", "placement": "top" }
                  ]
                },
                { "title": "Save", "html": "<p>Saved posts appear below.</p>" }
              ]
            }"##,
        )
        .expect("parse");

        let config = raw.into_config().expect("config");
        assert_eq!(config.skin(), Skin::Dark);
        assert_eq!(config.steps().len(), 2);

        let first = &config.steps()[0];
        assert_eq!(first.banner_text(), "Enter a title and some content, then save.");
        assert_eq!(first.proceed_on_event(), Some(&HostEvent::Save));
        assert_eq!(first.tooltips().len(), 1);
        assert_eq!(first.tooltips()[0].placement(), Placement::Top);

        let second = &config.steps()[1];
        assert_eq!(second.banner_text(), "Save");
        assert!(second.proceed_on_event().is_none());
    }

    #[test]
    fn invalid_tooltip_selector_is_a_config_error() {
        let raw: TourConfigFile = serde_json::from_str(
            r##"{
              "steps": [
                {
                  "title": "Bad",
                  "html": "<p>x</p>",
                  "tooltips": [ { "target": "#", "content": "nope" } ]
                }
              ]
            }"##,
        )
        .expect("parse");
        assert!(matches!(
            raw.into_config(),
            Err(ConfigError::InvalidSelector { step_index: 0, .. })
        ));
    }
}

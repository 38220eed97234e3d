// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Spotlight overlay engine.
//!
//! Given selector → help-config pairs, the engine either binds direct
//! click-to-help handlers (`bind_action_overlays`, always active, no
//! visuals) or opens a spotlight session (`show_help_overlays`) that
//! highlights every match behind a scrim and resolves clicks to the help
//! config of the element under the pointer.
//!
//! Hit-testing is bounding-rectangle containment against the recorded
//! elements in insertion order, not draw order; overlapping spotlights
//! resolve to the earliest match.
//!
//! Spotlighting mutates only each element's inline style, and a session
//! must hand the style back byte-for-byte on teardown.

use crate::model::{ElementKey, Page, Region, Selector};
use crate::ui::{ButtonAction, DialogBody, DialogButton, DialogSpec};


/// Inline style applied to spotlighted elements while a session is open.
pub const SPOTLIGHT_STYLE: &str = "fg=black;bg=yellow;bold";

const OVERLAY_DIALOG_TITLE: &str = "Help";

/// Button vocabulary overlay help configs may request for their dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayButton {
    Cancel,
    Submit,
    Next,
    Prev,
}

/// Contextual help attached to an element selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementHelp {
    help_url: Option<String>,
    help_html: Option<String>,
    buttons: Vec<OverlayButton>,
}

impl ElementHelp {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.help_html = Some(html.into());
        self
    }

    pub fn with_button(mut self, button: OverlayButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn help_url(&self) -> Option<&str> {
        self.help_url.as_deref()
    }

    pub fn help_html(&self) -> Option<&str> {
        self.help_html.as_deref()
    }

    pub fn buttons(&self) -> &[OverlayButton] {
        &self.buttons
    }

    /// Dialog for this help config. No configured buttons means a single
    /// primary Close.
    pub fn dialog_spec(&self) -> DialogSpec {
        let buttons = if self.buttons.is_empty() {
            vec![DialogButton::primary(ButtonAction::Close, "Close")]
        } else {
            self.buttons
                .iter()
                .map(|button| match button {
                    OverlayButton::Cancel => DialogButton::new(ButtonAction::Close, "Close"),
                    OverlayButton::Submit => {
                        DialogButton::primary(ButtonAction::Submit, "Save")
                    }
                    OverlayButton::Next => DialogButton::new(ButtonAction::Next, "Next"),
                    OverlayButton::Prev => DialogButton::new(ButtonAction::Prev, "Previous"),
                })
                .collect()
        };

        DialogSpec {
            title: OVERLAY_DIALOG_TITLE.to_owned(),
            body: DialogBody {
                help_url: self.help_url.clone(),
                help_html: self.help_html.clone(),
                wizard: None,
            },
            buttons,
        }
    }
}

/// Selector/help pairs for both overlay modes. Order is significant: it is
/// the hit-testing order for overlapping matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayConfig {
    bind: Vec<(Selector, ElementHelp)>,
    help: Vec<(Selector, ElementHelp)>,
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, selector: Selector, help: ElementHelp) -> Self {
        self.bind.push((selector, help));
        self
    }

    pub fn help(mut self, selector: Selector, help: ElementHelp) -> Self {
        self.help.push((selector, help));
        self
    }
}

#[derive(Debug, Clone)]
pub struct OverlayEngine {
    config: OverlayConfig,
}

impl OverlayEngine {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// Resolves the `bind` entries against the page's current matches.
    /// Selector misses simply bind nothing.
    pub fn bind_action_overlays(&self, page: &Page) -> ActionBindings {
        let mut bindings = Vec::new();
        for (selector, help) in &self.config.bind {
            for key in page.select(selector) {
                bindings.push((key, help.clone()));
            }
        }
        ActionBindings { bindings }
    }

    /// Opens a spotlight session: saves and replaces the inline style of
    /// every `help` match. Supports zero, one, or many matches per selector.
    pub fn show_help_overlays(&self, page: &mut Page) -> OverlaySession {
        let mut overlays = Vec::new();
        for (selector, help) in &self.config.help {
            for key in page.select(selector) {
                let Some(element) = page.element_mut(key) else {
                    continue;
                };
                let saved_style = element.inline_style().map(str::to_owned);
                element.set_inline_style(Some(SPOTLIGHT_STYLE.to_owned()));
                overlays.push(Spotlight { element: key, saved_style, help: help.clone() });
            }
        }
        OverlaySession { overlays, open: true }
    }
}

/// Permanent click → help bindings (no spotlight visuals).
#[derive(Debug, Clone)]
pub struct ActionBindings {
    bindings: Vec<(ElementKey, ElementHelp)>,
}

impl ActionBindings {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolves a click against the bound elements' current regions.
    pub fn hit(&self, page: &Page, x: u16, y: u16) -> Option<&ElementHelp> {
        self.bindings.iter().find_map(|(key, help)| {
            let region = page.element(*key)?.region();
            region.contains(x, y).then_some(help)
        })
    }
}

#[derive(Debug, Clone)]
struct Spotlight {
    element: ElementKey,
    saved_style: Option<String>,
    help: ElementHelp,
}

/// A live spotlight session. Exists only while highlight mode is active;
/// `close` restores every element and consumes the session's effect.
#[derive(Debug, Clone)]
pub struct OverlaySession {
    overlays: Vec<Spotlight>,
    open: bool,
}

impl OverlaySession {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Keys of the spotlighted elements, in recorded order.
    pub fn elements(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.overlays.iter().map(|overlay| overlay.element)
    }

    /// Spotlighted regions, for drawing, resolved against the page's
    /// current layout.
    pub fn regions<'p>(&'p self, page: &'p Page) -> impl Iterator<Item = Region> + 'p {
        self.overlays
            .iter()
            .filter_map(|overlay| Some(page.element(overlay.element)?.region()))
    }

    /// Resolves a click to the first recorded overlay whose bounding region
    /// contains the point.
    pub fn hit(&self, page: &Page, x: u16, y: u16) -> Option<&ElementHelp> {
        if !self.open {
            return None;
        }
        self.overlays.iter().find_map(|overlay| {
            let region = page.element(overlay.element)?.region();
            region.contains(x, y).then_some(&overlay.help)
        })
    }

    /// Tears the session down, restoring every saved inline style exactly.
    /// Idempotent: a closed session restores nothing further.
    pub fn close(&mut self, page: &mut Page) {
        if !self.open {
            return;
        }
        self.open = false;
        for overlay in &self.overlays {
            if let Some(element) = page.element_mut(overlay.element) {
                element.set_inline_style(overlay.saved_style.clone());
            }
        }
    }
}

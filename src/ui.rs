// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Presenter data contracts shared between the tour machine, the overlay
//! engine, and the terminal shell that renders them.
//!
//! Presenters are pure views: they receive fully-built specs, report which
//! button was pressed, and hold no reference back into the machine.

use crate::model::{Placement, Selector, Skin};

/// Stable name for a dialog button, routed back to whoever opened the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Next,
    Prev,
    End,
    TryItOut,
    /// Confirm leaving the tour early.
    Leave,
    /// Decline leaving the tour.
    Stay,
    Close,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub action: ButtonAction,
    pub label: &'static str,
    pub primary: bool,
}

impl DialogButton {
    pub fn new(action: ButtonAction, label: &'static str) -> Self {
        Self { action, label, primary: false }
    }

    pub fn primary(action: ButtonAction, label: &'static str) -> Self {
        Self { action, label, primary: true }
    }
}

/// Dialog body: a help document reference, inline help markup, or both.
/// When both are present the document reference takes the help pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogBody {
    pub help_url: Option<String>,
    pub help_html: Option<String>,
    /// Pre-rendered step-position indicator line, present on step dialogs.
    pub wizard: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub title: String,
    pub body: DialogBody,
    pub buttons: Vec<DialogButton>,
}

/// Behavior bound to the banner's context button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerContext {
    NeedHelp,
    Resume,
    Restart,
}

impl BannerContext {
    pub fn label(self) -> &'static str {
        match self {
            Self::NeedHelp | Self::Resume => "Need help?",
            Self::Restart => "Restart tour",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    pub text: String,
    pub context: BannerContext,
}

/// Tooltip theme; inverted against the skin so tooltips stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipTheme {
    Light,
    Dark,
}

impl TooltipTheme {
    pub fn for_skin(skin: Skin) -> Self {
        if skin.is_dark() {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipView {
    pub target: Selector,
    pub content: String,
    pub placement: Placement,
    pub theme: TooltipTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialogId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TooltipId(pub u64);

#[cfg(test)]
mod tests {
    use super::{BannerContext, TooltipTheme};
    use crate::model::Skin;

    #[test]
    fn tooltip_theme_inverts_the_skin() {
        assert_eq!(TooltipTheme::for_skin(Skin::Dark), TooltipTheme::Light);
        assert_eq!(TooltipTheme::for_skin(Skin::Default), TooltipTheme::Dark);
    }

    #[test]
    fn banner_context_labels() {
        assert_eq!(BannerContext::NeedHelp.label(), "Need help?");
        assert_eq!(BannerContext::Resume.label(), "Need help?");
        assert_eq!(BannerContext::Restart.label(), "Restart tour");
    }
}

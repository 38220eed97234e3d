// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! The event vocabulary shared between the host application and the tour.
//!
//! Hosts notify the tour with these names; steps gate on them via
//! `proceed_on_event`. Keeping the set enumerated (rather than ad hoc
//! strings) makes the gating contract explicit and testable.

use std::fmt;

use smol_str::SmolStr;

/// A named event emitted by the host application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HostEvent {
    /// The user saved content in the host application.
    Save,
    /// The user started editing existing content.
    Edit,
    /// The host switched skins.
    SkinChange,
    /// An event outside the well-known vocabulary.
    Custom(SmolStr),
}

impl HostEvent {
    /// Total conversion from a host-supplied event name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "save" => Self::Save,
            "edit" => Self::Edit,
            "skinChange" => Self::SkinChange,
            other => Self::Custom(SmolStr::new(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Save => "save",
            Self::Edit => "edit",
            Self::SkinChange => "skinChange",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic theme applied to dialogs and tooltips, supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Skin {
    #[default]
    Default,
    Dark,
}

impl Skin {
    /// Lenient parse; unknown names fall back to the default skin.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::Dark,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

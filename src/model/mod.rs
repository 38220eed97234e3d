// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Core data model: tour steps and configuration, the host event vocabulary,
//! and the page surface the tour runs against.

pub mod events;
pub mod page;
pub mod step;

pub use events::{HostEvent, Skin};
pub use page::{ElementKey, Page, PageElement, Region, Selector, SelectorError};
pub use step::{
    ConfigError, Placement, Step, StepContent, TooltipSpec, TourConfig, TourConfigFile,
};

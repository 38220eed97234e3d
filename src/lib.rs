// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Guidepost — a resumable guided-tour engine for terminal applications.
//!
//! The tour state machine (`tour`) sequences instructional steps over a live
//! page (`model::page`), persists a single resumable cursor (`store`), and
//! drives dialog/banner/tooltip presenters through the `TourSurface` seam.
//! The spotlight overlay engine (`overlay`) highlights page regions and maps
//! clicks on them to contextual help dialogs.

pub mod model;
pub mod overlay;
pub mod store;
pub mod tour;
pub mod tui;
pub mod ui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}

// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Persistence for the tour's single resumable cursor.
//!
//! The only durable state the engine owns is the integer step index; it is
//! written on every step change and read once at `start()`/`resume()`.

pub mod cursor;

pub use cursor::{CursorStore, StoreError, CURSOR_FILENAME};

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and fixed timing constants.
//!
//! This module is the single source of truth for the constants used across
//! the application. The slideshow timing values are part of the product
//! contract and are deliberately not exposed through the config file.

// ==========================================================================
// Slideshow Timing
// ==========================================================================

/// Interval between automatic slide advances, in milliseconds.
pub const SLIDE_ADVANCE_INTERVAL_MS: u64 = 3000;

/// Delay before a toast notification hides itself, in milliseconds.
pub const TOAST_HIDE_DELAY_MS: u64 = 2600;

/// Period of the runtime tick subscription that drives deadline checks,
/// in milliseconds.
pub const TICK_PERIOD_MS: u64 = 100;

/// Upper bound on slide advances replayed by a single autoplay poll after a
/// long stall (system sleep, suspended event loop).
pub const MAX_ADVANCE_CATCH_UP: u32 = 64;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 360;

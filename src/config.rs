//! Compile-time tuning constants shared across the app.

/// How long the on-screen video controls stay visible while playing
/// before auto-hiding.
pub const CONTROLS_AUTO_HIDE_MS: u32 = 3000;

/// How long the share button shows its "copied" checkmark before
/// reverting to the share icon.
pub const SHARE_CONFIRM_MS: u32 = 2000;

/// Scroll offset below which the page header never hides.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Length of the haptic pulse fired on discrete interactions.
pub const HAPTIC_PULSE_MS: u32 = 50;

/// Delay between scrolling the player into view and starting playback
/// when the watch-now button is tapped.
pub const WATCH_NOW_DELAY_MS: u32 = 300;

//! Application-level configuration constants.

// localStorage keys
pub const KEY_LAST_MODE: &str = "busup:lastMode";
pub const KEY_LAST_COUNTDOWN_MS: &str = "busup:lastCountdownMs";
pub const KEY_LANG: &str = "busup:lang";
pub const KEY_THEME: &str = "busup:theme";

// Completion feedback
pub const BEEP_DURATION_MS: f64 = 240.0;
pub const BEEP_FREQ_HZ: f32 = 1040.0;
/// How long the finish pulse class stays on the timer card before it is
/// removed so a later completion can retrigger the animation.
pub const FLASH_MS: u32 = 1200;

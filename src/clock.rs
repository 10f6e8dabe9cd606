//! Monotonic millisecond clock.
//!
//! Uses `Performance.now()` on wasm32 (the same timebase the animation-frame
//! callback reports, which is what makes mixing the two safe) and
//! `std::time::Instant` on native targets so the engine's unit tests run on
//! the host.

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    // Readings are mixed with animation-frame timestamps, so they must share
    // the Performance timebase; an epoch-clock fallback would inject a huge
    // bogus delta. Any context that drives an animation loop has a
    // Performance object, so the missing-object arm stays at the origin.
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

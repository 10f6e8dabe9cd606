//! Completion tone via the Web Audio API.
//!
//! Any of these calls can fail when audio is blocked by autoplay policy; the
//! caller logs the error and carries on with visual feedback only.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, OscillatorType};

/// Play a short tone with a quick attack and an exponential decay.
///
/// The context is released when the oscillator ends: browsers cap the number
/// of live `AudioContext`s, so holding one per completion would make audio
/// die after a handful of countdowns.
pub fn beep(duration_ms: f64, freq_hz: f32) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    osc.set_type(OscillatorType::Square);
    osc.frequency().set_value(freq_hz);
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let t = ctx.current_time();
    let end = t + duration_ms / 1000.0;
    gain.gain().set_value_at_time(0.0001, t)?;
    gain.gain().exponential_ramp_to_value_at_time(0.3, t + 0.02)?;
    gain.gain().exponential_ramp_to_value_at_time(0.0001, end)?;

    osc.start()?;
    osc.stop_with_when(end + 0.05)?;

    let ctx_done = ctx.clone();
    let on_ended = Closure::once_into_js(move || {
        // Close failures leave the context to the GC; nothing to recover.
        let _ = ctx_done.close();
    });
    osc.set_onended(Some(on_ended.unchecked_ref()));
    Ok(())
}

//! Pure Yew view components for the timer UI.
//!
//! Stateless pieces that render from props only, keeping the stateful wiring
//! in `main.rs` small.

use busup_timer::Mode;
use yew::prelude::*;

use crate::i18n::Dict;

/// The big time readout: main digits plus a separately-styled millisecond
/// fraction.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub main: AttrValue,
    pub fraction: AttrValue,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <div class="time-display" role="timer" aria-live="off">
            <span class="time-main">{ props.main.clone() }</span>
            <span class="time-millis">{ props.fraction.clone() }</span>
        </div>
    }
}

/// Stopwatch / countdown selector with an active marker and a readable label.
#[derive(Properties, PartialEq)]
pub struct ModeToggleProps {
    pub mode: Mode,
    pub dict: &'static Dict,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeToggle)]
pub fn mode_toggle(props: &ModeToggleProps) -> Html {
    let select = |m: Mode| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(m))
    };
    let readable = match props.mode {
        Mode::Stopwatch => props.dict.stopwatch,
        Mode::Countdown => props.dict.countdown,
    };
    html! {
        <div class="mode-row">
            <span class="mode-label">{ props.dict.mode }{ ":" }</span>
            <button
                class="mode-btn"
                data-active={(props.mode == Mode::Stopwatch).to_string()}
                onclick={select(Mode::Stopwatch)}
            >
                { props.dict.stopwatch }
            </button>
            <button
                class="mode-btn"
                data-active={(props.mode == Mode::Countdown).to_string()}
                onclick={select(Mode::Countdown)}
            >
                { props.dict.countdown }
            </button>
            <span class="mode-readable">{ readable }</span>
        </div>
    }
}

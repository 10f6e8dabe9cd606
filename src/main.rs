//! Main module for the busup timer widget using Yew.
//! Wires UI components, state hooks, and the animation-frame loop.

use busup_timer::{clock, format_time, humanize, parse, Mode, TickOutcome, TimerEngine, MAX_MS};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod i18n;
mod storage;

use components::{ModeToggle, TimeDisplay};
use config::*;
use i18n::{Lang, Theme};

/// Pending animation-frame handle. At most one frame is outstanding; dropping
/// the handle cancels it, and overwriting with `None` is an idempotent cancel.
type RafCell = Rc<RefCell<Option<AnimationFrame>>>;

/// Restore the engine from persisted preferences.
fn restore_engine() -> TimerEngine {
    let mode = storage::get(KEY_LAST_MODE)
        .map(|code| Mode::from_code(&code))
        .unwrap_or(Mode::Stopwatch);
    let total = storage::get_u64(KEY_LAST_COUNTDOWN_MS)
        .unwrap_or(0)
        .min(MAX_MS);
    TimerEngine::new(mode, total)
}

/// Persisted countdown total, clamped; 0 when nothing was saved.
fn saved_countdown_total() -> u64 {
    storage::get_u64(KEY_LAST_COUNTDOWN_MS)
        .unwrap_or(0)
        .min(MAX_MS)
}

/// Tick the engine once per animation frame and reschedule while it keeps
/// running. The handle cell always holds the one outstanding frame.
fn schedule_tick(
    engine: Rc<RefCell<TimerEngine>>,
    raf: RafCell,
    flash_clear: Rc<RefCell<Option<Timeout>>>,
    display_ms: UseStateHandle<u64>,
    running: UseStateHandle<bool>,
    flashing: UseStateHandle<bool>,
) {
    let raf_slot = raf.clone();
    let frame = request_animation_frame(move |timestamp| {
        let outcome = engine.borrow_mut().tick(timestamp);
        display_ms.set(engine.borrow().current_ms());
        match outcome {
            TickOutcome::Continue => {
                schedule_tick(
                    engine.clone(),
                    raf_slot.clone(),
                    flash_clear.clone(),
                    display_ms.clone(),
                    running.clone(),
                    flashing.clone(),
                );
            }
            TickOutcome::Finished => {
                *raf_slot.borrow_mut() = None;
                running.set(false);
                flashing.set(true);
                let flashing_off = flashing.clone();
                *flash_clear.borrow_mut() = Some(Timeout::new(FLASH_MS, move || {
                    flashing_off.set(false);
                }));
                if let Err(e) = audio::beep(BEEP_DURATION_MS, BEEP_FREQ_HZ) {
                    warn!("audio beep unsupported or blocked: {:?}", e);
                }
                info!("countdown finished");
            }
            TickOutcome::CapReached => {
                *raf_slot.borrow_mut() = None;
                running.set(false);
                warn!("stopwatch reached cap of {}ms", MAX_MS);
            }
            TickOutcome::Idle => {
                // Stale frame fired after a transition; drop it.
                *raf_slot.borrow_mut() = None;
            }
        }
    });
    *raf.borrow_mut() = Some(frame);
}

#[function_component(App)]
fn app() -> Html {
    let engine = use_mut_ref(restore_engine);
    let raf: RafCell = use_mut_ref(|| None);
    let flash_clear = use_mut_ref(|| None::<Timeout>);

    let display_ms = use_state(|| engine.borrow().current_ms());
    let mode = use_state(|| engine.borrow().mode());
    let running = use_state(|| false);
    let flashing = use_state(|| false);
    let theme = use_state(|| {
        storage::get(KEY_THEME)
            .map(|code| Theme::from_code(&code))
            .unwrap_or(Theme::Light)
    });
    let lang = use_state(|| {
        storage::get(KEY_LANG)
            .map(|code| Lang::from_code(&code))
            .unwrap_or(Lang::En)
    });
    let input_text = use_state(|| {
        let total = engine.borrow().countdown_total_ms();
        if total > 0 {
            humanize(total)
        } else {
            String::new()
        }
    });
    let input_invalid = use_state(|| false);

    // Mirror the theme onto the document root and persist it.
    use_effect_with(*theme, |theme| {
        if let Some(root) = gloo_utils::document().document_element() {
            let classes = root.class_list();
            let result = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
            if result.is_err() {
                warn!("failed to toggle theme class");
            }
        }
        storage::set(KEY_THEME, theme.as_code());
        info!("theme changed to {}", theme.as_code());
    });

    use_effect_with(*lang, |lang| {
        storage::set(KEY_LANG, lang.as_code());
    });

    {
        let engine = engine.clone();
        use_effect_with((), move |_| {
            let e = engine.borrow();
            info!(
                "initialized, mode={} countdown_total={}ms",
                e.mode(),
                e.countdown_total_ms()
            );
        });
    }

    let on_start = {
        let engine = engine.clone();
        let raf = raf.clone();
        let flash_clear = flash_clear.clone();
        let display_ms = display_ms.clone();
        let running = running.clone();
        let flashing = flashing.clone();
        Callback::from(move |_: MouseEvent| {
            if engine.borrow().is_running() {
                return;
            }
            flashing.set(false);
            *flash_clear.borrow_mut() = None;
            engine.borrow_mut().start(clock::now_ms());
            running.set(true);
            schedule_tick(
                engine.clone(),
                raf.clone(),
                flash_clear.clone(),
                display_ms.clone(),
                running.clone(),
                flashing.clone(),
            );
        })
    };

    let on_pause = {
        let engine = engine.clone();
        let raf = raf.clone();
        let display_ms = display_ms.clone();
        let running = running.clone();
        Callback::from(move |_: MouseEvent| {
            *raf.borrow_mut() = None;
            engine.borrow_mut().pause(clock::now_ms());
            display_ms.set(engine.borrow().current_ms());
            running.set(false);
        })
    };

    let on_reset = {
        let engine = engine.clone();
        let raf = raf.clone();
        let flash_clear = flash_clear.clone();
        let display_ms = display_ms.clone();
        let running = running.clone();
        let flashing = flashing.clone();
        Callback::from(move |_: MouseEvent| {
            *raf.borrow_mut() = None;
            *flash_clear.borrow_mut() = None;
            flashing.set(false);
            engine.borrow_mut().reset();
            display_ms.set(engine.borrow().current_ms());
            running.set(false);
        })
    };

    let on_mode = {
        let engine = engine.clone();
        let raf = raf.clone();
        let flash_clear = flash_clear.clone();
        let display_ms = display_ms.clone();
        let mode = mode.clone();
        let running = running.clone();
        let flashing = flashing.clone();
        let input_text = input_text.clone();
        let input_invalid = input_invalid.clone();
        Callback::from(move |new_mode: Mode| {
            if engine.borrow().mode() == new_mode {
                return;
            }
            *raf.borrow_mut() = None;
            *flash_clear.borrow_mut() = None;
            flashing.set(false);
            let saved = saved_countdown_total();
            engine
                .borrow_mut()
                .set_mode(new_mode, clock::now_ms(), saved);
            storage::set(KEY_LAST_MODE, new_mode.as_code());
            mode.set(new_mode);
            running.set(false);
            input_invalid.set(false);
            display_ms.set(engine.borrow().current_ms());
            if new_mode == Mode::Countdown && saved > 0 {
                input_text.set(humanize(saved));
            }
        })
    };

    let on_input = {
        let input_text = input_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_text.set(input.value());
        })
    };

    let on_apply = {
        let engine = engine.clone();
        let display_ms = display_ms.clone();
        let input_text = input_text.clone();
        let input_invalid = input_invalid.clone();
        Callback::from(move |_: ()| {
            input_invalid.set(false);
            match parse::parse_human_time(&input_text) {
                Ok(ms) if ms > 0 => {
                    let total = ms.min(MAX_MS);
                    engine.borrow_mut().apply_countdown(total);
                    storage::set(KEY_LAST_COUNTDOWN_MS, &total.to_string());
                    display_ms.set(engine.borrow().current_ms());
                    info!("countdown applied, {}ms", total);
                }
                other => {
                    input_invalid.set(true);
                    warn!("invalid countdown input {:?}: {:?}", *input_text, other);
                }
            }
        })
    };

    let on_apply_click = on_apply.reform(|_: MouseEvent| ());
    let on_input_keydown = {
        let on_apply = on_apply.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_apply.emit(());
            }
        })
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let new_lang = Lang::from_code(&select.value());
            lang.set(new_lang);
            info!("language changed to {}", new_lang.as_code());
        })
    };

    let dict = lang.dict();
    let formatted = format_time(*display_ms);
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="container">
            <header class="top-bar">
                <h1>{ "Timer" }</h1>
                <div class="prefs">
                    <select class="lang-select" onchange={on_lang_change}>
                        { Lang::ALL.iter().map(|l| html! {
                            <option value={l.as_code()} selected={*l == *lang}>
                                { l.as_code().to_uppercase() }
                            </option>
                        }).collect::<Html>() }
                    </select>
                    <button
                        class="theme-toggle"
                        aria-pressed={(*theme == Theme::Dark).to_string()}
                        onclick={on_theme_toggle}
                    >
                        { dict.theme }{ ": " }{ theme.label(dict) }
                    </button>
                </div>
            </header>

            <ModeToggle mode={*mode} {dict} on_select={on_mode} />

            <div class={classes!("timer-card", flashing.then_some("flash-on-finish"))}>
                <TimeDisplay main={formatted.main} fraction={formatted.fraction} />

                if *mode == Mode::Countdown {
                    <div class="countdown-input-row">
                        <input
                            type="text"
                            class={classes!("time-input", input_invalid.then_some("invalid"))}
                            placeholder={dict.enter_time}
                            value={(*input_text).clone()}
                            oninput={on_input}
                            onkeydown={on_input_keydown}
                        />
                        <button class="apply-btn" onclick={on_apply_click}>{ dict.apply }</button>
                        if *input_invalid {
                            <div class="validation-msg">{ dict.invalid_time }</div>
                        }
                    </div>
                }

                <div class="controls">
                    <button class="control-btn" onclick={on_start} disabled={*running}>
                        { dict.start }
                    </button>
                    <button class="control-btn" onclick={on_pause} disabled={!*running}>
                        { dict.pause }
                    </button>
                    <button class="control-btn" onclick={on_reset}>
                        { dict.reset }
                    </button>
                </div>
            </div>

            <footer class="footer">
                <p class="tip"><strong>{ dict.tip_title }{ ": " }</strong>{ dict.tip_text }</p>
                <p class="year">{ year }</p>
            </footer>
        </div>
    }
}

/// Entry point: logging, panic hook, and the Yew renderer.
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

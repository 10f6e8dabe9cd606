use log::{debug, info};
use std::fmt;

pub mod clock;
pub mod parse;

/// Display cap: 99:59:59.999 in milliseconds.
pub const MAX_MS: u64 = (99 * 3600 + 59 * 60 + 59) * 1000 + 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stopwatch,
    Countdown,
}

impl Mode {
    /// Stable code used for persistence.
    pub fn as_code(self) -> &'static str {
        match self {
            Mode::Stopwatch => "stopwatch",
            Mode::Countdown => "countdown",
        }
    }

    /// Parse a persisted code, falling back to `Stopwatch` for anything
    /// unrecognized (old or hand-edited storage entries).
    pub fn from_code(code: &str) -> Mode {
        match code {
            "countdown" => Mode::Countdown,
            _ => Mode::Stopwatch,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// What a single animation-frame tick did, telling the caller whether to
/// schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running; schedule the next frame.
    Continue,
    /// Countdown hit zero this tick. Fired once per completion.
    Finished,
    /// Stopwatch hit `MAX_MS` and stopped.
    CapReached,
    /// Stale frame after a transition out of Running; nothing changed.
    Idle,
}

/// The timer state machine: two modes (stopwatch / countdown), each either
/// idle or running.
///
/// All clock readings come in as `f64` milliseconds from a monotonic origin
/// (`Performance.now()` in the browser), so the engine itself is pure and
/// testable on any target. Elapsed/remaining time is recomputed from the
/// wall-clock delta every tick rather than accumulated per frame, which keeps
/// it correct across frame-rate dips and backgrounded tabs.
pub struct TimerEngine {
    mode: Mode,
    running: bool,
    /// Segment reference mark. Stopwatch: virtual start (now - elapsed).
    /// Countdown: the last tick's timestamp.
    start_mark: f64,
    elapsed_ms: f64,
    countdown_total_ms: u64,
    countdown_left_ms: f64,
}

impl TimerEngine {
    pub fn new(mode: Mode, countdown_total_ms: u64) -> Self {
        let total = countdown_total_ms.min(MAX_MS);
        Self {
            mode,
            running: false,
            start_mark: 0.0,
            elapsed_ms: 0.0,
            countdown_total_ms: total,
            countdown_left_ms: total as f64,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn countdown_total_ms(&self) -> u64 {
        self.countdown_total_ms
    }

    /// The value currently on display: elapsed (stopwatch) or remaining
    /// (countdown), clamped to the representable range.
    pub fn current_ms(&self) -> u64 {
        let ms = match self.mode {
            Mode::Stopwatch => self.elapsed_ms,
            Mode::Countdown => self.countdown_left_ms,
        };
        (ms.max(0.0) as u64).min(MAX_MS)
    }

    /// Idle -> Running. No-op when already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        match self.mode {
            Mode::Stopwatch => {
                // Continue from the accumulated elapsed time.
                self.start_mark = now_ms - self.elapsed_ms;
            }
            Mode::Countdown => {
                if self.countdown_left_ms <= 0.0 {
                    self.countdown_left_ms = self.countdown_total_ms as f64;
                }
                self.start_mark = now_ms;
            }
        }
        self.running = true;
        info!("start, mode={}", self.mode);
    }

    /// Running -> Idle, folding the segment delta into the stored time.
    /// No-op when already idle.
    pub fn pause(&mut self, now_ms: f64) {
        if !self.running {
            return;
        }
        self.running = false;
        match self.mode {
            Mode::Stopwatch => {
                self.elapsed_ms = (now_ms - self.start_mark).min(MAX_MS as f64);
            }
            Mode::Countdown => {
                let delta = now_ms - self.start_mark;
                self.countdown_left_ms = (self.countdown_left_ms - delta).max(0.0);
            }
        }
        info!("pause, mode={}", self.mode);
    }

    /// Any state -> Idle with time zeroed (stopwatch) or refilled to the
    /// configured total (countdown).
    pub fn reset(&mut self) {
        self.running = false;
        match self.mode {
            Mode::Stopwatch => self.elapsed_ms = 0.0,
            Mode::Countdown => self.countdown_left_ms = self.countdown_total_ms as f64,
        }
        info!("reset, mode={}", self.mode);
    }

    /// Switch modes, pausing first so no segment time leaks across modes.
    /// Entering countdown installs `countdown_total` (the persisted value);
    /// entering stopwatch keeps the accumulated elapsed time. No-op when the
    /// mode is unchanged.
    pub fn set_mode(&mut self, mode: Mode, now_ms: f64, countdown_total: u64) {
        if self.mode == mode {
            return;
        }
        self.pause(now_ms);
        self.mode = mode;
        if mode == Mode::Countdown {
            self.apply_countdown(countdown_total);
        }
        info!("mode changed to {}", self.mode);
    }

    /// Install a new countdown duration, clamped to `MAX_MS`, and refill the
    /// remaining time from it.
    pub fn apply_countdown(&mut self, total_ms: u64) {
        let total = total_ms.min(MAX_MS);
        self.countdown_total_ms = total;
        self.countdown_left_ms = total as f64;
        debug!("countdown applied, total={}ms", total);
    }

    /// Per-frame advance. Recomputes the displayed value from the wall-clock
    /// delta since the segment mark and reports whether to keep ticking.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        // An animation-frame timestamp is the frame's vsync time and can
        // precede the clock reading taken in the handler that called
        // `start`, so the first frame's delta may come out slightly
        // negative. Clamp it; time never runs backwards here.
        match self.mode {
            Mode::Stopwatch => {
                self.elapsed_ms = (now_ms - self.start_mark).clamp(0.0, MAX_MS as f64);
                if self.elapsed_ms >= MAX_MS as f64 {
                    self.running = false;
                    return TickOutcome::CapReached;
                }
            }
            Mode::Countdown => {
                let delta = (now_ms - self.start_mark).max(0.0);
                self.countdown_left_ms = (self.countdown_left_ms - delta).max(0.0);
                self.start_mark = now_ms;
                if self.countdown_left_ms <= 0.0 {
                    self.running = false;
                    return TickOutcome::Finished;
                }
            }
        }
        TickOutcome::Continue
    }
}

/// A formatted display value: the big digits and the millisecond fraction,
/// kept separate so the UI can style them differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    /// `HH:MM:SS` when hours are present, `MM:SS` otherwise.
    pub main: String,
    /// `.mmm`, always three digits.
    pub fraction: String,
}

/// Format milliseconds for display. Pure; input is clamped to `[0, MAX_MS]`.
pub fn format_time(ms: u64) -> FormattedTime {
    let ms = ms.min(MAX_MS);
    let total = ms / 1000;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    let main = if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    };
    FormattedTime {
        main,
        fraction: format!(".{:03}", ms % 1000),
    }
}

/// Whole-second rendering used to refill the duration input from a persisted
/// total. Round-trips through `parse::parse_human_time` for whole seconds.
pub fn humanize(ms: u64) -> String {
    format_time(ms).main
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_ms_matches_display_cap() {
        assert_eq!(MAX_MS, 359_999_999);
    }

    #[test]
    fn format_zero() {
        let f = format_time(0);
        assert_eq!(f.main, "00:00");
        assert_eq!(f.fraction, ".000");
    }

    #[test]
    fn format_max_and_clamp_above() {
        let at_cap = format_time(MAX_MS);
        assert_eq!(at_cap.main, "99:59:59");
        assert_eq!(at_cap.fraction, ".999");
        assert_eq!(format_time(MAX_MS + 123_456), at_cap);
    }

    #[test]
    fn format_pads_and_switches_layout_at_one_hour() {
        assert_eq!(format_time(59 * 60_000 + 59_999).main, "59:59");
        assert_eq!(format_time(3_600_000).main, "01:00:00");
        assert_eq!(format_time(5_025_678).main, "01:23:45");
        assert_eq!(format_time(5_025_678).fraction, ".678");
    }

    #[test]
    fn format_is_monotonic_within_a_layout_bucket() {
        let sub_hour: Vec<String> = [0u64, 999, 1_000, 59_999, 60_000, 3_599_999]
            .iter()
            .map(|&ms| format_time(ms).main)
            .collect();
        assert!(sub_hour.windows(2).all(|w| w[0] <= w[1]));

        let with_hours: Vec<String> = [3_600_000u64, 3_661_000, 86_400_000, MAX_MS]
            .iter()
            .map(|&ms| format_time(ms).main)
            .collect();
        assert!(with_hours.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn humanize_round_trips_through_parser() {
        for ms in [0u64, 1_000, 90_000, 600_000, 3_600_000, 4_800_000, 359_999_000] {
            let text = humanize(ms);
            assert_eq!(parse::parse_human_time(&text), Ok(ms), "input {:?}", text);
        }
    }

    #[test]
    fn start_is_idempotent() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(1_000.0);
        e.start(5_000.0); // ignored; the segment origin must not move
        e.tick(3_000.0);
        assert_eq!(e.current_ms(), 2_000);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(0.0);
        e.pause(1_500.0);
        e.pause(9_999.0); // ignored
        assert_eq!(e.current_ms(), 1_500);
        assert!(!e.is_running());
    }

    #[test]
    fn stopwatch_accumulates_across_segments() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(0.0);
        e.pause(1_000.0);
        e.start(10_000.0);
        e.pause(10_500.0);
        assert_eq!(e.current_ms(), 1_500);
    }

    #[test]
    fn stopwatch_caps_and_stops() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(0.0);
        assert_eq!(e.tick(MAX_MS as f64 + 5_000.0), TickOutcome::CapReached);
        assert_eq!(e.current_ms(), MAX_MS);
        assert!(!e.is_running());
        // Continued (stale) ticking must not push past the cap.
        assert_eq!(e.tick(MAX_MS as f64 + 60_000.0), TickOutcome::Idle);
        assert_eq!(e.current_ms(), MAX_MS);
    }

    #[test]
    fn reset_zeroes_stopwatch() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(0.0);
        e.tick(4_000.0);
        e.reset();
        assert_eq!(e.current_ms(), 0);
        assert!(!e.is_running());
    }

    #[test]
    fn countdown_counts_down_and_finishes_once() {
        let mut e = TimerEngine::new(Mode::Countdown, 3_000);
        e.start(0.0);
        assert_eq!(e.tick(1_000.0), TickOutcome::Continue);
        assert_eq!(e.current_ms(), 2_000);
        assert_eq!(e.tick(3_000.0), TickOutcome::Finished);
        assert_eq!(e.current_ms(), 0);
        assert!(!e.is_running());
        // A stale frame after completion must not fire Finished again.
        assert_eq!(e.tick(4_000.0), TickOutcome::Idle);
    }

    #[test]
    fn countdown_overshoot_clamps_to_zero() {
        let mut e = TimerEngine::new(Mode::Countdown, 1_000);
        e.start(0.0);
        assert_eq!(e.tick(50_000.0), TickOutcome::Finished);
        assert_eq!(e.current_ms(), 0);
    }

    #[test]
    fn countdown_restart_after_finish_refills() {
        let mut e = TimerEngine::new(Mode::Countdown, 2_000);
        e.start(0.0);
        e.tick(2_000.0);
        assert_eq!(e.current_ms(), 0);
        e.start(10_000.0);
        assert_eq!(e.current_ms(), 2_000);
        assert_eq!(e.tick(10_500.0), TickOutcome::Continue);
        assert_eq!(e.current_ms(), 1_500);
    }

    #[test]
    fn reset_refills_countdown() {
        let mut e = TimerEngine::new(Mode::Countdown, 5_000);
        e.start(0.0);
        e.tick(2_000.0);
        e.reset();
        assert_eq!(e.current_ms(), 5_000);
        assert!(!e.is_running());
    }

    #[test]
    fn early_first_frame_never_inflates_countdown() {
        let mut e = TimerEngine::new(Mode::Countdown, 2_000);
        e.start(1_000.0);
        // The frame's vsync timestamp lands just before the click handler's
        // clock reading.
        assert_eq!(e.tick(995.0), TickOutcome::Continue);
        assert_eq!(e.current_ms(), 2_000);
        assert!(e.current_ms() <= e.countdown_total_ms());
        // And time resumes normally from the re-marked frame.
        assert_eq!(e.tick(1_995.0), TickOutcome::Continue);
        assert_eq!(e.current_ms(), 1_000);
    }

    #[test]
    fn early_first_frame_keeps_stopwatch_at_zero() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(1_000.0);
        assert_eq!(e.tick(995.0), TickOutcome::Continue);
        assert_eq!(e.current_ms(), 0);
        e.tick(3_000.0);
        assert_eq!(e.current_ms(), 2_000);
    }

    #[test]
    fn pause_never_clamps_countdown_below_zero() {
        let mut e = TimerEngine::new(Mode::Countdown, 1_000);
        e.start(0.0);
        e.pause(60_000.0);
        assert_eq!(e.current_ms(), 0);
    }

    #[test]
    fn mode_switch_pauses_and_leaks_no_time() {
        let mut e = TimerEngine::new(Mode::Stopwatch, 0);
        e.start(0.0);
        e.set_mode(Mode::Countdown, 2_000.0, 30_000);
        assert!(!e.is_running());
        assert_eq!(e.mode(), Mode::Countdown);
        assert_eq!(e.current_ms(), 30_000);
        // Idle time between the switch and the next start must not count.
        e.set_mode(Mode::Stopwatch, 90_000.0, 0);
        assert_eq!(e.current_ms(), 2_000);
    }

    #[test]
    fn mode_switch_to_same_mode_is_a_no_op() {
        let mut e = TimerEngine::new(Mode::Countdown, 10_000);
        e.start(0.0);
        e.set_mode(Mode::Countdown, 500.0, 99_000);
        assert!(e.is_running());
        assert_eq!(e.countdown_total_ms(), 10_000);
    }

    #[test]
    fn apply_countdown_clamps_to_cap() {
        let mut e = TimerEngine::new(Mode::Countdown, 0);
        e.apply_countdown(MAX_MS + 1);
        assert_eq!(e.countdown_total_ms(), MAX_MS);
        assert_eq!(e.current_ms(), MAX_MS);
    }

    #[test]
    fn mode_codes_round_trip() {
        assert_eq!(Mode::from_code(Mode::Countdown.as_code()), Mode::Countdown);
        assert_eq!(Mode::from_code(Mode::Stopwatch.as_code()), Mode::Stopwatch);
        assert_eq!(Mode::from_code("garbage"), Mode::Stopwatch);
    }
}

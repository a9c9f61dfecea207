use std::time::Duration;

/// Progress ticks every 150ms until the bar is full.
pub const PROGRESS_TICK: Duration = Duration::from_millis(150);

/// Pause between a full bar and revealing the page.
pub const PROGRESS_SETTLE: Duration = Duration::from_millis(200);

pub const MIN_INCREMENT: u8 = 3;
pub const MAX_INCREMENT: u8 = 10;

/// How a page fakes its loading screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingPlan {
    /// Reveal the page after a fixed delay.
    Fixed { delay: Duration },
    /// Advance a progress bar by random increments, then reveal.
    Progress { tick: Duration, settle: Duration },
}

impl LoadingPlan {
    pub const fn fixed_ms(ms: u64) -> Self {
        LoadingPlan::Fixed {
            delay: Duration::from_millis(ms),
        }
    }

    pub const fn progress() -> Self {
        LoadingPlan::Progress {
            tick: PROGRESS_TICK,
            settle: PROGRESS_SETTLE,
        }
    }
}

/// Loading state of a mounted page. `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading { progress: u8 },
    Ready,
}

impl Default for LoadPhase {
    fn default() -> Self {
        LoadPhase::Loading { progress: 0 }
    }
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    /// Progress in percent. A ready page always reports 100.
    pub fn progress(&self) -> u8 {
        match self {
            LoadPhase::Loading { progress } => *progress,
            LoadPhase::Ready => 100,
        }
    }

    /// Advance by `increment`, saturating at 100. No effect once ready.
    pub fn advance(self, increment: u8) -> LoadPhase {
        match self {
            LoadPhase::Loading { progress } => LoadPhase::Loading {
                progress: progress.saturating_add(increment).min(100),
            },
            LoadPhase::Ready => LoadPhase::Ready,
        }
    }

    /// True when the bar is full but the page has not been revealed yet.
    pub fn is_full(&self) -> bool {
        matches!(self, LoadPhase::Loading { progress: 100 })
    }

    pub fn finish(self) -> LoadPhase {
        LoadPhase::Ready
    }

    /// One interval tick of a progress plan, given a uniform sample in `[0, 1)`.
    ///
    /// Returns the next phase and whether the reveal should be scheduled now.
    /// That flag is raised exactly once, on the tick that fills the bar. A full
    /// bar or a ready page is left as it is; only the reveal moves to `Ready`.
    pub fn tick(self, sample: f64) -> (LoadPhase, bool) {
        if self.is_full() || self.is_ready() {
            return (self, false);
        }
        let next = self.advance(increment_from_unit(sample));
        (next, next.is_full())
    }

    /// Whether the page content replaces the loading screen.
    pub fn shows_content(&self) -> bool {
        self.is_ready()
    }
}

/// Map a uniform sample in `[0, 1)` to an increment in `3..=10`.
pub fn increment_from_unit(sample: f64) -> u8 {
    let span = f64::from(MAX_INCREMENT - MIN_INCREMENT + 1);
    let offset = (sample.clamp(0.0, 1.0) * span).floor() as u8;
    MIN_INCREMENT + offset.min(MAX_INCREMENT - MIN_INCREMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_loading_at_zero() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading { progress: 0 });
        assert!(!LoadPhase::default().is_ready());
    }

    #[test]
    fn test_advance_saturates_at_exactly_100() {
        let phase = LoadPhase::Loading { progress: 95 }.advance(10);
        assert_eq!(phase.progress(), 100);
        assert!(phase.is_full());
        assert!(!phase.is_ready());

        // A full bar stays full
        assert_eq!(phase.advance(7), phase);
    }

    #[test]
    fn test_ready_is_terminal() {
        let ready = LoadPhase::Loading { progress: 100 }.finish();
        assert!(ready.is_ready());
        assert_eq!(ready.advance(5), LoadPhase::Ready);
        assert_eq!(ready.progress(), 100);
    }

    #[test]
    fn test_tick_advances_within_increment_range() {
        let (next, reveal) = LoadPhase::default().tick(0.0);
        assert_eq!(next, LoadPhase::Loading { progress: 3 });
        assert!(!reveal);

        let (next, reveal) = LoadPhase::Loading { progress: 40 }.tick(0.99);
        assert_eq!(next, LoadPhase::Loading { progress: 50 });
        assert!(!reveal);
    }

    #[test]
    fn test_tick_that_fills_bar_requests_reveal() {
        let (next, reveal) = LoadPhase::Loading { progress: 97 }.tick(0.99);
        assert_eq!(next, LoadPhase::Loading { progress: 100 });
        assert!(reveal);
    }

    #[test]
    fn test_ticks_after_full_are_no_ops() {
        let full = LoadPhase::Loading { progress: 100 };
        for sample in [0.0, 0.5, 0.99] {
            assert_eq!(full.tick(sample), (full, false));
            assert_eq!(LoadPhase::Ready.tick(sample), (LoadPhase::Ready, false));
        }
    }

    #[test]
    fn test_tick_never_reaches_ready() {
        for progress in 0..=100u8 {
            for sample in [0.0, 0.3, 0.7, 0.99] {
                let (next, _) = LoadPhase::Loading { progress }.tick(sample);
                assert!(!next.is_ready(), "{} + tick({}) -> {:?}", progress, sample, next);
                assert!(next.progress() >= progress);
            }
        }
    }

    #[test]
    fn test_content_only_once_ready() {
        assert!(!LoadPhase::default().shows_content());
        assert!(!LoadPhase::Loading { progress: 100 }.shows_content());
        assert!(LoadPhase::Ready.shows_content());
    }

    #[test]
    fn test_increment_range() {
        assert_eq!(increment_from_unit(0.0), 3);
        assert_eq!(increment_from_unit(0.124), 3);
        assert_eq!(increment_from_unit(0.125), 4);
        assert_eq!(increment_from_unit(0.999_999), 10);
        // Out-of-range samples are clamped rather than overflowing
        assert_eq!(increment_from_unit(1.0), 10);
        assert_eq!(increment_from_unit(-3.0), 3);
    }

    #[test]
    fn test_every_increment_in_range() {
        for i in 0..1000 {
            let inc = increment_from_unit(i as f64 / 1000.0);
            assert!(
                (MIN_INCREMENT..=MAX_INCREMENT).contains(&inc),
                "Increment {} out of range for sample {}",
                inc,
                i
            );
        }
    }

    #[test]
    fn test_plans() {
        assert_eq!(
            LoadingPlan::fixed_ms(1500),
            LoadingPlan::Fixed {
                delay: Duration::from_millis(1500)
            }
        );
        match LoadingPlan::progress() {
            LoadingPlan::Progress { tick, settle } => {
                assert_eq!(tick.as_millis(), 150);
                assert_eq!(settle.as_millis(), 200);
            }
            other => panic!("Expected progress plan, got {:?}", other),
        }
    }
}

/// Completion phases for the active letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The letter is being traced.
    Tracing,
    /// Timed advance to the next letter; counts down in fixed steps.
    Transitioning { remaining_ms: u32 },
}

/// What a transition step asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionTick {
    /// Not transitioning.
    Idle,
    /// First half: hold the scene unchanged.
    Hold,
    /// Second half: draw the white overlay at this opacity.
    Fade(f32),
    /// Countdown finished: clear the fade and load the next letter.
    Finished,
}

/// Timed fade-to-white state machine between letters.
///
/// The countdown runs for `duration_ms`, decremented by `step_ms` per
/// simulated frame: the first half holds the completed scene, the second
/// half ramps a white overlay linearly to full opacity.
pub struct Transition {
    phase: Phase,
    duration_ms: u32,
    step_ms: u32,
}

impl Transition {
    pub fn new(duration_ms: u32, step_ms: u32) -> Self {
        Self {
            phase: Phase::Tracing,
            duration_ms,
            step_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Enter the countdown. Only possible while tracing; returns whether
    /// the transition actually started.
    pub fn begin(&mut self) -> bool {
        match self.phase {
            Phase::Tracing => {
                self.phase = Phase::Transitioning {
                    remaining_ms: self.duration_ms,
                };
                true
            }
            Phase::Transitioning { .. } => false,
        }
    }

    /// Abort any countdown (manual navigation).
    pub fn cancel(&mut self) {
        self.phase = Phase::Tracing;
    }

    /// Advance one fixed step.
    pub fn tick(&mut self) -> TransitionTick {
        let Phase::Transitioning { remaining_ms } = self.phase else {
            return TransitionTick::Idle;
        };

        let half = self.duration_ms / 2;
        if remaining_ms > half {
            self.phase = Phase::Transitioning {
                remaining_ms: remaining_ms.saturating_sub(self.step_ms),
            };
            TransitionTick::Hold
        } else if remaining_ms > 0 {
            let alpha = if half == 0 {
                1.0
            } else {
                (half - remaining_ms) as f32 / half as f32
            };
            self.phase = Phase::Transitioning {
                remaining_ms: remaining_ms.saturating_sub(self.step_ms),
            };
            TransitionTick::Fade(alpha)
        } else {
            self.phase = Phase::Tracing;
            TransitionTick::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_from_tracing() {
        let mut t = Transition::new(3200, 16);
        assert!(t.begin());
        assert!(!t.begin());
        assert_eq!(
            t.phase(),
            Phase::Transitioning { remaining_ms: 3200 }
        );
    }

    #[test]
    fn holds_then_fades_then_finishes() {
        let mut t = Transition::new(3200, 16);
        t.begin();

        // First half: 100 hold steps (3200 -> 1600)
        for _ in 0..100 {
            assert_eq!(t.tick(), TransitionTick::Hold);
        }

        // Second half: 100 fade steps with alpha ramping 0 -> 1
        let mut last_alpha = -1.0;
        for _ in 0..100 {
            match t.tick() {
                TransitionTick::Fade(alpha) => {
                    assert!(alpha >= last_alpha, "fade must be monotonic");
                    assert!((0.0..=1.0).contains(&alpha));
                    last_alpha = alpha;
                }
                other => panic!("expected Fade, got {other:?}"),
            }
        }

        assert_eq!(t.tick(), TransitionTick::Finished);
        assert_eq!(t.phase(), Phase::Tracing);
    }

    #[test]
    fn fade_starts_at_zero() {
        let mut t = Transition::new(3200, 16);
        t.begin();
        for _ in 0..100 {
            t.tick();
        }
        assert_eq!(t.tick(), TransitionTick::Fade(0.0));
    }

    #[test]
    fn cancel_returns_to_tracing() {
        let mut t = Transition::new(3200, 16);
        t.begin();
        t.tick();
        t.cancel();
        assert_eq!(t.phase(), Phase::Tracing);
        assert_eq!(t.tick(), TransitionTick::Idle);
    }

    #[test]
    fn idle_without_begin() {
        let mut t = Transition::new(3200, 16);
        assert_eq!(t.tick(), TransitionTick::Idle);
    }
}

use std::time::Duration;

/// Lifecycle of one simulated progress run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl ProgressPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// What the progress dialog should display after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressFrame {
    pub value: u32,
    pub finished: bool,
}

/// Static description of the progress dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRequest {
    pub label: String,
    pub cancel_label: String,
    pub minimum: u32,
    pub maximum: u32,
    pub interval: Duration,
}

/// Fixed-step progress counter.
///
/// Every tick adds `step` regardless of how late the tick fired, so an
/// uninterrupted run always takes `ceil(maximum / step)` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    value: u32,
    maximum: u32,
    step: u32,
    ticks: u32,
    phase: ProgressPhase,
}

impl ProgressState {
    pub fn new(step: u32, maximum: u32) -> Self {
        Self {
            value: 0,
            maximum,
            step: step.max(1),
            ticks: 0,
            phase: ProgressPhase::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.phase == ProgressPhase::Idle {
            self.phase = if self.maximum == 0 {
                ProgressPhase::Completed
            } else {
                ProgressPhase::Running
            };
        }
    }

    /// Advance one tick. A pending cancel request wins over advancing.
    /// Ticks after a terminal phase change nothing.
    pub fn tick(&mut self, cancel_requested: bool) -> ProgressFrame {
        if self.phase == ProgressPhase::Running {
            if cancel_requested {
                self.phase = ProgressPhase::Cancelled;
            } else {
                self.ticks += 1;
                self.value = self.value.saturating_add(self.step).min(self.maximum);
                if self.value >= self.maximum {
                    self.phase = ProgressPhase::Completed;
                }
            }
        }
        self.frame()
    }

    pub fn frame(&self) -> ProgressFrame {
        ProgressFrame {
            value: self.value,
            finished: self.phase.is_terminal(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_fifty_ticks() {
        let mut state = ProgressState::new(2, 100);
        state.start();
        let mut frames = 0;
        while !state.tick(false).finished {
            frames += 1;
            assert!(frames < 1000, "never finished");
        }
        assert_eq!(state.ticks(), 50);
        assert_eq!(state.value(), 100);
        assert_eq!(state.phase(), ProgressPhase::Completed);
    }

    #[test]
    fn test_cancel_stops_without_advancing() {
        let mut state = ProgressState::new(2, 100);
        state.start();
        for _ in 0..10 {
            state.tick(false);
        }
        let frame = state.tick(true);
        assert!(frame.finished);
        assert_eq!(frame.value, 20);
        assert_eq!(state.phase(), ProgressPhase::Cancelled);

        // Terminal: further ticks are ignored
        state.tick(false);
        assert_eq!(state.value(), 20);
        assert_eq!(state.ticks(), 10);
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut state = ProgressState::new(2, 100);
        let frame = state.tick(false);
        assert_eq!(frame.value, 0);
        assert!(!frame.finished);
        assert_eq!(state.phase(), ProgressPhase::Idle);
    }

    #[test]
    fn test_uneven_step_is_clamped_to_maximum() {
        let mut state = ProgressState::new(3, 100);
        state.start();
        while !state.tick(false).finished {}
        assert_eq!(state.value(), 100);
        assert_eq!(state.ticks(), 34);
    }

    #[test]
    fn test_zero_step_still_progresses() {
        let mut state = ProgressState::new(0, 4);
        state.start();
        while !state.tick(false).finished {}
        assert_eq!(state.ticks(), 4);
    }
}

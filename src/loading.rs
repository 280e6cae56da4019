use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Splash,
    Ready,
}

/// Timer-gated splash: opens once when the configured duration has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingGate {
    duration: Duration,
    phase: LoadingPhase,
}

impl LoadingGate {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: LoadingPhase::Splash,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        self.phase == LoadingPhase::Ready
    }

    /// Returns `true` only for the call that performs the splash-to-page swap.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.phase == LoadingPhase::Ready || elapsed < self.duration {
            return false;
        }
        self.phase = LoadingPhase::Ready;
        true
    }
}

/// StepTimer is the cancellable single-shot delay that paces the simulation.
/// It is re-armed only after the step it gated has completed, so at most one
/// step is ever pending and cancelling the timer is how pause and reset stop
/// the loop. Times are seconds on the caller's clock.
#[derive(Debug, Default)]
pub struct StepTimer {
    deadline: Option<f64>,
}

impl StepTimer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer one interval from now, replacing any pending deadline
    pub fn arm(&mut self, now: f64, interval_ms: f64) {
        self.deadline = Some(now + interval_ms / 1000.0);
    }

    /// Drop the pending deadline; a cancelled timer is never due
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the armed deadline has passed
    pub fn is_due(&self, now: f64) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_is_never_due() {
        let timer = StepTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.is_due(1_000_000.0));
    }

    #[test]
    fn test_due_only_after_deadline() {
        let mut timer = StepTimer::new();
        timer.arm(10.0, 60.0);
        assert!(timer.is_armed());
        assert!(!timer.is_due(10.0));
        assert!(!timer.is_due(10.059));
        assert!(timer.is_due(10.06));
        assert!(timer.is_due(11.0));
    }

    #[test]
    fn test_cancel_clears_deadline() {
        let mut timer = StepTimer::new();
        timer.arm(0.0, 30.0);
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.is_due(1.0));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = StepTimer::new();
        timer.arm(0.0, 60.0);
        timer.arm(0.0, 500.0);
        assert!(!timer.is_due(0.1));
        assert!(timer.is_due(0.5));
    }
}

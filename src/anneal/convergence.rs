//! Patience-based stopping rule.

/// Declares convergence after `patience` consecutive iterations whose
/// energy moved by less than `tolerance`.
///
/// Only successive values are compared, never current against best, so a
/// long flat plateau stops the run even if it is not the best energy seen.
/// No stop is signalled before two values have been compared, whatever the
/// patience.
///
/// # Examples
///
/// ```
/// use u_seriate::ConvergenceMonitor;
///
/// let mut monitor = ConvergenceMonitor::new(0.5, 2);
/// monitor.observe(10.0);
/// monitor.observe(10.1);
/// assert!(!monitor.should_stop());
/// monitor.observe(10.2);
/// assert!(monitor.should_stop());
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    tolerance: f64,
    patience: usize,
    last: Option<f64>,
    comparisons: usize,
    stalls: usize,
}

impl ConvergenceMonitor {
    pub fn new(tolerance: f64, patience: usize) -> Self {
        Self {
            tolerance,
            patience,
            last: None,
            comparisons: 0,
            stalls: 0,
        }
    }

    /// Records the next value of the energy trajectory.
    pub fn observe(&mut self, energy: f64) {
        if let Some(previous) = self.last {
            self.comparisons += 1;
            if (energy - previous).abs() < self.tolerance {
                self.stalls += 1;
            } else {
                self.stalls = 0;
            }
        }
        self.last = Some(energy);
    }

    /// Consecutive stalls since the last significant change.
    pub fn stall_count(&self) -> usize {
        self.stalls
    }

    pub fn should_stop(&self) -> bool {
        self.comparisons > 0 && self.stalls >= self.patience
    }
}

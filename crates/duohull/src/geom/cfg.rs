//! Tolerance and instrumentation defaults.
//!
//! Policy
//! - One relative epsilon decides "collinear" for every tolerant orientation
//!   test in the crate (pruning, stack checks, brute-force side tests).
//!   Callers that change it change it for both algorithms at once by passing
//!   the same `HullCfg`.
//! - The polar sort alone uses exact orientation signs; it needs a total order.

/// Largest sine of a turn that still counts as collinear.
pub const ORIENT_EPS: f64 = 1e-12;

/// How the scan reports its operation count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterMode {
    /// Analytic `round(n·log2(n)·1.5)` sort estimate plus every orientation
    /// test the scan actually runs (comparator calls and stack checks).
    #[default]
    Hybrid,
    /// Orientation tests only.
    Pure,
}

/// Engine configuration (tolerance + counter policy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps: f64,
    pub counter: CounterMode,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: ORIENT_EPS,
            counter: CounterMode::Hybrid,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_counter(mut self, counter: CounterMode) -> Self {
        self.counter = counter;
        self
    }

    #[inline]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps.abs();
        self
    }
}

//! Per-invocation operation counter.

/// Monotone counter scoped to one algorithm run. Starts at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounter(u64);

impl OpCounter {
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }
    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.0 += n;
    }
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Analytic sort cost `round(n · log2(n) · 1.5)`; zero for `n < 2`.
pub fn sort_estimate(n: usize) -> u64 {
    if n < 2 {
        return 0;
    }
    let n = n as f64;
    (n * n.log2() * 1.5).round() as u64
}

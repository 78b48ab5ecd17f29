//! The UT → TT correction seam.
//!
//! Delta-T is supplied by the surrounding system (observed/predicted
//! tables, a polynomial model, or a fixed value for tests). The engine
//! only consumes it through this trait.

/// Provider of the UT → TT offset.
pub trait DeltaT {
    /// ΔT in days at the given UT Julian Day, so that `jd_tt = jd_ut + ΔT`.
    fn delta_t_days(&self, jd_ut: f64) -> f64;
}

/// A constant ΔT, specified in seconds.
///
/// Useful for tests and for callers that precompute ΔT externally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDeltaT {
    seconds: f64,
}

impl FixedDeltaT {
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }

    /// ΔT = 0: treat UT and TT as identical.
    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }
}

impl DeltaT for FixedDeltaT {
    fn delta_t_days(&self, _jd_ut: f64) -> f64 {
        self.seconds / 86_400.0
    }
}

impl<D: DeltaT + ?Sized> DeltaT for &D {
    fn delta_t_days(&self, jd_ut: f64) -> f64 {
        (**self).delta_t_days(jd_ut)
    }
}

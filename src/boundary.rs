//! Opaque-handle surface with status out-parameters.
//!
//! For callers that cannot consume a structured `Result` (FFI glue, table
//! driven harnesses). Each operation returns a plain value and, when given
//! one, writes a [`Status`] into the out-parameter. On failure the value is
//! the type's zero and the generator is untouched.
//!
//! ```
//! use variate::boundary::{Handle, Status};
//!
//! let mut h = Handle::seeded(1234);
//! let mut status = Status::Ok;
//! let x = h.normal(0.0, -1.0, Some(&mut status));
//! assert_eq!(status, Status::InvalidParameter);
//! assert_eq!(x, 0.0);
//! ```

use crate::error::{Error, Result};
use crate::source::Random;

/// Outcome written to a status out-parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ok,
    InvalidParameter,
    InvalidRange,
}

impl Status {
    /// Numeric code: 0 on success, non-zero on failure.
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::InvalidParameter => 1,
            Status::InvalidRange => 2,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidParameter { .. } => Status::InvalidParameter,
            Error::InvalidRange { .. } | Error::BufferLength { .. } => Status::InvalidRange,
        }
    }
}

fn report<T: Default>(result: Result<T>, status: Option<&mut Status>) -> T {
    let (value, outcome) = match result {
        Ok(v) => (v, Status::Ok),
        Err(e) => (T::default(), Status::from(&e)),
    };
    if let Some(s) = status {
        *s = outcome;
    }
    value
}

/// One generator instance behind an opaque handle.
///
/// Dropping the handle releases the generator.
#[derive(Debug)]
pub struct Handle {
    rng: Random,
}

macro_rules! forward {
    ($( $(#[$doc:meta])* $name:ident ( $($arg:ident : $ty:ty),* ) -> $ret:ty; )*) => {$(
        $(#[$doc])*
        pub fn $name(&mut self, $($arg: $ty,)* status: Option<&mut Status>) -> $ret {
            report(self.rng.$name($($arg),*), status)
        }
    )*};
}

impl Handle {
    /// Handle seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: Random::new() }
    }

    /// Handle with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Random::seeded(seed),
        }
    }

    /// Re-seed the underlying generator.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed_with(seed);
    }

    /// Borrow the underlying generator.
    pub fn generator(&mut self) -> &mut Random {
        &mut self.rng
    }

    forward! {
        bernoulli(p: f64) -> bool;
        binomial(t: u64, p: f64) -> u64;
        cauchy(a: f64, b: f64) -> f64;
        chi_squared(n: f64) -> f64;
        exponential(lambda: f64) -> f64;
        extreme_value(a: f64, b: f64) -> f64;
        fisher_f(m: f64, n: f64) -> f64;
        gamma(alpha: f64, beta: f64) -> f64;
        geometric(p: f64) -> u64;
        lognormal(m: f64, s: f64) -> f64;
        negative_binomial(k: u64, p: f64) -> u64;
        normal(mean: f64, stddev: f64) -> f64;
        poisson(mean: f64) -> u64;
        student_t(n: f64) -> f64;
        uniform_int(a: i64, b: i64) -> i64;
        uniform_real(a: f64, b: f64) -> f64;
        weibull(a: f64, b: f64) -> f64;
    }

    /// Shuffle a 32-bit buffer in place.
    pub fn shuffle_i32(&mut self, items: &mut [i32]) {
        self.rng.shuffle(items);
    }

    /// Shuffle a 64-bit buffer in place.
    pub fn shuffle_i64(&mut self, items: &mut [i64]) {
        self.rng.shuffle(items);
    }

    /// Write `r` distinct values from `[0, n)` into `out` (32-bit indices).
    pub fn sample_i32(&mut self, n: i32, r: i32, out: &mut [i32], status: Option<&mut Status>) {
        report(self.rng.sample_into(n, r, out), status)
    }

    /// Write `r` distinct values from `[0, n)` into `out` (64-bit indices).
    pub fn sample_i64(&mut self, n: i64, r: i64, out: &mut [i64], status: Option<&mut Status>) {
        report(self.rng.sample_into(n, r, out), status)
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_direct_interface() {
        let mut h = Handle::seeded(42);
        let mut rng = Random::seeded(42);
        let mut status = Status::InvalidRange;

        let x = h.normal(1.0, 2.0, Some(&mut status));
        assert_eq!(status, Status::Ok);
        assert_eq!(x, rng.normal(1.0, 2.0).unwrap());

        assert_eq!(h.poisson(4.0, None), rng.poisson(4.0).unwrap());
        assert_eq!(
            h.uniform_int(-5, 5, None),
            rng.uniform_int(-5, 5).unwrap()
        );
    }

    #[test]
    fn failure_reports_status_and_zero() {
        let mut h = Handle::seeded(1);
        let mut status = Status::Ok;

        assert_eq!(h.geometric(0.0, Some(&mut status)), 0);
        assert_eq!(status, Status::InvalidParameter);
        assert_eq!(status.code(), 1);

        assert!(!h.bernoulli(2.0, Some(&mut status)));
        assert_eq!(status, Status::InvalidParameter);

        // Without an out-parameter the failure is still a zero value.
        assert_eq!(h.weibull(-1.0, 1.0, None), 0.0);

        h.exponential(1.0, Some(&mut status));
        assert!(status.is_ok());
        assert_eq!(status.code(), 0);
    }

    #[test]
    fn rejected_call_leaves_stream() {
        let mut a = Handle::seeded(9);
        let mut b = Handle::seeded(9);
        a.gamma(0.0, 1.0, None);
        assert_eq!(a.uniform_real(0.0, 1.0, None), b.uniform_real(0.0, 1.0, None));
    }

    #[test]
    fn reseed_restarts() {
        let mut h = Handle::seeded(5);
        let first = h.uniform_int(0, 1_000_000, None);
        h.reseed(5);
        assert_eq!(h.uniform_int(0, 1_000_000, None), first);
    }

    #[test]
    fn sample_widths() {
        let mut h = Handle::seeded(1234);
        let mut status = Status::InvalidParameter;

        let mut small = [0i32; 3];
        h.sample_i32(10, 3, &mut small, Some(&mut status));
        assert!(status.is_ok());
        assert!(small.iter().all(|&x| (0..10).contains(&x)));

        let mut wide = [0i64; 40];
        h.sample_i64(40, 40, &mut wide, Some(&mut status));
        assert!(status.is_ok());
        wide.sort_unstable();
        assert_eq!(wide.to_vec(), (0..40).collect::<Vec<i64>>());

        h.sample_i32(2, 3, &mut small, Some(&mut status));
        assert_eq!(status, Status::InvalidRange);

        h.sample_i64(-1, 0, &mut [], Some(&mut status));
        assert_eq!(status, Status::InvalidRange);
    }

    #[test]
    fn shuffle_widths() {
        let mut h = Handle::seeded(6);
        let mut xs: Vec<i32> = (0..50).collect();
        h.shuffle_i32(&mut xs);
        xs.sort_unstable();
        assert_eq!(xs, (0..50).collect::<Vec<_>>());

        let mut ys: Vec<i64> = (0..50).collect();
        h.shuffle_i64(&mut ys);
        ys.sort_unstable();
        assert_eq!(ys, (0..50).collect::<Vec<_>>());
    }
}

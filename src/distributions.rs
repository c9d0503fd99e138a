//! Distribution catalog.
//!
//! One method per named distribution. Each validates its parameters, then
//! draws exactly one variate from the generator's engine. Validation always
//! runs first: a rejected call leaves the stream exactly where it was.
//!
//! Sampling itself is delegated to `rand_distr`; conventions follow the usual
//! textbook definitions:
//! - `extreme_value(a, b)` is Gumbel with location `a`, scale `b`.
//! - `weibull(a, b)` has shape `a`, scale `b`.
//! - `gamma(alpha, beta)` has shape `alpha`, scale `beta`.
//! - `geometric` and `negative_binomial` count failures before the first
//!   (respectively `k`-th) success.

use rand::Rng;
use rand_distr::{
    Bernoulli, Binomial, Cauchy, ChiSquared, Distribution, Exp, FisherF, Gamma, Geometric,
    Gumbel, LogNormal, Normal, Poisson, StudentT, Uniform, Weibull,
};
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::Random;

/// Reject unless `ok`. Written so that NaN-valued comparisons reject.
#[inline]
fn check(ok: bool, distribution: &'static str, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        debug!(distribution, reason, "rejected distribution parameters");
        Err(Error::invalid(distribution, reason))
    }
}

/// Map a residual constructor rejection (e.g. non-finite input) onto the
/// same error.
#[inline]
fn build<D, E>(built: std::result::Result<D, E>, distribution: &'static str) -> Result<D> {
    built.map_err(|_| {
        debug!(distribution, "distribution constructor rejected parameters");
        Error::invalid(distribution, "parameters not representable")
    })
}

fn probability(p: f64, distribution: &'static str) -> Result<()> {
    check(
        (0.0..=1.0).contains(&p),
        distribution,
        "probability must be in [0, 1]",
    )
}

impl Random {
    /// `true` with probability `p`, `0 <= p <= 1`.
    pub fn bernoulli(&mut self, p: f64) -> Result<bool> {
        probability(p, "bernoulli")?;
        let d = build(Bernoulli::new(p), "bernoulli")?;
        Ok(d.sample(self))
    }

    /// Successes in `t` trials with success probability `p`.
    pub fn binomial(&mut self, t: u64, p: f64) -> Result<u64> {
        probability(p, "binomial")?;
        let d = build(Binomial::new(t, p), "binomial")?;
        Ok(d.sample(self))
    }

    /// Cauchy with location `a` and scale `b > 0`.
    pub fn cauchy(&mut self, a: f64, b: f64) -> Result<f64> {
        check(b > 0.0, "cauchy", "scale must be positive")?;
        let d = build(Cauchy::new(a, b), "cauchy")?;
        Ok(d.sample(self))
    }

    /// Chi-squared with `n > 0` degrees of freedom.
    pub fn chi_squared(&mut self, n: f64) -> Result<f64> {
        check(n > 0.0, "chi_squared", "degrees of freedom must be positive")?;
        let d = build(ChiSquared::new(n), "chi_squared")?;
        Ok(d.sample(self))
    }

    /// Exponential with rate `lambda > 0`.
    pub fn exponential(&mut self, lambda: f64) -> Result<f64> {
        check(lambda > 0.0, "exponential", "rate must be positive")?;
        let d = build(Exp::new(lambda), "exponential")?;
        Ok(d.sample(self))
    }

    /// Type-I extreme value (Gumbel) with location `a` and scale `b > 0`.
    pub fn extreme_value(&mut self, a: f64, b: f64) -> Result<f64> {
        check(b > 0.0, "extreme_value", "scale must be positive")?;
        let d = build(Gumbel::new(a, b), "extreme_value")?;
        Ok(d.sample(self))
    }

    /// Fisher F with `m > 0` and `n > 0` degrees of freedom.
    pub fn fisher_f(&mut self, m: f64, n: f64) -> Result<f64> {
        check(
            m > 0.0 && n > 0.0,
            "fisher_f",
            "degrees of freedom must be positive",
        )?;
        let d = build(FisherF::new(m, n), "fisher_f")?;
        Ok(d.sample(self))
    }

    /// Gamma with shape `alpha > 0` and scale `beta > 0`.
    pub fn gamma(&mut self, alpha: f64, beta: f64) -> Result<f64> {
        check(
            alpha > 0.0 && beta > 0.0,
            "gamma",
            "shape and scale must be positive",
        )?;
        let d = build(Gamma::new(alpha, beta), "gamma")?;
        Ok(d.sample(self))
    }

    /// Failures before the first success, success probability `0 < p <= 1`.
    pub fn geometric(&mut self, p: f64) -> Result<u64> {
        check(
            p > 0.0 && p <= 1.0,
            "geometric",
            "probability must be in (0, 1]",
        )?;
        let d = build(Geometric::new(p), "geometric")?;
        Ok(d.sample(self))
    }

    /// Lognormal whose logarithm has mean `m` and standard deviation `s > 0`.
    pub fn lognormal(&mut self, m: f64, s: f64) -> Result<f64> {
        check(s > 0.0, "lognormal", "standard deviation must be positive")?;
        let d = build(LogNormal::new(m, s), "lognormal")?;
        Ok(d.sample(self))
    }

    /// Failures before the `k`-th success, success probability `p`.
    ///
    /// Drawn as a Poisson–Gamma mixture. `k == 0` or `p == 1` yields 0 and
    /// `p == 0` (success never happens) saturates to `u64::MAX`; none of
    /// these consume randomness.
    pub fn negative_binomial(&mut self, k: u64, p: f64) -> Result<u64> {
        probability(p, "negative_binomial")?;
        if k == 0 || p == 1.0 {
            return Ok(0);
        }
        if p == 0.0 {
            return Ok(u64::MAX);
        }

        let mixing = build(Gamma::new(k as f64, (1.0 - p) / p), "negative_binomial")?;
        let rate: f64 = mixing.sample(self);
        // Poisson rejects a zero or enormous rate; either way the count is the
        // rate itself (saturating float-to-int cast).
        let count: f64 = match Poisson::new(rate) {
            Ok(d) => d.sample(self),
            Err(_) => rate,
        };
        Ok(count as u64)
    }

    /// Normal with the given mean and standard deviation `stddev > 0`.
    pub fn normal(&mut self, mean: f64, stddev: f64) -> Result<f64> {
        check(stddev > 0.0, "normal", "standard deviation must be positive")?;
        let d = build(Normal::new(mean, stddev), "normal")?;
        Ok(d.sample(self))
    }

    /// Poisson with `mean > 0`.
    pub fn poisson(&mut self, mean: f64) -> Result<u64> {
        check(mean > 0.0, "poisson", "mean must be positive")?;
        let d = build(Poisson::new(mean), "poisson")?;
        let x: f64 = d.sample(self);
        Ok(x as u64)
    }

    /// Student's t with `n > 0` degrees of freedom.
    pub fn student_t(&mut self, n: f64) -> Result<f64> {
        check(n > 0.0, "student_t", "degrees of freedom must be positive")?;
        let d = build(StudentT::new(n), "student_t")?;
        Ok(d.sample(self))
    }

    /// Uniform integer on the inclusive range `[a, b]`, `a < b`.
    pub fn uniform_int(&mut self, a: i64, b: i64) -> Result<i64> {
        check(a < b, "uniform_int", "lower bound must be below upper bound")?;
        let d = build(Uniform::new_inclusive(a, b), "uniform_int")?;
        Ok(d.sample(self))
    }

    /// Uniform real on the half-open range `[a, b)`, `a <= b`.
    ///
    /// An empty range `a == b` returns `a` without drawing.
    pub fn uniform_real(&mut self, a: f64, b: f64) -> Result<f64> {
        check(
            a <= b,
            "uniform_real",
            "lower bound must not exceed upper bound",
        )?;
        if a == b {
            return Ok(a);
        }
        let d = build(Uniform::new(a, b), "uniform_real")?;
        Ok(d.sample(self))
    }

    /// Weibull with shape `a > 0` and scale `b > 0`.
    pub fn weibull(&mut self, a: f64, b: f64) -> Result<f64> {
        check(
            a > 0.0 && b > 0.0,
            "weibull",
            "shape and scale must be positive",
        )?;
        // rand_distr orders the arguments (scale, shape).
        let d = build(Weibull::new(b, a), "weibull")?;
        Ok(d.sample(self))
    }

    /// Uniform index in `[0, n)`; `n` must be non-zero.
    #[inline]
    pub(crate) fn uniform_below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        self.random_range(0..n)
    }
}

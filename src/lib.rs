//! `variate`: seedable random variates and without-replacement sampling.
//!
//! A single owned generator, [`Random`], drives everything: named
//! distributions, in-place shuffling, and selection of `r` distinct values
//! out of `n`. One seed controls a whole program's randomness; there is no
//! global state, so use one generator per thread.
//!
//! Exposed modules:
//! - `source`: the generator and its seeding.
//! - `distributions`: one validated draw per named distribution.
//! - `shuffle`: uniform in-place permutation.
//! - `sample`: sparse/dense sampling without replacement.
//! - `boundary`: opaque handle reporting failures through status out-parameters.
//! - `config`: seed selection from the environment or TOML.
//!
//! ```
//! use variate::Random;
//!
//! let mut rng = Random::seeded(1234);
//! let x = rng.normal(0.0, 1.0)?;
//! let picks: Vec<u32> = rng.sample(10, 3)?;
//! assert!(x.is_finite());
//! assert_eq!(picks.len(), 3);
//! # Ok::<(), variate::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod boundary;
pub mod config;
pub mod distributions;
pub mod error;
pub mod sample;
pub mod shuffle;
pub mod source;

pub use boundary::{Handle, Status};
pub use config::{SeedConfig, SeedSource};
pub use error::{ConfigError, Error, Result};
pub use sample::{SampleIndex, Strategy};
pub use shuffle::shuffle_with_rng;
pub use source::Random;

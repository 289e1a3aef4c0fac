#![deny(warnings, missing_debug_implementations, missing_docs)]

//! Grabbag is a collection of small utilities for game loops and simulations.
//!
//! The two main containers are:
//!
//! - [`RandomBag`](bag::RandomBag), a shuffle bag. It hands out items in random order without
//!   replacement, and refills and reshuffles itself once it is empty. Within every filling, each
//!   item appears a fixed number of times, so randomness never drifts into long droughts or
//!   streaks.
//! - [`RollingArray`](rolling::RollingArray), a fixed-capacity history of the last N appended
//!   values with O(1) append and O(1) access by age.
//!
//! Alongside them are a [countdown timer](countdown::Countdown), [numeric ranges](range),
//! [mapping and easing math](math), and a few [iterator](iter) and [slice](rand) helpers.
//!
//! ## Reproducible randomness
//!
//! Everything random in this crate takes its generator from the caller or from a seed. A bag
//! built from a fixed seed hands out the same sequence every time, which makes a failing test
//! reproducible:
//!
//! ```
//! use grabbag::bag::{RandomBag, RefillSource};
//!
//! let pieces = ["I", "O", "T", "J", "L", "S", "Z"];
//! let mut first = RandomBag::new_from_seed(RefillSource::items(pieces.to_vec()), 2, 7).unwrap();
//! let mut second = RandomBag::new_from_seed(RefillSource::items(pieces.to_vec()), 2, 7).unwrap();
//! assert_eq!(first.pop_many(50).unwrap(), second.pop_many(50).unwrap());
//! ```
//!
//! ## Concurrency
//!
//! The containers are meant for single-threaded use inside an update loop. Nothing here locks;
//! callers that share a container across threads must wrap it in their own mutex.
//!
//! ## Logging
//!
//! Refills, source changes and timer loops are reported through [`tracing`] at `debug` and
//! `trace` level. The crate never installs a subscriber.

pub mod bag;
pub mod countdown;
pub mod error;
pub mod iter;
pub mod math;
pub mod rand;
pub mod range;
pub mod rolling;

pub use error::{Error, Result};

/// Configuration parameters for a [`RandomBag`](bag::RandomBag)
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct Config {
    /// How many times the refill source is drained into the bag per filling
    pub fill_count: usize,

    /// Seed for the bag's generator. `None` seeds it from the operating system.
    pub seed: Option<u64>,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            fill_count: 1,
            seed: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

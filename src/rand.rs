//! Randomness helpers shared by the containers in this crate.
//!
//! Every randomized operation takes its generator as an argument, so any [`RngCore`] can be used.
//! The [`rngs`] module provides the default generator and ways to seed it either from the OS or
//! from a fixed `u64` for reproducible runs.

/// Random number generators and constructors
pub mod rngs {
    use rand::rngs::OsRng;
    use rand_core::{RngCore, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// The generator used when the caller doesn't supply one.
    ///
    /// It is small, fast, and fully determined by its seed, which makes failures found with a
    /// given seed reproducible.
    pub type DefaultRng = Pcg64Mcg;

    /// Construct a [`DefaultRng`] from a given seed.
    ///
    /// Two generators created from the same seed produce the same stream of values.
    pub fn from_seed(seed: u64) -> DefaultRng {
        Pcg64Mcg::seed_from_u64(seed)
    }

    /// Construct a [`DefaultRng`] seeded by the operating system.
    pub fn from_os() -> DefaultRng {
        from_seed(OsRng.next_u64())
    }
}

/// Shuffle `slice` in place.
///
/// Walks the slice once from the front, swapping every position with a position drawn uniformly
/// from the whole slice.
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    let len = slice.len();
    for i in 0..len {
        let j = rng.gen_range(0..len);
        slice.swap(i, j);
    }
}

/// Return a uniformly chosen element of `slice`, or `None` if it is empty.
pub fn random_element<'a, T, R: Rng + ?Sized>(slice: &'a [T], rng: &mut R) -> Option<&'a T> {
    if slice.is_empty() {
        None
    } else {
        Some(&slice[rng.gen_range(0..slice.len())])
    }
}

pub use rand::Rng;
pub use rand_core::{RngCore, SeedableRng};

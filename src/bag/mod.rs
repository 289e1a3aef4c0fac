//! A shuffle bag that hands out items without replacement and refills itself when it runs dry.
//!
//! A [`RandomBag`] guarantees that within every filling of `fill_count × items_per_drain` draws,
//! each item supplied by the refill source comes out exactly `fill_count` times, in a random
//! order. This is the "7-bag" familiar from falling-block puzzle games: fill the bag with one of
//! each of the seven pieces, hand them out at random until it's empty, then refill. Two occurrences
//! of the same piece are never more than 14 draws apart, and only that far when the piece is the
//! last of one filling and the first of the next.
//!
//! ```
//! use grabbag::bag::{RandomBag, RefillSource};
//!
//! let mut bag = RandomBag::new_from_seed(RefillSource::items(vec!['a', 'b']), 2, 0x1234).unwrap();
//! let mut drawn = bag.pop_many(4).unwrap();
//! drawn.sort();
//! assert_eq!(drawn, vec!['a', 'a', 'b', 'b']);
//! ```

use crate::error::{Error, Result};
use crate::rand::rngs::{self, DefaultRng};
use crate::rand::shuffle;
use crate::Config;
use rand_core::RngCore;
use tracing::{debug, trace};

mod source;

pub use source::{Generator, RefillSource};

/// A shuffled multiset of items handed out one at a time, refilled and reshuffled automatically
/// once it is empty.
///
/// The generator `R` decides the shuffle order. Use [`RandomBag::new_from_seed`] or
/// [`RandomBag::with_rng`] when draws need to be reproducible.
#[derive(Debug)]
pub struct RandomBag<T, R = DefaultRng> {
    source: RefillSource<T>,
    fill_count: usize,
    // Remaining items of the current filling. The next item to dispense is at the back.
    bag: Vec<T>,
    // Scratch space for assembling and shuffling the next filling
    working: Vec<T>,
    rng: R,
}

impl<T: Clone> RandomBag<T> {
    /// Construct a new bag that drains `source` into itself `fill_count` times per filling, with a
    /// freshly seeded generator.
    ///
    /// The bag is filled immediately, so a source that can never supply items is reported here.
    pub fn new(source: RefillSource<T>, fill_count: usize) -> Result<Self> {
        Self::with_rng(source, fill_count, rngs::from_os())
    }

    /// Construct a new bag whose generator is seeded with `seed`.
    ///
    /// Two bags built from the same seed and the same source hand out the same sequence of items.
    pub fn new_from_seed(source: RefillSource<T>, fill_count: usize, seed: u64) -> Result<Self> {
        Self::with_rng(source, fill_count, rngs::from_seed(seed))
    }

    /// Construct a new bag using the fill count and seed from `config`.
    pub fn from_config(source: RefillSource<T>, config: &Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => rngs::from_seed(seed),
            None => rngs::from_os(),
        };
        Self::with_rng(source, config.fill_count, rng)
    }
}

impl<T: Clone, R: RngCore> RandomBag<T, R> {
    /// Construct a new bag that shuffles with the given generator.
    pub fn with_rng(source: RefillSource<T>, fill_count: usize, rng: R) -> Result<Self> {
        if fill_count == 0 {
            return Err(Error::configuration("fill count must be at least one"));
        }
        if source.is_empty_items() {
            return Err(Error::configuration("refill items need to contain at least one item"));
        }

        let mut bag = Self {
            source,
            fill_count,
            bag: Vec::new(),
            working: Vec::new(),
            rng,
        };
        bag.reset()?;
        Ok(bag)
    }

    /// How many times the refill source is drained into the bag per filling.
    pub fn fill_count(&self) -> usize {
        self.fill_count
    }

    /// The number of items left before the bag refills itself.
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Replace the refill source with a fixed list of items.
    ///
    /// The current filling is left alone; the new items are used from the next refill on.
    pub fn set_refill_items(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        let items = items.into_iter().collect::<Vec<_>>();
        if items.is_empty() {
            return Err(Error::configuration("refill items need to contain at least one item"));
        }
        debug!(items = items.len(), "random bag now refills from fixed items");
        self.source = RefillSource::Items(items);
        Ok(())
    }

    /// Replace the refill source with a generator that is called `fill_count` times per refill.
    ///
    /// The current filling is left alone; the generator is used from the next refill on.
    pub fn set_refill_generator<F>(&mut self, generator: F)
    where
        F: FnMut(&mut Vec<T>) + Send + 'static,
    {
        debug!("random bag now refills from a generator");
        self.source = RefillSource::generator(generator);
    }

    /// Replace the refill source.
    pub fn set_refill_source(&mut self, source: RefillSource<T>) -> Result<()> {
        match source {
            RefillSource::Items(items) => self.set_refill_items(items),
            RefillSource::Generator(generator) => {
                debug!("random bag now refills from a generator");
                self.source = RefillSource::Generator(generator);
                Ok(())
            }
        }
    }

    /// Throw away what's left in the bag and fill it again.
    ///
    /// On error the bag is left empty.
    pub fn reset(&mut self) -> Result<()> {
        self.bag.clear();
        self.working.clear();

        for _ in 0..self.fill_count {
            match &mut self.source {
                RefillSource::Items(items) => {
                    if items.is_empty() {
                        return Err(Error::configuration("refill items need to contain at least one item"));
                    }
                    self.working.extend_from_slice(items);
                }
                RefillSource::Generator(generate) => {
                    let before = self.working.len();
                    generate(&mut self.working);
                    if self.working.len() <= before {
                        self.working.clear();
                        return Err(Error::configuration(
                            "refill generator didn't add any items to the bag",
                        ));
                    }
                }
            }
        }

        shuffle(&mut self.working, &mut self.rng);

        // Items are popped off the back, so store the shuffled order reversed to dispense it
        // front to back.
        self.working.reverse();
        std::mem::swap(&mut self.bag, &mut self.working);

        debug!(fill_count = self.fill_count, items = self.bag.len(), "refilled random bag");
        Ok(())
    }

    /// Take one item out of the bag, refilling it first if it is empty.
    pub fn pop_one(&mut self) -> Result<T> {
        if self.bag.is_empty() {
            self.reset()?;
        }
        let item = self.bag.pop().ok_or(Error::EmptyContainer)?;
        trace!(remaining = self.bag.len(), "popped item from random bag");
        Ok(item)
    }

    /// Take `count` items out of the bag, refilling it as often as needed along the way.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<T>> {
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(self.pop_one()?);
        }
        Ok(items)
    }

    /// An iterator that keeps drawing from the bag forever, refilling it whenever it runs dry.
    ///
    /// If a refill fails, the error is yielded once and the iterator ends.
    pub fn endless(&mut self) -> Endless<'_, T, R> {
        Endless { bag: self, failed: false }
    }

    /// An iterator over the items left in the current filling, in the order they would be drawn.
    ///
    /// It never refills the bag. Items that are not consumed stay in the bag.
    pub fn drain_remaining(&mut self) -> Remaining<'_, T> {
        Remaining { bag: &mut self.bag }
    }
}

/// An endless iterator over draws from a [`RandomBag`]. See [`RandomBag::endless`].
#[derive(Debug)]
pub struct Endless<'a, T, R> {
    bag: &'a mut RandomBag<T, R>,
    failed: bool,
}

impl<'a, T: Clone, R: RngCore> Iterator for Endless<'a, T, R> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.bag.pop_one();
        self.failed = item.is_err();
        Some(item)
    }
}

/// An iterator over the rest of the current filling. See [`RandomBag::drain_remaining`].
#[derive(Debug)]
pub struct Remaining<'a, T> {
    bag: &'a mut Vec<T>,
}

impl<'a, T> Iterator for Remaining<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.bag.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bag.len(), Some(self.bag.len()))
    }
}

impl<'a, T> ExactSizeIterator for Remaining<'a, T> {}

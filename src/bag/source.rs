use std::fmt::{self, Debug};

/// A callback that pushes at least one item into the buffer it is given.
pub type Generator<T> = Box<dyn FnMut(&mut Vec<T>) + Send>;

/// Where a [`RandomBag`](super::RandomBag) gets its items from when it is refilled.
///
/// Each filling drains the source `fill_count` times: a fixed list is copied in whole, a generator
/// is called once per drain.
pub enum RefillSource<T> {
    /// A fixed list of items, copied into the bag on every drain.
    Items(Vec<T>),
    /// A callback producing the items for one drain.
    Generator(Generator<T>),
}

impl<T> RefillSource<T> {
    /// A source that copies `items` into the bag on every drain.
    pub fn items(items: impl IntoIterator<Item = T>) -> Self {
        RefillSource::Items(items.into_iter().collect())
    }

    /// A source that calls `generator` on every drain.
    pub fn generator<F>(generator: F) -> Self
    where
        F: FnMut(&mut Vec<T>) + Send + 'static,
    {
        RefillSource::Generator(Box::new(generator))
    }

    /// Whether this is a fixed list with nothing in it.
    pub(crate) fn is_empty_items(&self) -> bool {
        matches!(self, RefillSource::Items(items) if items.is_empty())
    }
}

impl<T: Debug> Debug for RefillSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefillSource::Items(items) => f.debug_tuple("Items").field(items).finish(),
            RefillSource::Generator(_) => f.debug_tuple("Generator").field(&"..").finish(),
        }
    }
}

impl<T> From<Vec<T>> for RefillSource<T> {
    fn from(items: Vec<T>) -> Self {
        RefillSource::Items(items)
    }
}

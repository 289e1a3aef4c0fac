//! Extra iterator adapters.

use std::fmt::{Display, Write};

/// Extension methods available on every [`Iterator`].
pub trait IteratorExt: Iterator + Sized {
    /// Find the element whose generated value is lowest, considering only elements whose value
    /// passes `accept`.
    ///
    /// `generate` is called exactly once per element. Among equal values the earliest element
    /// wins. Returns `None` if no element is accepted. To find the highest value instead, generate
    /// a reversed value (e.g. with [`std::cmp::Reverse`]).
    ///
    /// ```
    /// use grabbag::iter::IteratorExt;
    ///
    /// let positions = [-4.0f32, 9.0, 1.5, -0.5];
    /// let nearest_beyond_one = positions
    ///     .iter()
    ///     .first_by_generated_value(|x| x.abs(), |d: &f32| *d >= 1.0);
    /// assert_eq!(nearest_beyond_one, Some(&1.5));
    /// ```
    fn first_by_generated_value<V, F, P>(self, mut generate: F, mut accept: P) -> Option<Self::Item>
    where
        V: PartialOrd,
        F: FnMut(&Self::Item) -> V,
        P: FnMut(&V) -> bool,
    {
        let mut best: Option<(Self::Item, V)> = None;
        for element in self {
            let value = generate(&element);
            if !accept(&value) {
                continue;
            }
            let better = match &best {
                Some((_, best_value)) => value < *best_value,
                None => true,
            };
            if better {
                best = Some((element, value));
            }
        }
        best.map(|(element, _)| element)
    }

    /// Join the elements' `Display` output with `separator`, wrapping each element in
    /// `encapsulate` on both sides.
    ///
    /// ```
    /// use grabbag::iter::IteratorExt;
    ///
    /// assert_eq!(vec![1, 2, 3].into_iter().to_one_line_string(", ", "\""), r#""1", "2", "3""#);
    /// assert_eq!(vec!["a", "b"].into_iter().to_one_line_string("|", ""), "a|b");
    /// ```
    fn to_one_line_string(self, separator: &str, encapsulate: &str) -> String
    where
        Self::Item: Display,
    {
        let mut result = String::new();
        for (i, element) in self.enumerate() {
            if i > 0 {
                result.push_str(separator);
            }
            // Writing to a String can't fail
            let _ = write!(result, "{}{}{}", encapsulate, element, encapsulate);
        }
        result
    }
}

impl<I: Iterator> IteratorExt for I {}

//! Prefix-sum weighted selection with an optional destructive "trim".
//!
//! A [`WeightedSelector`] draws its pivot exactly once, when it is built.
//! Every later [`draw`](WeightedSelector::draw) walks the weights left to
//! right against that same pivot, so a non-trimming selector returns the
//! same item on every call, and a trimming one replays the pivot against a
//! shrinking weight list. Build a fresh selector when you want an
//! independent sample.

use log::{debug, trace};
use rand::Rng;

use crate::error::SelectError;
use crate::uniform::unit;

/// Parallel items/weights plus the pivot fixed at construction.
#[derive(Debug, Clone)]
pub struct WeightedSelector<T> {
    items: Vec<T>,
    weights: Vec<f64>,
    selected: f64,
    trim: bool,
}

impl<T> WeightedSelector<T> {
    /// Build using the thread-local generator. See [`build_with`](Self::build_with).
    pub fn build<I, W>(items: I, weights: W, trim: bool) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = T>,
        W: IntoIterator<Item = f64>,
    {
        Self::build_with(items, weights, trim, &mut rand::rng())
    }

    /// Build from parallel `items` and `weights`, drawing the pivot from `rng`.
    ///
    /// Weights `<= 0` (including `-inf`) keep their slot but can never be
    /// chosen.
    ///
    /// # Errors
    /// * [`SelectError::LengthMismatch`] if the two sequences differ in length.
    /// * [`SelectError::InvalidWeight`] if a weight is `NaN` or `+inf`.
    /// * [`SelectError::SumOverflow`] if the positive weights are finite but
    ///   their total is not.
    /// * [`SelectError::NoValidEntries`] if no weight is positive (this
    ///   includes empty input).
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn build_with<I, W, R>(
        items: I,
        weights: W,
        trim: bool,
        rng: &mut R,
    ) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = T>,
        W: IntoIterator<Item = f64>,
        R: Rng + ?Sized,
    {
        let items: Vec<T> = items.into_iter().collect();
        let weights: Vec<f64> = weights.into_iter().collect();
        if items.len() != weights.len() {
            return Err(SelectError::LengthMismatch {
                items: items.len(),
                weights: weights.len(),
            });
        }

        let mut sum = 0.0f64;
        for (index, &w) in weights.iter().enumerate() {
            if w.is_nan() || w == f64::INFINITY {
                return Err(SelectError::InvalidWeight { index, value: w });
            }
            if w > 0.0 {
                sum += w;
            }
        }
        if !sum.is_finite() {
            return Err(SelectError::SumOverflow);
        }
        if sum == 0.0 {
            return Err(SelectError::NoValidEntries);
        }

        let selected = unit(rng) * sum;
        debug!(
            "weighted selector: {} entries, sum={sum}, pivot={selected}, trim={trim}",
            items.len()
        );
        Ok(Self {
            items,
            weights,
            selected,
            trim,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_pivot(items: Vec<T>, weights: Vec<f64>, selected: f64, trim: bool) -> Self {
        assert_eq!(items.len(), weights.len());
        Self {
            items,
            weights,
            selected,
            trim,
        }
    }

    /// Index the next draw lands on.
    ///
    /// First positive-weight index whose running total reaches the pivot; if
    /// accumulated rounding (or a trimmed-down list) keeps the total below
    /// the pivot, the last positive-weight index seen.
    fn pick_index(&self) -> Result<usize, SelectError> {
        let mut running = 0.0f64;
        let mut last_good = None;
        for (i, &w) in self.weights.iter().enumerate() {
            // Non-positive weights still move the running total.
            running += w;
            if w > 0.0 {
                if self.selected <= running {
                    trace!("pivot {} reached at index {i}", self.selected);
                    return Ok(i);
                }
                last_good = Some(i);
            }
        }
        match last_good {
            Some(i) => {
                debug!(
                    "pivot {} above running total {running}, falling back to index {i}",
                    self.selected
                );
                Ok(i)
            }
            None => Err(SelectError::EmptySelector),
        }
    }

    /// Borrow the item the next draw would return, without trimming.
    ///
    /// # Errors
    /// [`SelectError::EmptySelector`] once trimming removed every
    /// positive-weight entry.
    pub fn peek(&self) -> Result<&T, SelectError> {
        let i = self.pick_index()?;
        Ok(&self.items[i])
    }

    /// Draw one item.
    ///
    /// With trim enabled the chosen item and its weight are removed and the
    /// item is returned as-is; otherwise a clone is returned and the
    /// selector is left untouched.
    ///
    /// # Errors
    /// [`SelectError::EmptySelector`] once trimming removed every
    /// positive-weight entry.
    pub fn draw(&mut self) -> Result<T, SelectError>
    where
        T: Clone,
    {
        let i = self.pick_index()?;
        if self.trim {
            self.weights.remove(i);
            Ok(self.items.remove(i))
        } else {
            Ok(self.items[i].clone())
        }
    }

    /// The pivot in `[0, sum)` drawn at construction.
    pub fn pivot(&self) -> f64 {
        self.selected
    }

    pub fn trims(&self) -> bool {
        self.trim
    }

    /// Entries still held, including non-positive placeholders.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Hand back whatever items and weights survived.
    pub fn into_parts(self) -> (Vec<T>, Vec<f64>) {
        (self.items, self.weights)
    }
}

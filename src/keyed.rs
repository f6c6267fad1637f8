use log::debug;
use rand::Rng;

use crate::error::SelectError;
use crate::weighted::WeightedSelector;

/// Weighted pick over the keys of a borrowed key/value collection.
///
/// Weights come from a caller function run once per entry at build time.
/// Entries weighted `<= 0` are dropped outright, so unlike a raw
/// [`WeightedSelector`] there are no placeholder slots. The collection
/// itself is only borrowed; trimming removes keys from the selector, never
/// from the collection.
#[derive(Debug, Clone)]
pub struct KeyedSelector<'a, K, V> {
    inner: WeightedSelector<(&'a K, &'a V)>,
}

impl<'a, K, V> KeyedSelector<'a, K, V> {
    pub fn build<I, F>(entries: I, weight_fn: F, trim: bool) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        F: FnMut(&K, &V) -> f64,
    {
        Self::build_with(entries, weight_fn, trim, &mut rand::rng())
    }

    /// Build from `(key, value)` pairs, e.g. `map.iter()` for a `HashMap` or
    /// `BTreeMap`. Iteration order does not change the odds.
    ///
    /// # Errors
    /// * [`SelectError::NoValidEntries`] if no entry gets a positive weight.
    /// * [`SelectError::InvalidWeight`] if `weight_fn` returns `+inf`.
    /// * [`SelectError::SumOverflow`] if the kept weights overflow in total.
    pub fn build_with<I, F, R>(
        entries: I,
        mut weight_fn: F,
        trim: bool,
        rng: &mut R,
    ) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        F: FnMut(&K, &V) -> f64,
        R: Rng + ?Sized,
    {
        let mut pairs = Vec::new();
        let mut weights = Vec::new();
        let mut dropped = 0usize;
        for (k, v) in entries {
            let w = weight_fn(k, v);
            if w > 0.0 {
                pairs.push((k, v));
                weights.push(w);
            } else {
                dropped += 1;
            }
        }
        debug!(
            "keyed selector: {} weighted keys, {dropped} dropped",
            pairs.len()
        );
        let inner = WeightedSelector::build_with(pairs, weights, trim, rng)?;
        Ok(Self { inner })
    }

    /// Draw a key.
    pub fn draw(&mut self) -> Result<&'a K, SelectError> {
        self.draw_entry().map(|(k, _)| k)
    }

    /// Draw a key together with its value.
    pub fn draw_entry(&mut self) -> Result<(&'a K, &'a V), SelectError> {
        self.inner.draw()
    }

    pub fn peek(&self) -> Result<&'a K, SelectError> {
        self.inner.peek().map(|&(k, _)| k)
    }

    /// Keys still eligible, in selector order.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.inner.items().iter().map(|&(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

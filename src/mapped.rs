use rand::Rng;

use crate::error::SelectError;
use crate::keyed::KeyedSelector;

/// A [`KeyedSelector`] whose draws are passed through `map_fn`.
///
/// The mapping sees the chosen key and its value straight from the
/// borrowed collection, so it may return borrows into it.
pub struct MappedSelector<'a, K, V, F> {
    keyed: KeyedSelector<'a, K, V>,
    map_fn: F,
}

impl<'a, K, V, F, M> MappedSelector<'a, K, V, F>
where
    F: FnMut(&'a K, &'a V) -> M,
{
    pub fn build<I, W>(entries: I, weight_fn: W, map_fn: F, trim: bool) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        W: FnMut(&K, &V) -> f64,
    {
        Self::build_with(entries, weight_fn, map_fn, trim, &mut rand::rng())
    }

    /// # Errors
    /// Same as [`KeyedSelector::build_with`].
    pub fn build_with<I, W, R>(
        entries: I,
        weight_fn: W,
        map_fn: F,
        trim: bool,
        rng: &mut R,
    ) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        W: FnMut(&K, &V) -> f64,
        R: Rng + ?Sized,
    {
        let keyed = KeyedSelector::build_with(entries, weight_fn, trim, rng)?;
        Ok(Self { keyed, map_fn })
    }

    pub fn draw(&mut self) -> Result<M, SelectError> {
        let (k, v) = self.keyed.draw_entry()?;
        Ok((self.map_fn)(k, v))
    }

    pub fn len(&self) -> usize {
        self.keyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyed.is_empty()
    }

    /// The selector underneath, for peeking at keys without mapping.
    pub fn keyed(&self) -> &KeyedSelector<'a, K, V> {
        &self.keyed
    }
}

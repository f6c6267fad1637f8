//! # luckdraw
//!
//! Small randomness helpers built around one weighted-selection walk.
//!
//! * [`WeightedSelector`]: parallel items and weights, prefix-sum walk.
//! * [`KeyedSelector`]: the same over a borrowed key/value collection, with
//!   weights derived by a caller function.
//! * [`MappedSelector`]: a keyed selector whose draws are mapped to any type.
//! * [`Quantity`], [`between_floats`], [`chance`] and friends for the
//!   everyday rolls.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use luckdraw::WeightedSelector;
//!
//! # fn main() -> Result<(), luckdraw::SelectError> {
//! let mut sel = WeightedSelector::build(
//!     ["common", "uncommon", "rare"],
//!     [60.0, 30.0, 10.0],
//!     false,
//! )?;
//! let tier = sel.draw()?;
//! println!("you got: {tier}");
//! # Ok(()) }
//! ```
//!
//! ## Keyed and mapped
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use luckdraw::MappedSelector;
//!
//! # fn main() -> Result<(), luckdraw::SelectError> {
//! let shop = HashMap::from([("potion", 5.0), ("elixir", 1.0)]);
//! let mut sel = MappedSelector::build(&shop, |_, w| *w, |k, _| k.to_uppercase(), false)?;
//! println!("{}", sel.draw()?);
//! # Ok(()) }
//! ```
//!
//! ## Gotchas
//! * The pivot is drawn **once**, when a selector is built. A non-trimming
//!   selector returns the same item on every draw; build a new one per draw
//!   for independent samples.
//! * With trim enabled every draw removes the chosen entry, but the pivot is
//!   replayed against what is left. Draws cover each positive-weight entry
//!   exactly once, not in the order naive sampling without replacement would.
//! * Weights `<= 0` are never chosen. `NaN` and infinite weights are rejected.
//!
//! ## Randomness
//! Every operation has a `*_with` form that takes any `rand::Rng`; the plain
//! form uses `rand::rng()`. There is no seeding API and nothing here is
//! suitable for cryptographic use.

mod chance;
mod error;
mod keyed;
mod mapped;
mod range;
mod uniform;
mod weighted;

pub use chance::{chance, chance_percent, chance_percent_with, chance_with, pick, pick_with};
pub use error::SelectError;
pub use keyed::KeyedSelector;
pub use mapped::MappedSelector;
pub use range::{
    Quantity, between_floats, between_floats_with, between_ints, between_ints_with, resolve,
};
pub use uniform::{unit, unit_f64};
pub use weighted::WeightedSelector;

/// Derive macro imported from `luckdraw_macros`.
pub use luckdraw_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its `#[weight(..)]` is exposed via
/// [`WeightedEnum::ENTRIES`], from which a [`WeightedSelector`] is built.
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs in declaration order.
    const ENTRIES: &'static [(Self, f64)];

    /// # Errors
    /// See [`WeightedSelector::build_with`].
    fn selector_with<R: rand::Rng + ?Sized>(
        trim: bool,
        rng: &mut R,
    ) -> Result<WeightedSelector<Self>, SelectError>
    where
        Self: Copy,
    {
        WeightedSelector::build_with(
            Self::ENTRIES.iter().map(|&(v, _)| v),
            Self::ENTRIES.iter().map(|&(_, w)| w),
            trim,
            rng,
        )
    }

    fn selector(trim: bool) -> Result<WeightedSelector<Self>, SelectError>
    where
        Self: Copy,
    {
        Self::selector_with(trim, &mut rand::rng())
    }
}

/// Build a [`WeightedSelector`] with the thread-local generator.
pub fn build_weighted<T>(
    items: impl IntoIterator<Item = T>,
    weights: impl IntoIterator<Item = f64>,
    trim: bool,
) -> Result<WeightedSelector<T>, SelectError> {
    WeightedSelector::build(items, weights, trim)
}

/// Build a [`KeyedSelector`] with the thread-local generator.
pub fn build_keyed<'a, K, V, I, F>(
    entries: I,
    weight_fn: F,
    trim: bool,
) -> Result<KeyedSelector<'a, K, V>, SelectError>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    F: FnMut(&K, &V) -> f64,
{
    KeyedSelector::build(entries, weight_fn, trim)
}

/// Build a [`MappedSelector`] with the thread-local generator.
pub fn build_mapped<'a, K, V, I, W, F, M>(
    entries: I,
    weight_fn: W,
    map_fn: F,
    trim: bool,
) -> Result<MappedSelector<'a, K, V, F>, SelectError>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    W: FnMut(&K, &V) -> f64,
    F: FnMut(&'a K, &'a V) -> M,
{
    MappedSelector::build(entries, weight_fn, map_fn, trim)
}

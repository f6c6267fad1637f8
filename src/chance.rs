use rand::Rng;

use crate::uniform::unit;

pub fn chance_with<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    unit(rng) < p
}

/// `true` with probability `p` (clamped to `[0, 1]` by the comparison).
pub fn chance(p: f64) -> bool {
    chance_with(p, &mut rand::rng())
}

pub fn chance_percent_with<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    unit(rng) * 100.0 < p
}

/// Like [`chance`] with `p` given in percent.
pub fn chance_percent(p: f64) -> bool {
    chance_percent_with(p, &mut rand::rng())
}

pub fn pick_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}

/// Uniform pick from a slice; `None` when it is empty.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    pick_with(items, &mut rand::rng())
}

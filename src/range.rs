use std::ops::Range;

use rand::Rng;

use crate::uniform::unit;

/// Either a fixed number or a `{min, max}` span to roll inside.
///
/// Bounds are not validated: `min > max` rolls in `(max, min]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Quantity {
    Fixed(f64),
    Between { min: f64, max: f64 },
}

impl Quantity {
    pub fn resolve_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Quantity::Fixed(v) => v,
            Quantity::Between { min, max } => between_floats_with(min, max, rng),
        }
    }

    pub fn resolve(&self) -> f64 {
        self.resolve_with(&mut rand::rng())
    }
}

impl From<f64> for Quantity {
    fn from(v: f64) -> Self {
        Quantity::Fixed(v)
    }
}

impl From<(f64, f64)> for Quantity {
    fn from((min, max): (f64, f64)) -> Self {
        Quantity::Between { min, max }
    }
}

impl From<Range<f64>> for Quantity {
    fn from(r: Range<f64>) -> Self {
        Quantity::Between {
            min: r.start,
            max: r.end,
        }
    }
}

/// Resolve anything convertible to a [`Quantity`] with the thread-local generator.
pub fn resolve(value: impl Into<Quantity>) -> f64 {
    value.into().resolve()
}

pub fn between_floats_with<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    min + unit(rng) * (max - min)
}

/// `min + u * (max - min)` for a fresh uniform `u`.
pub fn between_floats(min: f64, max: f64) -> f64 {
    between_floats_with(min, max, &mut rand::rng())
}

pub fn between_ints_with<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Uniform integer in `[min, max]`, both ends inclusive. Reversed bounds are swapped.
pub fn between_ints(min: i64, max: i64) -> i64 {
    between_ints_with(min, max, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn fixed_and_degenerate_spans_are_exact() {
        assert_eq!(resolve(7.0), 7.0);
        assert_eq!(resolve(Quantity::Between { min: 5.0, max: 5.0 }), 5.0);
        assert_eq!(resolve((5.0, 5.0)), 5.0);
        assert_eq!(between_floats(-2.0, -2.0), -2.0);
    }

    #[test]
    fn spans_stay_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(17);
        let q = Quantity::from(2.0..4.0);
        for _ in 0..5000 {
            let v = q.resolve_with(&mut rng);
            assert!((2.0..4.0).contains(&v), "v={v}");

            let v = between_floats_with(10.0, 0.0, &mut rng);
            assert!(v > 0.0 && v <= 10.0, "v={v}");
        }
    }

    #[test]
    fn ints_are_inclusive_and_swap_reversed_bounds() {
        let mut rng = Pcg32::seed_from_u64(23);
        let mut seen = [false; 4];
        for _ in 0..2000 {
            let v = between_ints_with(4, 1, &mut rng);
            assert!((1..=4).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(between_ints(3, 3), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_number_or_descriptor() {
        let fixed: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(fixed, Quantity::Fixed(7.0));
        let span: Quantity = serde_json::from_str(r#"{"min": 1, "max": 2.5}"#).unwrap();
        assert_eq!(span, Quantity::Between { min: 1.0, max: 2.5 });
    }
}

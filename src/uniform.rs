//! The uniform `[0, 1)` source every other module draws from.

use rand::Rng;

/// One uniform draw in `[0, 1)` from `rng`.
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// One uniform draw in `[0, 1)` from the thread-local generator.
#[inline]
pub fn unit_f64() -> f64 {
    unit(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn stays_in_half_open_unit_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = unit(&mut rng);
            assert!((0.0..1.0).contains(&u), "u={u}");
        }
        for _ in 0..1000 {
            assert!((0.0..1.0).contains(&unit_f64()));
        }
    }

    #[test]
    fn mean_is_near_one_half() {
        let mut rng = Pcg32::seed_from_u64(11);
        let n = 20_000;
        let mean = (0..n).map(|_| unit(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean={mean}");
    }
}

// src/strategy/simulate.rs
use crate::strategy::schema::RankingDataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Travel time ranges, in minutes, used to simulate a commute
pub const MODE_RANGES: [(&str, RangeInclusive<u32>); 4] = [
    ("Bicycle", 60..=120),
    ("Car", 10..=40),
    ("Taxi", 20..=60),
    ("Bus", 60..=180),
];

/// Draw one travel time per transport mode
pub fn sample_dataset<R: Rng + ?Sized>(rng: &mut R) -> RankingDataset {
    MODE_RANGES
        .iter()
        .map(|(label, range)| (*label, rng.gen_range(range.clone())))
        .collect()
}

/// Seeded when a seed is given, otherwise from OS entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range_and_order() {
        let mut rng = make_rng(Some(7));
        for _ in 0..200 {
            let dataset = sample_dataset(&mut rng);
            assert_eq!(dataset.len(), MODE_RANGES.len());
            for ((label, minutes), (expected, range)) in dataset.iter().zip(MODE_RANGES.iter()) {
                assert_eq!(label, *expected);
                assert!(range.contains(&minutes), "{} out of range: {}", label, minutes);
            }
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = sample_dataset(&mut make_rng(Some(42)));
        let b = sample_dataset(&mut make_rng(Some(42)));
        assert_eq!(a, b);
    }
}

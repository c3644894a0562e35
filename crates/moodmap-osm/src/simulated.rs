//! Simulated place metadata.
//!
//! OpenStreetMap has no review counts, price levels, or a cheap way to answer
//! "open now?". The display layer still wants those fields, so they are
//! filled with random filler from a [`MetadataSimulator`]. None of these
//! values come from the provider.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedMetadata {
    /// In `[10, 509]`.
    pub user_ratings_total: u32,
    /// `true` roughly 80% of the time.
    pub open_now: bool,
    /// In `[1, 3]`.
    pub price_level: u8,
}

/// Source of simulated metadata for each normalized place.
pub trait MetadataSimulator: Send + Sync {
    fn simulate(&self) -> SimulatedMetadata;
}

/// Draws fresh values from the thread-local RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMetadata;

impl MetadataSimulator for RandomMetadata {
    fn simulate(&self) -> SimulatedMetadata {
        let mut rng = rand::rng();
        SimulatedMetadata {
            user_ratings_total: rng.random_range(10..510),
            open_now: rng.random_bool(0.8),
            price_level: rng.random_range(1..=3),
        }
    }
}

/// Returns the same metadata every time. Useful for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetadata(pub SimulatedMetadata);

impl MetadataSimulator for FixedMetadata {
    fn simulate(&self) -> SimulatedMetadata {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_metadata_stays_in_range() {
        let sim = RandomMetadata;
        for _ in 0..1_000 {
            let meta = sim.simulate();
            assert!((10..510).contains(&meta.user_ratings_total));
            assert!((1..=3).contains(&meta.price_level));
        }
    }

    #[test]
    fn random_metadata_is_mostly_open() {
        let sim = RandomMetadata;
        let open = (0..2_000).filter(|_| sim.simulate().open_now).count();
        // 80% expected; bounds are loose enough to never flake.
        assert!((1_300..=1_900).contains(&open), "open count was {open}");
    }

    #[test]
    fn fixed_metadata_is_constant() {
        let meta = SimulatedMetadata {
            user_ratings_total: 42,
            open_now: false,
            price_level: 2,
        };
        let sim = FixedMetadata(meta);
        assert_eq!(sim.simulate(), meta);
        assert_eq!(sim.simulate(), meta);
    }
}

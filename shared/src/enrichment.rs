//! Mock enrichment: synthesized download counts and ratings.
//!
//! The CMS carries no usage data, so cards show plausible placeholder
//! figures. They are generated here, behind [`Enrichment`], and nowhere else.

use crate::models::AppStats;

/// Supplies the placeholder stats attached to each app.
pub trait Enrichment {
    /// Stats for the next app in the list.
    fn stats(&mut self) -> AppStats;
}

/// Returns the same stats for every app.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedEnrichment(pub AppStats);

impl Default for FixedEnrichment {
    fn default() -> Self {
        Self(AppStats {
            downloads: "1.0K+".to_string(),
            rating: 4.7,
        })
    }
}

impl Enrichment for FixedEnrichment {
    fn stats(&mut self) -> AppStats {
        self.0.clone()
    }
}

/// Random stats in the ranges the site has always shown: `1.0K+` to `5.8K+`
/// downloads and a 4.5 to 4.9 rating.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct MockEnrichment<R> {
    rng: R,
}

#[cfg(not(target_arch = "wasm32"))]
impl<R: rand::Rng> MockEnrichment<R> {
    /// Draws from the given generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MockEnrichment<rand::rngs::ThreadRng> {
    /// Draws from the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<R: rand::Rng> Enrichment for MockEnrichment<R> {
    fn stats(&mut self) -> AppStats {
        let thousands: u32 = self.rng.gen_range(1..=5);
        let tenths: u32 = self.rng.gen_range(0..=8);
        let raw_rating: f32 = 4.5 + self.rng.gen_range(0.0..0.4);
        AppStats {
            downloads: format!("{thousands}.{tenths}K+"),
            rating: (raw_rating * 10.0).round() / 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn mock_stats_stay_in_range() {
        let mut enrichment = MockEnrichment::new(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            let stats = enrichment.stats();
            assert!((4.5..=4.9).contains(&stats.rating), "rating {}", stats.rating);

            let figure = stats
                .downloads
                .strip_suffix("K+")
                .expect("downloads end with K+");
            let (whole, tenth) = figure.split_once('.').expect("one decimal");
            let whole: u32 = whole.parse().expect("whole part");
            let tenth: u32 = tenth.parse().expect("tenth part");
            assert!((1..=5).contains(&whole));
            assert!(tenth <= 8);
        }
    }

    #[test]
    fn seeded_mock_is_reproducible() {
        let mut a = MockEnrichment::new(StdRng::seed_from_u64(42));
        let mut b = MockEnrichment::new(StdRng::seed_from_u64(42));
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn fixed_enrichment_repeats() {
        let mut fixed = FixedEnrichment::default();
        assert_eq!(fixed.stats(), fixed.stats());
        assert_eq!(fixed.stats().downloads, "1.0K+");
    }
}

//! Position sampling over a bounded 2D region.
//!
//! The domain is the axis-aligned rectangle `[0, extent.x) x [0, extent.y)`
//! with the origin at the lower-left corner. Strategies propose positions for
//! downstream placement; they never transform into world space themselves.
use mint::Vector2;
use rand::RngCore;

pub mod poisson_disc;

pub use poisson_disc::{PoissonDiscSampler, PoissonDiscSampling};

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}

/// Generate a random float in the range [0, 1].
///
/// Values near `u32::MAX` can round up to exactly 1.0 in f32; callers that
/// need a strict upper bound must clamp.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// RngCore stub that repeats a single value forever.
    pub(crate) struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_zero_source_yields_zero() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_in_unit_interval() {
        for value in [0, 1, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..=1.0).contains(&result),
                "rand01({value}) = {result} out of range"
            );
        }
    }

    #[test]
    fn rand01_midpoint_is_half() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 0.001);
    }
}

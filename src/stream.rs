//! Deterministic uniform draws derived from a request.
//!
//! Draw `n` for a request is `sha256("locale|seed|batch|index|n")` projected
//! onto [0, 1). Nothing is carried between draws, so any draw can be
//! recomputed on its own, in any order, on any worker.

use crate::record::GenerationRequest;
use sha2::{Digest, Sha256};

/// Lower/upper clamp applied before a draw is fed to a logarithm.
pub const EPSILON: f64 = 1e-10;

/// Named draw slots. Each semantic use of randomness gets its own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Draw {
    TitleThreshold = 0,
    HeightU1 = 1,
    HeightU2 = 2,
    WeightU1 = 3,
    WeightU2 = 4,
    EmailRandom = 5,
    PhoneSubscriber = 6,
    Coordinates = 7,
    AddressNumber = 8,
}

impl Draw {
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Lazy, restartable stream of draws for one request.
#[derive(Debug, Clone)]
pub struct DrawStream {
    tag: String,
}

impl DrawStream {
    pub fn new(request: &GenerationRequest) -> Self {
        Self {
            tag: request.hash_tag(),
        }
    }

    /// Uniform value in [0, 1) for the given draw index.
    pub fn draw(&self, draw_index: u32) -> f64 {
        let mut hasher = Sha256::new();
        hasher.update(self.tag.as_bytes());
        hasher.update(b"|");
        hasher.update(draw_index.to_string().as_bytes());
        unit_interval(&hasher.finalize())
    }

    pub fn get(&self, slot: Draw) -> f64 {
        self.draw(slot.index())
    }

    /// Draw clamped into `[EPSILON, 1 - EPSILON]`.
    pub fn clamped(&self, slot: Draw) -> f64 {
        clamp_open(self.get(slot))
    }
}

/// Project the first 8 bytes of a digest onto [0, 1) using 53 bits,
/// the full mantissa width of an `f64`.
pub fn unit_interval(digest: &[u8]) -> f64 {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let bits = u64::from_be_bytes(prefix) >> 11;
    bits as f64 / (1u64 << 53) as f64
}

pub fn clamp_open(u: f64) -> f64 {
    u.clamp(EPSILON, 1.0 - EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_extremes() {
        assert_eq!(unit_interval(&[0u8; 32]), 0.0);
        let top = unit_interval(&[0xFFu8; 32]);
        assert!(top < 1.0);
        assert!(top > 0.999_999);
    }

    #[test]
    fn test_clamp_open() {
        assert_eq!(clamp_open(0.0), EPSILON);
        assert_eq!(clamp_open(1.0), 1.0 - EPSILON);
        assert_eq!(clamp_open(0.25), 0.25);
    }

    #[test]
    fn test_draw_slots_are_distinct() {
        let stream = DrawStream::new(&GenerationRequest::new("en_US", 1, 1, 0));
        assert_ne!(stream.get(Draw::HeightU1), stream.get(Draw::HeightU2));
        assert_ne!(stream.get(Draw::TitleThreshold), stream.get(Draw::Coordinates));
    }
}

//! Unit tests for the per-request draw stream.

use personagen::stream::{clamp_open, unit_interval, Draw, DrawStream, EPSILON};
use personagen::GenerationRequest;
use sha2::{Digest, Sha256};

fn stream(locale: &str, seed: i64, batch: i64, index: i64) -> DrawStream {
    DrawStream::new(&GenerationRequest::new(locale, seed, batch, index))
}

#[test]
fn test_draw_is_sha256_of_tag_and_index() {
    let expected = unit_interval(&Sha256::digest(b"en_US|1|1|0|3"));
    assert_eq!(stream("en_US", 1, 1, 0).draw(3), expected);
}

#[test]
fn test_draws_are_repeatable() {
    let a = stream("de_DE", 42, 3, 17);
    let b = stream("de_DE", 42, 3, 17);
    for n in 0..32 {
        assert_eq!(a.draw(n), b.draw(n));
    }
}

#[test]
fn test_draws_in_unit_interval() {
    let s = stream("en_US", 9, 1, 5);
    for n in 0..1_000 {
        let u = s.draw(n);
        assert!((0.0..1.0).contains(&u), "draw {} = {}", n, u);
    }
}

#[test]
fn test_any_field_changes_draws() {
    let base = stream("en_US", 1, 1, 0).get(Draw::HeightU1);
    assert_ne!(base, stream("de_DE", 1, 1, 0).get(Draw::HeightU1));
    assert_ne!(base, stream("en_US", 2, 1, 0).get(Draw::HeightU1));
    assert_ne!(base, stream("en_US", 1, 2, 0).get(Draw::HeightU1));
    assert_ne!(base, stream("en_US", 1, 1, 1).get(Draw::HeightU1));
}

#[test]
fn test_slots_use_distinct_indices() {
    let slots = [
        Draw::TitleThreshold,
        Draw::HeightU1,
        Draw::HeightU2,
        Draw::WeightU1,
        Draw::WeightU2,
        Draw::EmailRandom,
        Draw::PhoneSubscriber,
        Draw::Coordinates,
        Draw::AddressNumber,
    ];
    let mut indices: Vec<u32> = slots.iter().map(|s| s.index()).collect();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), slots.len());
}

#[test]
fn test_unit_interval_extremes() {
    assert_eq!(unit_interval(&[0u8; 32]), 0.0);
    let max = unit_interval(&[0xffu8; 32]);
    assert!(max < 1.0);
    assert!(max > 0.999_999);
}

#[test]
fn test_clamp_open() {
    assert_eq!(clamp_open(0.0), EPSILON);
    assert_eq!(clamp_open(1.0), 1.0 - EPSILON);
    assert_eq!(clamp_open(0.5), 0.5);
    assert!(stream("en_US", 1, 1, 0).clamped(Draw::HeightU1) >= EPSILON);
}

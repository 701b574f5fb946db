//! Locale-aware fake values backed by the `fake` crate.

use fake::faker::address::raw::{StreetName, StreetSuffix};
use fake::faker::name::raw::LastName;
use fake::locales::{DE_DE, EN};
use fake::Fake;
use rand::Rng;
use std::collections::HashSet;

/// Locales the `fake` crate can supply data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeLocale {
    En,
    De,
}

impl FakeLocale {
    pub fn for_locale(locale: &str) -> Option<Self> {
        match locale {
            "en_US" => Some(FakeLocale::En),
            "de_DE" => Some(FakeLocale::De),
            _ => None,
        }
    }

    pub fn last_name<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            FakeLocale::En => LastName(EN).fake_with_rng(rng),
            FakeLocale::De => LastName(DE_DE).fake_with_rng(rng),
        }
    }

    pub fn street_name<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            FakeLocale::En => StreetName(EN).fake_with_rng(rng),
            FakeLocale::De => StreetName(DE_DE).fake_with_rng(rng),
        }
    }

    /// Street suffixes are only faked for en_US; German ones are compounds
    /// that stay with the base dataset.
    pub fn street_suffix<R: Rng + ?Sized>(self, rng: &mut R) -> Option<String> {
        match self {
            FakeLocale::En => Some(StreetSuffix(EN).fake_with_rng(rng)),
            FakeLocale::De => None,
        }
    }
}

/// Split a street name into standalone words, dropping numbers.
pub fn street_words(street: &str) -> impl Iterator<Item = &str> {
    street
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty() && !w.chars().all(|c| c.is_ascii_digit()))
}

/// Collect up to `count` distinct values in first-seen order.
///
/// Gives up after `count * 20` attempts, so a small source pool yields a
/// shorter list instead of looping forever.
pub fn unique<F>(count: usize, mut next: F) -> Vec<String>
where
    F: FnMut() -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::with_capacity(count);
    let mut attempts = 0;
    while values.len() < count && attempts < count.saturating_mul(20) {
        attempts += 1;
        if let Some(value) = next() {
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
    }
    values
}

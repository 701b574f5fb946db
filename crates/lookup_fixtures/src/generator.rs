//! Builds an enlarged `LookupSet` from a base dataset.
//!
//! Profiles, titles, regions, geo boxes, physical means, eye colours, email
//! domains and patterns are copied unchanged. Names, address words and
//! (en_US) street suffixes are regenerated per locale at the requested scale.

use crate::faker::{street_words, unique, FakeLocale};
use personagen::lookup::{LookupTable, NameRow, SuffixRow, WordRow};
use personagen::{Gender, LookupSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Dataset size presets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// 20 names per gender, 30 words
    Small,
    /// 200 names per gender, 50 words
    Medium,
    /// 1,000 names per gender, 150 words
    Large,
}

impl Scale {
    pub fn names_per_gender(&self) -> usize {
        match self {
            Scale::Small => 20,
            Scale::Medium => 200,
            Scale::Large => 1_000,
        }
    }

    pub fn words_per_locale(&self) -> usize {
        match self {
            Scale::Small => 30,
            Scale::Medium => 50,
            Scale::Large => 150,
        }
    }

    pub fn suffixes_per_locale(&self) -> usize {
        match self {
            Scale::Small => 10,
            Scale::Medium | Scale::Large => 15,
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "s" => Ok(Scale::Small),
            "medium" | "m" => Ok(Scale::Medium),
            "large" | "l" => Ok(Scale::Large),
            _ => Err(format!(
                "Unknown scale: {}. Use small, medium, or large",
                s
            )),
        }
    }
}

/// Seeded dataset generator. Same seed, scale and base give the same output.
pub struct Generator {
    rng: ChaCha8Rng,
    scale: Scale,
}

impl Generator {
    pub fn new(seed: u64, scale: Scale) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            scale,
        }
    }

    pub fn generate(&mut self, base: &LookupSet) -> Result<LookupSet, personagen::LookupError> {
        let mut names = Vec::new();
        let mut words = Vec::new();
        let mut suffixes = Vec::new();

        let locales: Vec<String> = base.locales().map(String::from).collect();
        for locale in &locales {
            match FakeLocale::for_locale(locale) {
                Some(fake) => {
                    for gender in [Gender::Male, Gender::Female] {
                        names.extend(self.names(base, locale, gender, fake));
                    }
                    words.extend(self.words(locale, fake));
                    suffixes.extend(self.suffixes(base, locale, fake));
                }
                None => {
                    names.extend(rows_for(base.names.rows(), locale, |r| &r.locale));
                    words.extend(rows_for(base.words.rows(), locale, |r| &r.locale));
                    suffixes.extend(rows_for(base.suffixes.rows(), locale, |r| &r.locale));
                }
            }
        }

        let mut set = base.clone();
        set.names = LookupTable::new(names);
        set.words = LookupTable::new(words);
        set.suffixes = LookupTable::new(suffixes);
        set.validate()?;
        Ok(set)
    }

    /// Distinct (first, last) pairs: first names come from the base rows of
    /// that locale and gender, last names from the fake data.
    fn names(
        &mut self,
        base: &LookupSet,
        locale: &str,
        gender: Gender,
        fake: FakeLocale,
    ) -> Vec<NameRow> {
        let firsts: Vec<&str> = base
            .names
            .rows()
            .iter()
            .filter(|r| r.locale == locale && r.gender == gender)
            .map(|r| r.first_name.as_str())
            .collect();
        if firsts.is_empty() {
            return Vec::new();
        }

        let rng = &mut self.rng;
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        let count = self.scale.names_per_gender();
        let mut attempts = 0;
        while rows.len() < count && attempts < count * 20 {
            attempts += 1;
            let first = firsts[rng.random_range(0..firsts.len())];
            let last = fake.last_name(rng);
            if seen.insert((first, last.clone())) {
                rows.push(NameRow {
                    locale: locale.to_string(),
                    gender,
                    first_name: first.to_string(),
                    last_name: last,
                });
            }
        }
        rows
    }

    fn words(&mut self, locale: &str, fake: FakeLocale) -> Vec<WordRow> {
        let rng = &mut self.rng;
        let mut pending: Vec<String> = Vec::new();
        unique(self.scale.words_per_locale(), || {
            if pending.is_empty() {
                let street = fake.street_name(rng);
                pending = street_words(&street).map(String::from).collect();
                pending.reverse();
            }
            pending.pop()
        })
        .into_iter()
        .map(|word| WordRow {
            locale: locale.to_string(),
            word,
        })
        .collect()
    }

    fn suffixes(&mut self, base: &LookupSet, locale: &str, fake: FakeLocale) -> Vec<SuffixRow> {
        let rng = &mut self.rng;
        let faked = unique(self.scale.suffixes_per_locale(), || fake.street_suffix(rng));
        if faked.is_empty() {
            return rows_for(base.suffixes.rows(), locale, |r| &r.locale);
        }
        faked
            .into_iter()
            .map(|suffix| SuffixRow {
                locale: locale.to_string(),
                suffix,
            })
            .collect()
    }
}

fn rows_for<R: Clone>(rows: &[R], locale: &str, locale_of: impl Fn(&R) -> &String) -> Vec<R> {
    rows.iter()
        .filter(|r| locale_of(r) == locale)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_deterministic() {
        let base = LookupSet::builtin().unwrap();
        let a = Generator::new(42, Scale::Small).generate(&base).unwrap();
        let b = Generator::new(42, Scale::Small).generate(&base).unwrap();
        assert_eq!(a.names.rows(), b.names.rows());
        assert_eq!(a.words.rows(), b.words.rows());
    }

    #[test]
    fn test_names_keep_gendered_first_names() {
        let base = LookupSet::builtin().unwrap();
        let set = Generator::new(1, Scale::Small).generate(&base).unwrap();
        let base_firsts: HashSet<(&str, Gender)> = base
            .names
            .rows()
            .iter()
            .map(|r| (r.first_name.as_str(), r.gender))
            .collect();
        for row in set.names.rows() {
            assert!(base_firsts.contains(&(row.first_name.as_str(), row.gender)));
        }
    }

    #[test]
    fn test_untouched_tables_copied() {
        let base = LookupSet::builtin().unwrap();
        let set = Generator::new(3, Scale::Small).generate(&base).unwrap();
        assert_eq!(set.regions.rows(), base.regions.rows());
        assert_eq!(set.profiles, base.profiles);
        let de_suffixes = set
            .suffixes
            .rows()
            .iter()
            .filter(|r| r.locale == "de_DE")
            .count();
        assert_eq!(
            de_suffixes,
            base.suffixes
                .rows()
                .iter()
                .filter(|r| r.locale == "de_DE")
                .count()
        );
    }

    #[test]
    fn test_scale_parse() {
        assert_eq!("M".parse::<Scale>().unwrap(), Scale::Medium);
        assert!("huge".parse::<Scale>().is_err());
    }
}

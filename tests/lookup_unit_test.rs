//! Unit tests for lookup dataset loading and validation.

use personagen::lookup::{row_digest, RegionRow, DATASET_VERSION};
use personagen::{Category, LookupError, LookupSet};
use serde_json::{json, Value};
use tempfile::TempDir;

fn minimal_dataset() -> Value {
    json!({
        "version": DATASET_VERSION,
        "profiles": [
            {"locale": "en_US", "intl_prefix": "+1", "weight_stddev": 13, "address_digits": 3}
        ],
        "names": [
            {"locale": "en_US", "gender": "male", "first_name": "John", "last_name": "Smith"},
            {"locale": "en_US", "gender": "female", "first_name": "Mary", "last_name": "Jones"}
        ],
        "titles": [
            {"locale": "en_US", "gender": "male", "title": "Mr."},
            {"locale": "en_US", "gender": "female", "title": "Ms."}
        ],
        "suffixes": [{"locale": "en_US", "suffix": "Street"}],
        "regions": [{"locale": "en_US", "name": "Texas", "area_code": "512", "zip_prefix": "787"}],
        "words": [{"locale": "en_US", "word": "Oak"}],
        "physical_attributes": [
            {"locale": "en_US", "gender": "male", "height": 175, "weight": 88},
            {"locale": "en_US", "gender": "female", "height": 162, "weight": 75}
        ],
        "eye_colors": [{"locale": "en_US", "eye_color": "Brown", "probability": 0.55}],
        "email_domains": [{"locale": "en_US", "domain": "gmail.com", "weight": 35}],
        "email_patterns": [{"pattern": "{first}.{last}@{domain}"}],
        "phone_patterns": [{"pattern": "({area}) {subscriber}", "locale": null}],
        "geo_locations": [
            {"region": "Texas", "lat_min": 30.1, "lat_max": 30.5, "lon_min": -97.95, "lon_max": -97.55}
        ]
    })
}

fn load(value: &Value) -> Result<LookupSet, LookupError> {
    LookupSet::from_json_str(&value.to_string())
}

#[test]
fn test_minimal_dataset_loads() {
    let set = load(&minimal_dataset()).unwrap();
    assert_eq!(set.locales().collect::<Vec<_>>(), vec!["en_US"]);
    assert_eq!(set.row_count(Category::Names), 2);
    assert_eq!(set.eye_colors.rows()[0].weight, Some(0.55));
    assert_eq!(set.profile("en_US").unwrap().height_floor, 160.0);
}

#[test]
fn test_missing_tables_default_to_empty() {
    let set = LookupSet::from_json_str(r#"{"version": 1}"#).unwrap();
    assert!(set.row_counts().iter().all(|(_, n)| *n == 0));
    assert!(set.profile("en_US").is_none());
}

#[test]
fn test_unknown_version_rejected() {
    let mut data = minimal_dataset();
    data["version"] = json!(99);
    assert!(matches!(
        load(&data),
        Err(LookupError::UnsupportedVersion(99, DATASET_VERSION))
    ));
}

#[test]
fn test_duplicate_profile_rejected() {
    let mut data = minimal_dataset();
    let profile = data["profiles"][0].clone();
    data["profiles"].as_array_mut().unwrap().push(profile);
    assert!(matches!(
        load(&data),
        Err(LookupError::InvalidProfile { .. })
    ));
}

#[test]
fn test_bad_pattern_rejected() {
    let mut data = minimal_dataset();
    data["email_patterns"] = json!([{"pattern": "{first}@{area}"}]);
    match load(&data) {
        Err(LookupError::Invalid { category, .. }) => {
            assert_eq!(category, Category::EmailPatterns)
        }
        other => panic!("expected invalid email pattern, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_negative_weight_rejected() {
    let mut data = minimal_dataset();
    data["email_domains"][0]["weight"] = json!(-1.0);
    assert!(matches!(
        load(&data),
        Err(LookupError::Invalid {
            category: Category::EmailDomains,
            ..
        })
    ));
}

#[test]
fn test_implausible_physical_mean_rejected() {
    let mut data = minimal_dataset();
    data["physical_attributes"][0]["height"] = json!(1e12);
    assert!(matches!(
        load(&data),
        Err(LookupError::Invalid {
            category: Category::PhysicalAttributes,
            ..
        })
    ));

    let mut data = minimal_dataset();
    data["physical_attributes"][1]["weight"] = json!(501);
    assert!(load(&data).is_err());
}

#[test]
fn test_implausible_profile_stddev_rejected() {
    let mut data = minimal_dataset();
    data["profiles"][0]["weight_stddev"] = json!(1e12);
    assert!(matches!(
        load(&data),
        Err(LookupError::InvalidProfile { .. })
    ));
}

#[test]
fn test_inverted_geo_rejected() {
    let mut data = minimal_dataset();
    data["geo_locations"][0]["lat_min"] = json!(31.0);
    assert!(load(&data).is_err());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        LookupSet::from_json_str("{not json"),
        Err(LookupError::Json(_))
    ));
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lookups.json");

    let set = LookupSet::builtin().unwrap();
    set.save(&path).unwrap();
    let reloaded = LookupSet::from_path(&path).unwrap();

    assert_eq!(set.row_counts(), reloaded.row_counts());
    for category in Category::ALL {
        assert_eq!(set.sort_keys(category), reloaded.sort_keys(category));
    }
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = LookupSet::from_path(&temp_dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LookupError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_sort_keys_stable_and_content_based() {
    let row = RegionRow {
        locale: "en_US".to_string(),
        name: "Texas".to_string(),
        area_code: "512".to_string(),
        zip_prefix: "787".to_string(),
    };
    let mut other = row.clone();
    other.area_code = "737".to_string();
    assert_eq!(row_digest(&row), row_digest(&row.clone()));
    assert_ne!(row_digest(&row), row_digest(&other));

    let keys = LookupSet::builtin().unwrap().sort_keys(Category::Regions);
    assert!(keys.iter().all(|k| k.len() == 64));
}

#[test]
fn test_builtin_has_geo_for_every_region() {
    let set = LookupSet::builtin().unwrap();
    for region in set.regions.rows() {
        assert!(
            set.geo_locations
                .rows()
                .iter()
                .any(|g| g.region == region.name),
            "no geo box for {}",
            region.name
        );
    }
}

#[test]
fn test_weight_does_not_change_sort_key() {
    let mut data = minimal_dataset();
    let before = load(&data).unwrap().sort_keys(Category::EmailDomains);
    data["email_domains"][0]["weight"] = json!(3.0);
    let after = load(&data).unwrap().sort_keys(Category::EmailDomains);
    assert_eq!(before, after);
}

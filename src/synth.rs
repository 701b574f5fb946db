//! Attribute synthesis from resolved rows and draws.
//!
//! Everything here is a pure function of its arguments.

use crate::lookup::GeoRow;
use crate::record::{Gender, GenerationRequest};
use crate::stream::clamp_open;
use crate::template::{Template, TemplateError};
use std::f64::consts::PI;

/// Above this draw the title is prefixed to the name.
pub const TITLE_THRESHOLD: f64 = 0.6;

/// Decimal places kept for coordinates.
pub const COORDINATE_DECIMALS: i32 = 6;

/// Gender from the parity of `seed + batch + index`: even is male.
pub fn gender_for(request: &GenerationRequest) -> Gender {
    let sum = request
        .seed
        .wrapping_add(request.batch)
        .wrapping_add(request.index);
    if sum.rem_euclid(2) == 0 {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Standard normal sample from two uniforms (Box-Muller, cosine branch).
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = clamp_open(u1);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// `round(max(mean + stddev * z, floor))`
pub fn physical_measurement(mean: f64, stddev: f64, floor: f64, u1: f64, u2: f64) -> u32 {
    let z = box_muller(u1, u2);
    (mean + stddev * z).max(floor).round() as u32
}

pub fn full_name(title: &str, first: &str, last: &str, draw: f64) -> String {
    if draw > TITLE_THRESHOLD {
        format!("{} {} {}", title, first, last)
    } else {
        format!("{} {}", first, last)
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Interpolate inside a bounding box. One draw drives both axes.
pub fn coordinates(geo: &GeoRow, draw: f64) -> (f64, f64) {
    let lat = geo.lat_min + draw * (geo.lat_max - geo.lat_min);
    let lon = geo.lon_min + draw * (geo.lon_max - geo.lon_min);
    (
        round_to(lat, COORDINATE_DECIMALS).clamp(geo.lat_min, geo.lat_max),
        round_to(lon, COORDINATE_DECIMALS).clamp(geo.lon_min, geo.lon_max),
    )
}

/// `floor(draw * modulus)`, kept below `modulus`.
pub fn scaled(draw: f64, modulus: u64) -> u64 {
    ((draw * modulus as f64).floor() as u64).min(modulus.saturating_sub(1))
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Render an email pattern. Names are substituted as resolved.
pub fn email(
    pattern: &str,
    first: &str,
    last: &str,
    domain: &str,
    draw: f64,
) -> Result<String, TemplateError> {
    let f = initial(first);
    let l = initial(last);
    let random = format!("{:03}", scaled(draw, 1_000));
    Template::parse(pattern)?.render(&[
        ("first", first),
        ("last", last),
        ("f", &f),
        ("l", &l),
        ("domain", domain),
        ("random", &random),
    ])
}

pub fn phone(
    pattern: &str,
    intl_prefix: &str,
    area_code: &str,
    draw: f64,
) -> Result<String, TemplateError> {
    let subscriber = format!("{:06}", scaled(draw, 1_000_000));
    Template::parse(pattern)?.render(&[
        ("intl", intl_prefix),
        ("area", area_code),
        ("subscriber", &subscriber),
    ])
}

/// `"{word} {suffix}, {zip_prefix}-{number}"` with a zero-padded number.
pub fn address(word: &str, suffix: &str, zip_prefix: &str, digits: u32, draw: f64) -> String {
    let number = scaled(draw, 10u64.pow(digits));
    format!(
        "{} {}, {}-{:0width$}",
        word,
        suffix,
        zip_prefix,
        number,
        width = digits as usize
    )
}

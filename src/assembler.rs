//! Record assembly: request in, `SyntheticRecord` out.

use crate::error::{LookupError, SynthError};
use crate::lookup::LookupSet;
use crate::record::{GenerationRequest, SyntheticRecord};
use crate::resolver::{Picker, RowFilter};
use crate::stream::{Draw, DrawStream};
use crate::synth;
use std::path::Path;

/// Immutable generation state: the loaded lookup tables.
///
/// Shared by reference across threads; generation never mutates it.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    lookups: LookupSet,
}

impl GenerationContext {
    pub fn new(lookups: LookupSet) -> Self {
        Self { lookups }
    }

    /// Context over the built-in en_US/de_DE dataset.
    pub fn builtin() -> Result<Self, LookupError> {
        Ok(Self::new(LookupSet::builtin()?))
    }

    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        Ok(Self::new(LookupSet::from_path(path)?))
    }

    pub fn lookups(&self) -> &LookupSet {
        &self.lookups
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.lookups.profile(locale).is_some()
    }

    /// Generate the record for `request`.
    ///
    /// Picks run in dependency order: gender, name and title, region, the
    /// location inside that region, eye colour, physical means, contact
    /// patterns and address parts. Numeric fields and strings are derived
    /// last.
    pub fn generate(&self, request: &GenerationRequest) -> Result<SyntheticRecord, SynthError> {
        request.validate()?;
        let locale = request.locale.as_str();
        let profile = self
            .lookups
            .profile(locale)
            .ok_or_else(|| SynthError::UnsupportedLocale(locale.to_string()))?;

        let picker = Picker::new(request);
        let stream = DrawStream::new(request);
        let by_locale = RowFilter::locale(locale);

        let gender = synth::gender_for(request);
        let by_gender = by_locale.with_gender(gender);

        let name = picker.pick(&self.lookups.names, &by_gender)?;
        let title = picker.pick(&self.lookups.titles, &by_gender)?;
        let region = picker.pick(&self.lookups.regions, &by_locale)?;
        let geo = picker.pick(&self.lookups.geo_locations, &RowFilter::region(&region.name))?;
        let eye_color = picker.pick(&self.lookups.eye_colors, &by_locale)?;
        let means = picker.pick(&self.lookups.physical_attributes, &by_gender)?;
        let domain = picker.pick(&self.lookups.email_domains, &by_locale)?;
        let email_pattern = picker.pick(&self.lookups.email_patterns, &by_locale)?;
        let phone_pattern = picker.pick(&self.lookups.phone_patterns, &by_locale)?;
        let suffix = picker.pick(&self.lookups.suffixes, &by_locale)?;
        let word = picker.pick(&self.lookups.words, &by_locale)?;

        let height = synth::physical_measurement(
            means.height,
            profile.height_stddev,
            profile.height_floor,
            stream.get(Draw::HeightU1),
            stream.get(Draw::HeightU2),
        );
        let weight = synth::physical_measurement(
            means.weight,
            profile.weight_stddev,
            profile.weight_floor,
            stream.get(Draw::WeightU1),
            stream.get(Draw::WeightU2),
        );
        let (lat, lon) = synth::coordinates(geo, stream.get(Draw::Coordinates));

        let full_name = synth::full_name(
            &title.title,
            &name.first_name,
            &name.last_name,
            stream.get(Draw::TitleThreshold),
        );
        let email = synth::email(
            &email_pattern.pattern,
            &name.first_name,
            &name.last_name,
            &domain.domain,
            stream.get(Draw::EmailRandom),
        )?;
        let phone = synth::phone(
            &phone_pattern.pattern,
            &profile.intl_prefix,
            &region.area_code,
            stream.get(Draw::PhoneSubscriber),
        )?;
        let address = synth::address(
            &word.word,
            &suffix.suffix,
            &region.zip_prefix,
            profile.address_digits,
            stream.get(Draw::AddressNumber),
        );

        tracing::trace!(%request, region = %region.name, "generated record");

        Ok(SyntheticRecord {
            full_name,
            gender,
            eye_color: eye_color.eye_color.clone(),
            height,
            weight,
            email,
            phone,
            address,
            lat,
            lon,
            region: region.name.clone(),
        })
    }
}

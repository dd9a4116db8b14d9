//! Franchise identifier generation.
//!
//! An identifier is a random integer drawn from a closed range together with
//! the franchise name built from it (`prefix` + decimal number).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ports::RandomSource;
use crate::settings::{Settings, SettingsError, validate_prefix};

/// Prefix every generated franchise name starts with.
pub const DEFAULT_PREFIX: &str = "fra";

/// Lowest number the generator draws by default.
pub const DEFAULT_MIN_NUMBER: u32 = 1;

/// Highest number the generator draws by default.
pub const DEFAULT_MAX_NUMBER: u32 = 1000;

/// The pair of values produced by one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIdentifier {
    /// The raw draw.
    pub random_number: u32,
    /// `prefix` followed by the decimal form of `random_number`.
    pub franchise_name: String,
}

/// Build a franchise name from a prefix and a number.
///
/// The number is rendered in plain decimal: no padding, no separators.
///
/// ```
/// use fragen_core::domain::format_franchise_name;
///
/// assert_eq!(format_franchise_name("fra", 42), "fra42");
/// assert_eq!(format_franchise_name("fra", 1000), "fra1000");
/// ```
pub fn format_franchise_name(prefix: &str, number: u32) -> String {
    format!("{prefix}{number}")
}

/// Draws numbers uniformly from a closed range and formats them as names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierGenerator {
    prefix: String,
    min: u32,
    max: u32,
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            min: DEFAULT_MIN_NUMBER,
            max: DEFAULT_MAX_NUMBER,
        }
    }
}

impl IdentifierGenerator {
    /// Create a generator with a custom prefix and range.
    ///
    /// Fails when the range is empty or the prefix could not produce a valid
    /// franchise name.
    pub fn new(prefix: impl Into<String>, range: RangeInclusive<u32>) -> Result<Self, SettingsError> {
        let prefix = prefix.into();
        let (min, max) = range.into_inner();
        if min > max {
            return Err(SettingsError::InvalidRange { min, max });
        }
        validate_prefix(&prefix, max)?;
        Ok(Self { prefix, min, max })
    }

    /// Build a generator from the effective settings values.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Self::new(
            settings.effective_name_prefix(),
            settings.effective_min_number()..=settings.effective_max_number(),
        )
    }

    /// The name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The inclusive range numbers are drawn from.
    pub const fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Draw a number and format the matching franchise name.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> GeneratedIdentifier {
        let drawn = rng.draw_inclusive(self.min, self.max);
        let random_number = if self.range().contains(&drawn) {
            drawn
        } else {
            tracing::warn!(
                drawn,
                min = self.min,
                max = self.max,
                "random source returned a value outside the requested range; clamping"
            );
            drawn.clamp(self.min, self.max)
        };

        GeneratedIdentifier {
            random_number,
            franchise_name: format_franchise_name(&self.prefix, random_number),
        }
    }
}

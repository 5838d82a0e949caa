//! # Settings
//!
//! Decimal-conversion policy and display preferences. Settings are plain
//! serde structs so a front end can read them from a TOML file, a JSON
//! request, or build them in code. Every section has defaults, so an empty
//! file is a valid settings file.
//!
//! ## TOML Example
//!
//! ```toml
//! [decimal]
//! max_fraction_digits = 15
//!
//! [display]
//! decimal_places = 4
//! mixed_numbers = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{FracError, FracResult};

/// Largest allowed `max_fraction_digits`; `10^18` still fits an `i64` denominator.
pub const MAX_FRACTION_DIGITS_LIMIT: u32 = 18;

/// Largest allowed `decimal_places`; f64 carries about 17 significant digits.
pub const DECIMAL_PLACES_LIMIT: usize = 17;

/// Root settings container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub decimal: DecimalPolicy,
    pub display: DisplaySettings,
}

impl Settings {
    /// Parse and validate settings from TOML text.
    ///
    /// ```rust
    /// use frac_core::settings::Settings;
    ///
    /// let settings = Settings::from_toml_str("[display]\ndecimal_places = 2\n").unwrap();
    /// assert_eq!(settings.display.decimal_places, 2);
    /// assert_eq!(settings.decimal.max_fraction_digits, 15);
    /// ```
    pub fn from_toml_str(text: &str) -> FracResult<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a TOML settings file.
    pub fn load(path: &Path) -> FracResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            FracError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> FracResult<()> {
        self.decimal.validate()?;
        self.display.validate()
    }
}

/// How many fractional digits `from_decimal` keeps before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalPolicy {
    /// Digits after the point kept as the power-of-ten denominator (0..=18)
    pub max_fraction_digits: u32,
}

impl Default for DecimalPolicy {
    fn default() -> Self {
        DecimalPolicy {
            max_fraction_digits: 15,
        }
    }
}

impl DecimalPolicy {
    pub fn validate(&self) -> FracResult<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(FracError::invalid_input(
                "decimal.max_fraction_digits",
                self.max_fraction_digits.to_string(),
                format!("Must be at most {}", MAX_FRACTION_DIGITS_LIMIT),
            ));
        }
        Ok(())
    }
}

/// How results are rendered for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Digits after the point in the rendered decimal
    pub decimal_places: usize,

    /// Render improper fractions as mixed numbers (`7/2` as `3 1/2`)
    pub mixed_numbers: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            decimal_places: 4,
            mixed_numbers: false,
        }
    }
}

impl DisplaySettings {
    pub fn validate(&self) -> FracResult<()> {
        if self.decimal_places > DECIMAL_PLACES_LIMIT {
            return Err(FracError::invalid_input(
                "display.decimal_places",
                self.decimal_places.to_string(),
                format!("Must be at most {}", DECIMAL_PLACES_LIMIT),
            ));
        }
        Ok(())
    }
}

use std::str::FromStr;

use invariant_text_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

use crate::case_conversions::CharCaseMapper;

/// Case-folding mode applied uniformly to everything a call emits.
///
/// Case folding runs after classification and never changes the category a
/// code point is classified as.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Emit characters in the case the tables prescribe.
    #[default]
    None,
    /// Lowercase every emitted character.
    Lowercase,
    /// Uppercase every emitted character.
    Uppercase,
}

impl Axis {
    pub const fn name(&self) -> &'static str {
        match self {
            Axis::None => "none",
            Axis::Lowercase => "lowercase",
            Axis::Uppercase => "uppercase",
        }
    }

    /// Applies single-character case mapping according to the axis.
    #[inline]
    pub fn apply(&self, ch: char) -> char {
        match self {
            Axis::None => ch,
            Axis::Lowercase => ch.to_lowercase_ignore_special(),
            Axis::Uppercase => ch.to_uppercase_ignore_special(),
        }
    }
}

/// Convert a string name to an Axis enum variant.
impl TryFrom<&str> for Axis {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "none" => Ok(Axis::None),
            "lowercase" => Ok(Axis::Lowercase),
            "uppercase" => Ok(Axis::Uppercase),
            _ => Err(Error::invalid_arg("name", format!("Unrecognized axis: {name}"))),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Axis::try_from(s)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

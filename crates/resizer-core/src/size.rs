//! Target size specs of the form `<width>x<height>`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SizeSpecError;

/// Exact output dimensions parsed from a string such as `"50x50"`.
///
/// The original text is kept so derived object keys reproduce it verbatim
/// (`"050x50"` stays `"050x50"` in the key even though the width is 50).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeSpec {
    width: u32,
    height: u32,
    spec: String,
}

impl SizeSpec {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_str(&self) -> &str {
        &self.spec
    }
}

impl FromStr for SizeSpec {
    type Err = SizeSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || SizeSpecError::Format {
            spec: s.to_string(),
        };

        let (w, h) = s.split_once('x').ok_or_else(format_err)?;
        if w.is_empty() || h.is_empty() || h.contains('x') {
            return Err(format_err());
        }

        let width = parse_dimension(s, w)?;
        let height = parse_dimension(s, h)?;

        Ok(Self {
            width,
            height,
            spec: s.to_string(),
        })
    }
}

/// Parse one side of a size: ASCII digits only, no sign, no whitespace.
fn parse_dimension(spec: &str, value: &str) -> Result<u32, SizeSpecError> {
    let invalid = || SizeSpecError::InvalidDimension {
        spec: spec.to_string(),
        value: value.to_string(),
    };

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let n: u32 = value.parse().map_err(|_| invalid())?;
    if n == 0 {
        return Err(SizeSpecError::ZeroDimension {
            spec: spec.to_string(),
        });
    }
    Ok(n)
}

impl TryFrom<String> for SizeSpec {
    type Error = SizeSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeSpec> for String {
    fn from(size: SizeSpec) -> Self {
        size.spec
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        let size: SizeSpec = "50x50".parse().unwrap();
        assert_eq!(size.width(), 50);
        assert_eq!(size.height(), 50);
        assert_eq!(size.to_string(), "50x50");
    }

    #[test]
    fn test_parse_keeps_original_text() {
        let size: SizeSpec = "0640x480".parse().unwrap();
        assert_eq!(size.width(), 640);
        assert_eq!(size.as_str(), "0640x480");
    }

    #[test]
    fn test_rejects_wrong_shape() {
        for spec in ["50", "50x", "x50", "50X50", "50*50", "5x5x5", "", "x"] {
            let err = spec.parse::<SizeSpec>().unwrap_err();
            assert!(
                matches!(err, SizeSpecError::Format { .. }),
                "{spec:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_non_numeric() {
        for spec in ["abcx50", "50xabc", "-1x5", "+5x5", " 50x50", "50x50 ", "5.0x5"] {
            let err = spec.parse::<SizeSpec>().unwrap_err();
            assert!(
                matches!(err, SizeSpecError::InvalidDimension { .. }),
                "{spec:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_zero_and_overflow() {
        assert!(matches!(
            "0x50".parse::<SizeSpec>(),
            Err(SizeSpecError::ZeroDimension { .. })
        ));
        assert!(matches!(
            "99999999999x50".parse::<SizeSpec>(),
            Err(SizeSpecError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let size: SizeSpec = serde_json::from_str("\"120x80\"").unwrap();
        assert_eq!((size.width(), size.height()), (120, 80));
        assert_eq!(serde_json::to_string(&size).unwrap(), "\"120x80\"");
        assert!(serde_json::from_str::<SizeSpec>("\"120\"").is_err());
    }
}

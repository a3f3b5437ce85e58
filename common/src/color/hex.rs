use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{oklch::OkLch, rgb::SRgb};

/// An 8-bit sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex(pub SRgb<u8>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    Length(usize),
    Digit(char),
}

impl Hex {
    pub fn to_srgb(&self) -> SRgb<f64> {
        self.0.to_f64()
    }

    pub fn to_oklch(&self) -> OkLch<f64> {
        OkLch::from_srgb(self.to_srgb())
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.0.r, self.0.g, self.0.b]
    }
}

impl From<SRgb<u8>> for Hex {
    fn from(value: SRgb<u8>) -> Self {
        Self(value)
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|x| x as u8).ok_or(ParseHexError::Digit(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let [r, g, b] = match nibbles.as_slice() {
            &[r, g, b] => [r * 0x11, g * 0x11, b * 0x11],
            &[r1, r2, g1, g2, b1, b2] => [(r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2],
            other => return Err(ParseHexError::Length(other.len())),
        };

        Ok(Self(SRgb::new(r, g, b)))
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SRgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHexError::Length(len) => {
                write!(f, "expected 3 or 6 hex digits, found {len}")
            }
            ParseHexError::Digit(c) => write!(f, "invalid hex digit `{c}`"),
        }
    }
}

impl std::error::Error for ParseHexError {}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parse_long_and_short() {
        assert_eq!("#339D9B".parse::<Hex>().unwrap().rgb(), [0x33, 0x9d, 0x9b]);
        assert_eq!("fa4549".parse::<Hex>().unwrap().rgb(), [0xfa, 0x45, 0x49]);
        assert_eq!("#0f8".parse::<Hex>().unwrap().rgb(), [0x00, 0xff, 0x88]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("#12345".parse::<Hex>(), Err(ParseHexError::Length(5)));
        assert_eq!("#12345g".parse::<Hex>(), Err(ParseHexError::Digit('g')));
        assert_eq!("##abc".parse::<Hex>(), Err(ParseHexError::Digit('#')));
    }

    #[test]
    fn usable_as_set_key() {
        let hexes = ["#fa4549", "#FA4549", "#f45", "#ff4455"]
            .iter()
            .map(|s| s.parse::<Hex>().unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(hexes.len(), 2);
    }

    #[test]
    fn displays_lowercase() {
        let hex = "#A475F9".parse::<Hex>().unwrap();
        assert_eq!(hex.to_string(), "#a475f9");
    }
}

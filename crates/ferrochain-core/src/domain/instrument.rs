use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

/// Exchange instrument identifier in `SEGMENT|name` form, e.g. `NSE_INDEX|Nifty 50`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstrumentKey(String);

impl InstrumentKey {
    pub const NIFTY_50: &'static str = "NSE_INDEX|Nifty 50";
    pub const NIFTY_BANK: &'static str = "NSE_INDEX|Nifty Bank";
    pub const NIFTY_FIN_SERVICE: &'static str = "NSE_INDEX|Nifty Fin Service";
    pub const NIFTY_MID_SELECT: &'static str = "NSE_INDEX|NIFTY MID SELECT";
    pub const NIFTY_NEXT_50: &'static str = "NSE_INDEX|Nifty Next 50";
    pub const SENSEX: &'static str = "BSE_INDEX|SENSEX";
    pub const BANKEX: &'static str = "BSE_INDEX|BANKEX";

    /// Parse an instrument key. Surrounding whitespace is trimmed; the name
    /// part keeps its inner spaces and case since the exchange matches it verbatim.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInstrumentKey);
        }

        let invalid = || ValidationError::InvalidInstrumentKey {
            value: trimmed.to_owned(),
        };

        let (segment, name) = trimmed.split_once('|').ok_or_else(invalid)?;
        if segment.trim().is_empty() || name.trim().is_empty() || name.contains('|') {
            return Err(invalid());
        }
        if segment.chars().any(|ch| !(ch.is_ascii_alphanumeric() || ch == '_')) {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exchange segment, the part before `|`.
    pub fn segment(&self) -> &str {
        self.0.split_once('|').map(|(segment, _)| segment).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.0.split_once('|').map(|(_, name)| name).unwrap_or_default()
    }
}

impl Default for InstrumentKey {
    fn default() -> Self {
        Self(String::from(Self::NIFTY_50))
    }
}

impl Display for InstrumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_key_and_keeps_name_verbatim() {
        let key = InstrumentKey::parse("  NSE_INDEX|Nifty 50 ").expect("key should parse");
        assert_eq!(key.as_str(), "NSE_INDEX|Nifty 50");
        assert_eq!(key.segment(), "NSE_INDEX");
        assert_eq!(key.name(), "Nifty 50");
    }

    #[test]
    fn default_is_nifty_50() {
        assert_eq!(InstrumentKey::default().as_str(), InstrumentKey::NIFTY_50);
    }

    #[test]
    fn rejects_missing_separator() {
        let err = InstrumentKey::parse("Nifty 50").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidInstrumentKey { .. }));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(InstrumentKey::parse("|Nifty 50").is_err());
        assert!(InstrumentKey::parse("NSE_INDEX|").is_err());
        assert!(InstrumentKey::parse("NSE_INDEX|a|b").is_err());
        assert_eq!(
            InstrumentKey::parse("   ").expect_err("must fail"),
            ValidationError::EmptyInstrumentKey
        );
    }
}

//! Generation request configuration.

use crate::error::{Error, Result};

use super::charset::{self, CharClass};

/// Shortest password worth generating.
pub const MIN_LENGTH: usize = 4;
/// Longest supported password.
pub const MAX_LENGTH: usize = 128;

/// Immutable description of one generation request.
///
/// Built fresh per request by the CLI or TUI layer; the synthesis core
/// never mutates it.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub length: usize,
    pub classes: Vec<CharClass>,
    pub exclude_ambiguous: bool,
}

impl GeneratorConfig {
    /// Duplicate classes are collapsed, first occurrence wins the ordering.
    pub fn new(length: usize, classes: &[CharClass], exclude_ambiguous: bool) -> Self {
        let mut deduped: Vec<CharClass> = Vec::with_capacity(classes.len());
        for class in classes {
            if !deduped.contains(class) {
                deduped.push(*class);
            }
        }
        Self {
            length,
            classes: deduped,
            exclude_ambiguous,
        }
    }

    /// Reject configurations that cannot possibly produce a valid password.
    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(Error::LengthOutOfRange(self.length, MIN_LENGTH, MAX_LENGTH));
        }
        if self.classes.is_empty() {
            return Err(Error::NoClassesEnabled);
        }
        // The current alphabets never filter down to nothing, but the check
        // stays generic so future alphabet edits fail loudly here instead
        // of silently weakening passwords.
        for class in &self.classes {
            if class.filtered(self.exclude_ambiguous).is_empty() {
                return Err(Error::EmptyClassAlphabet(class.name()));
            }
        }
        if self.effective_alphabet().is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(())
    }

    /// Combined filtered alphabet for this request.
    pub fn effective_alphabet(&self) -> Vec<u8> {
        charset::effective(&self.classes, self.exclude_ambiguous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn valid_config_passes() -> Result<()> {
        let config = GeneratorConfig::new(16, &CharClass::ALL, true);
        config.validate()?;
        Ok(())
    }

    #[test]
    fn empty_class_set_is_invalid() {
        let config = GeneratorConfig::new(16, &[], false);
        assert!(matches!(config.validate(), Err(Error::NoClassesEnabled)));
    }

    #[test]
    fn length_bounds_are_enforced() {
        let too_short = GeneratorConfig::new(3, &CharClass::ALL, false);
        assert!(matches!(
            too_short.validate(),
            Err(Error::LengthOutOfRange(3, _, _))
        ));

        let too_long = GeneratorConfig::new(129, &CharClass::ALL, false);
        assert!(matches!(
            too_long.validate(),
            Err(Error::LengthOutOfRange(129, _, _))
        ));

        let min = GeneratorConfig::new(MIN_LENGTH, &CharClass::ALL, false);
        let max = GeneratorConfig::new(MAX_LENGTH, &CharClass::ALL, false);
        assert!(min.validate().is_ok());
        assert!(max.validate().is_ok());
    }

    #[test]
    fn duplicate_classes_collapse() {
        let config = GeneratorConfig::new(
            12,
            &[CharClass::Upper, CharClass::Upper, CharClass::Digit],
            false,
        );
        assert_eq!(config.classes, vec![CharClass::Upper, CharClass::Digit]);
    }

    #[test]
    fn effective_alphabet_matches_classes() {
        let config = GeneratorConfig::new(12, &[CharClass::Upper], true);
        // 26 uppercase minus O and I.
        assert_eq!(config.effective_alphabet().len(), 24);
    }
}

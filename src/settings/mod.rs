//! Runtime settings bridging the UI layers to the generator core.

mod file;

use crate::pass::{CharClass, GeneratorConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
    pub exclude_ambiguous: bool,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// Classes selected by the toggles, in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(4);
        if self.upper {
            classes.push(CharClass::Upper);
        }
        if self.lower {
            classes.push(CharClass::Lower);
        }
        if self.digits {
            classes.push(CharClass::Digit);
        }
        if self.special {
            classes.push(CharClass::Special);
        }
        classes
    }

    /// Snapshot these settings as an immutable generation request.
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.length,
            &self.enabled_classes(),
            self.exclude_ambiguous,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            count: 1,
            upper: true,
            lower: true,
            digits: true,
            special: true,
            exclude_ambiguous: false,
            output_file_path: String::new(),
            output_to_terminal: true,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_all_classes() {
        let settings = Settings::default();
        assert_eq!(settings.enabled_classes(), CharClass::ALL.to_vec());
    }

    #[test]
    fn toggles_map_to_classes() {
        let settings = Settings {
            upper: false,
            special: false,
            ..Default::default()
        };
        assert_eq!(
            settings.enabled_classes(),
            vec![CharClass::Lower, CharClass::Digit]
        );
    }

    #[test]
    fn config_snapshot_carries_settings() {
        let settings = Settings {
            length: 20,
            exclude_ambiguous: true,
            ..Default::default()
        };
        let config = settings.to_config();
        assert_eq!(config.length, 20);
        assert!(config.exclude_ambiguous);
        assert!(config.validate().is_ok());
    }
}

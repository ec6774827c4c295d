//! Character classes and alphabet construction.

/// Visually confusable characters, excluded on request.
pub const AMBIGUOUS: &[u8] = b"0O1lI";

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*-=+_?";

/// A named category of password characters with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special",
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// Alphabet bytes, minus ambiguous characters when requested.
    pub fn filtered(self, exclude_ambiguous: bool) -> Vec<u8> {
        self.alphabet()
            .bytes()
            .filter(|c| !(exclude_ambiguous && is_ambiguous(*c)))
            .collect()
    }

    /// Whether `c` counts toward this class under the given filtering.
    pub fn contains(self, c: u8, exclude_ambiguous: bool) -> bool {
        if exclude_ambiguous && is_ambiguous(c) {
            return false;
        }
        self.alphabet().as_bytes().contains(&c)
    }
}

pub fn is_ambiguous(c: u8) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Build the combined pool: every enabled class's filtered alphabet,
/// concatenated in class order.
pub fn effective(classes: &[CharClass], exclude_ambiguous: bool) -> Vec<u8> {
    let mut chars = Vec::new();
    for class in classes {
        chars.extend(class.filtered(exclude_ambiguous));
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharClass::Upper.alphabet().len(), 26);
        assert_eq!(CharClass::Lower.alphabet().len(), 26);
        assert_eq!(CharClass::Digit.alphabet().len(), 10);
        assert_eq!(CharClass::Special.alphabet().len(), 13);
    }

    #[test]
    fn filtering_removes_only_ambiguous() {
        // O and I from uppercase, l from lowercase, 0 and 1 from digits.
        assert_eq!(CharClass::Upper.filtered(true).len(), 24);
        assert_eq!(CharClass::Lower.filtered(true).len(), 25);
        assert_eq!(CharClass::Digit.filtered(true).len(), 8);
        assert_eq!(CharClass::Special.filtered(true).len(), 13);
    }

    #[test]
    fn filtering_off_keeps_everything() {
        for class in CharClass::ALL {
            assert_eq!(class.filtered(false).len(), class.alphabet().len());
        }
    }

    #[test]
    fn contains_respects_filtering() {
        assert!(CharClass::Upper.contains(b'O', false));
        assert!(!CharClass::Upper.contains(b'O', true));
        assert!(CharClass::Upper.contains(b'A', true));
        assert!(!CharClass::Upper.contains(b'a', false));
    }

    #[test]
    fn effective_concatenates_enabled_classes() {
        let pool = effective(&[CharClass::Upper, CharClass::Digit], false);
        assert_eq!(pool.len(), 36);
        assert!(pool.contains(&b'Z'));
        assert!(pool.contains(&b'5'));
        assert!(!pool.contains(&b'z'));
    }

    #[test]
    fn effective_filtered_has_no_ambiguous() {
        let pool = effective(&CharClass::ALL, true);
        for c in AMBIGUOUS {
            assert!(!pool.contains(c));
        }
    }
}

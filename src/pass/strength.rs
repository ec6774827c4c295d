//! Password strength estimation.
//!
//! Two views: theoretical entropy of the generation request (bits from
//! length and pool size), and a 0-100 score of a concrete password from
//! length tiers plus character variety.

use super::charset::CharClass;

/// Entropy of a uniform draw: length * log2(pool size).
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Scored strength of a concrete password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: &'static str,
}

/// Score a password: up to 40 points for length, 15 per character class
/// present.
pub fn score(password: &str) -> Strength {
    if password.is_empty() {
        return Strength {
            score: 0,
            label: "-",
        };
    }

    let mut score = match password.len() {
        16.. => 40,
        12..=15 => 30,
        8..=11 => 20,
        _ => 10,
    };

    for class in CharClass::ALL {
        if password.bytes().any(|c| class.contains(c, false)) {
            score += 15;
        }
    }

    let label = match score {
        80.. => "Very Strong",
        60..=79 => "Strong",
        40..=59 => "Medium",
        _ => "Weak",
    };

    Strength { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_empty_pool_is_zero() {
        assert_eq!(entropy_bits(20, 0), 0.0);
    }

    #[test]
    fn entropy_grows_with_length_and_pool() {
        let narrow = entropy_bits(12, 26);
        let wide = entropy_bits(12, 75);
        let long = entropy_bits(24, 26);
        assert!(wide > narrow);
        assert!(long > narrow);
        // 12 * log2(26) = ~56.4 bits
        assert!((narrow - 56.4).abs() < 0.1);
    }

    #[test]
    fn entropy_labels() {
        assert_eq!(entropy_label(20.0), "Weak");
        assert_eq!(entropy_label(50.0), "Fair");
        assert_eq!(entropy_label(100.0), "Strong");
        assert_eq!(entropy_label(200.0), "Very Strong");
    }

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(score("").score, 0);
        assert_eq!(score("").label, "-");
    }

    #[test]
    fn all_classes_long_password_is_very_strong() {
        let s = score("Abcdef12!?ghIJ34");
        assert_eq!(s.score, 100);
        assert_eq!(s.label, "Very Strong");
    }

    #[test]
    fn short_single_class_is_weak() {
        let s = score("abcdefg");
        assert_eq!(s.score, 25);
        assert_eq!(s.label, "Weak");
    }

    #[test]
    fn medium_band() {
        // 8 chars, lower + digits: 20 + 30 = 50.
        let s = score("abcd1234");
        assert_eq!(s.score, 50);
        assert_eq!(s.label, "Medium");
    }
}

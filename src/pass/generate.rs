//! Password synthesis.
//!
//! Uniform draws from the effective alphabet, then a whole-password retry
//! when an enabled class ends up unrepresented. Retrying (instead of
//! injecting one character per class at fixed positions) keeps the output
//! uniform over the satisfying subset of the alphabet space.

use zeroize::Zeroize;

use crate::entropy::{SecureRandom, uniform_index};
use crate::error::{Error, Result};

use super::config::GeneratorConfig;

/// Retry budget for the class-representation check. A miss on every one of
/// these attempts is astronomically unlikely for any valid config.
const MAX_ATTEMPTS: usize = 100;

/// Generate one password satisfying `config`.
///
/// Pure in its inputs apart from consuming draws from `rng`. Never returns
/// a partial result.
pub fn synthesize(config: &GeneratorConfig, rng: &mut dyn SecureRandom) -> Result<String> {
    config.validate()?;

    let alphabet = config.effective_alphabet();
    let mut buf: Vec<u8> = Vec::with_capacity(config.length);

    for attempt in 0..MAX_ATTEMPTS {
        buf.extend((0..config.length).map(|_| alphabet[uniform_index(rng, alphabet.len())]));

        if represents_all_classes(&buf, config) {
            if attempt > 0 {
                log::debug!("class constraints met after {attempt} retries");
            }
            // Safety: alphabet is all ASCII
            return Ok(unsafe { String::from_utf8_unchecked(std::mem::take(&mut buf)) });
        }

        buf.zeroize();
    }

    Err(Error::GenerationFailed(MAX_ATTEMPTS))
}

/// Generate `count` independent passwords.
pub fn synthesize_batch(
    config: &GeneratorConfig,
    rng: &mut dyn SecureRandom,
    count: usize,
) -> Result<Vec<String>> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(synthesize(config, rng)?);
    }
    Ok(passwords)
}

/// Every enabled class must contribute at least one character.
fn represents_all_classes(candidate: &[u8], config: &GeneratorConfig) -> bool {
    config.classes.iter().all(|class| {
        candidate
            .iter()
            .any(|&c| class.contains(c, config.exclude_ambiguous))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{OsEntropy, ScriptedRandom};
    use crate::pass::charset::{AMBIGUOUS, CharClass, is_ambiguous};
    use anyhow::Result;

    #[test]
    fn length_matches_config() -> Result<()> {
        let config = GeneratorConfig::new(12, &CharClass::ALL, false);
        let mut rng = OsEntropy;
        for _ in 0..10_000 {
            let pass = synthesize(&config, &mut rng)?;
            assert_eq!(pass.len(), 12);
        }
        Ok(())
    }

    #[test]
    fn every_enabled_class_is_represented() -> Result<()> {
        let config = GeneratorConfig::new(8, &CharClass::ALL, false);
        let mut rng = OsEntropy;
        for _ in 0..2_000 {
            let pass = synthesize(&config, &mut rng)?;
            for class in CharClass::ALL {
                assert!(
                    pass.bytes().any(|c| class.contains(c, false)),
                    "missing {} in {pass:?}",
                    class.name()
                );
            }
        }
        Ok(())
    }

    #[test]
    fn minimum_length_with_two_classes_never_exhausts_retries() -> Result<()> {
        // Tightest case that stays far from the retry budget: with two
        // classes at length 4 an attempt satisfies ~72% of the time.
        let config = GeneratorConfig::new(4, &[CharClass::Upper, CharClass::Digit], false);
        let mut rng = OsEntropy;
        for _ in 0..2_000 {
            let pass = synthesize(&config, &mut rng)?;
            assert!(pass.bytes().any(|c| c.is_ascii_uppercase()));
            assert!(pass.bytes().any(|c| c.is_ascii_digit()));
        }
        Ok(())
    }

    #[test]
    fn excluded_ambiguous_never_appear() -> Result<()> {
        let config = GeneratorConfig::new(12, &CharClass::ALL, true);
        let mut rng = OsEntropy;
        for _ in 0..10_000 {
            let pass = synthesize(&config, &mut rng)?;
            assert!(pass.bytes().all(|c| !is_ambiguous(c)), "ambiguous in {pass:?}");
        }
        Ok(())
    }

    #[test]
    fn single_class_stays_in_its_alphabet() -> Result<()> {
        let config = GeneratorConfig::new(10, &[CharClass::Upper], true);
        let mut rng = OsEntropy;
        for _ in 0..1_000 {
            let pass = synthesize(&config, &mut rng)?;
            assert!(pass.bytes().all(|c| c.is_ascii_uppercase()));
            assert!(!pass.contains('O'));
            assert!(!pass.contains('I'));
        }
        Ok(())
    }

    #[test]
    fn characters_come_from_effective_alphabet() -> Result<()> {
        let config = GeneratorConfig::new(20, &[CharClass::Digit, CharClass::Special], false);
        let alphabet = config.effective_alphabet();
        let mut rng = OsEntropy;
        for _ in 0..1_000 {
            let pass = synthesize(&config, &mut rng)?;
            assert!(pass.bytes().all(|c| alphabet.contains(&c)));
        }
        Ok(())
    }

    #[test]
    fn invalid_configs_fail_before_drawing() {
        let mut rng = ScriptedRandom::new(vec![0]);

        let empty = GeneratorConfig::new(12, &[], false);
        assert!(matches!(
            synthesize(&empty, &mut rng),
            Err(Error::NoClassesEnabled)
        ));

        let short = GeneratorConfig::new(0, &CharClass::ALL, false);
        assert!(matches!(
            synthesize(&short, &mut rng),
            Err(Error::LengthOutOfRange(0, _, _))
        ));
    }

    #[test]
    fn retry_budget_exhaustion_is_an_error() {
        // A source stuck on zero always picks 'A', so lowercase is never
        // represented and every attempt fails the class check.
        let config = GeneratorConfig::new(8, &CharClass::ALL, false);
        let mut rng = ScriptedRandom::new(vec![0]);
        assert!(matches!(
            synthesize(&config, &mut rng),
            Err(Error::GenerationFailed(100))
        ));
    }

    #[test]
    fn spec_example_all_classes_no_ambiguous() -> Result<()> {
        let config = GeneratorConfig::new(12, &CharClass::ALL, true);
        let mut rng = OsEntropy;
        let pass = synthesize(&config, &mut rng)?;
        assert_eq!(pass.len(), 12);
        for class in CharClass::ALL {
            assert!(pass.bytes().any(|c| class.contains(c, true)));
        }
        for &c in AMBIGUOUS {
            assert!(!pass.as_bytes().contains(&c));
        }
        Ok(())
    }

    #[test]
    fn batch_generates_independent_passwords() -> Result<()> {
        let config = GeneratorConfig::new(20, &CharClass::ALL, false);
        let mut rng = OsEntropy;
        let passwords = synthesize_batch(&config, &mut rng, 5)?;
        assert_eq!(passwords.len(), 5);
        for pass in &passwords {
            assert_eq!(pass.len(), 20);
        }
        // 20 chars over a 75-char pool: a collision means a broken source.
        assert_ne!(passwords[0], passwords[1]);
        Ok(())
    }

    #[test]
    fn single_class_frequencies_are_roughly_uniform() -> Result<()> {
        let config = GeneratorConfig::new(12, &[CharClass::Lower], false);
        let mut rng = OsEntropy;
        let mut counts = [0usize; 26];
        let samples = 10_000;
        for _ in 0..samples {
            let pass = synthesize(&config, &mut rng)?;
            for c in pass.bytes() {
                counts[(c - b'a') as usize] += 1;
            }
        }
        // 120k draws over 26 symbols: expect ~4615 each, sd ~66. A 15%
        // band is > 10 sigma, far beyond flake territory.
        let expected = (samples * 12) as f64 / 26.0;
        for (i, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                (0.85..1.15).contains(&ratio),
                "char {} count {count} deviates from {expected:.0}",
                (b'a' + i as u8) as char
            );
        }
        Ok(())
    }
}

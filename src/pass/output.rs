//! Password delivery: terminal, file, or clipboard buffer.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use zeroize::Zeroize;

use crate::entropy::SecureRandom;
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top};

use super::strength;
use super::synthesize_batch;

/// Entropy/strength header for the configured request.
pub fn print_header(settings: &Settings) {
    let config = settings.to_config();
    let pool = config.effective_alphabet().len();
    let bits = strength::entropy_bits(config.length, pool);

    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, strength::entropy_label(bits)));
    box_line(&format!("Source: OS CSPRNG | Charset: {} chars", pool));
    box_bottom();
    println!();
}

/// Generate per `settings` and deliver the result.
///
/// Returns the newline-joined buffer when clipboard output was requested;
/// the caller owns it and is responsible for zeroizing. All other paths
/// return `None` after writing to the file or terminal.
pub fn deliver(settings: &Settings, rng: &mut dyn SecureRandom) -> Result<Option<String>> {
    let config = settings.to_config();
    let count = settings.count.max(1);
    let mut passwords = synthesize_batch(&config, rng, count)?;

    if settings.to_clipboard {
        let mut joined = String::with_capacity(count * (config.length + 1));
        for pass in &mut passwords {
            joined.push_str(pass);
            joined.push('\n');
            pass.zeroize();
        }
        return Ok(Some(joined));
    }

    if !settings.output_file_path.is_empty() {
        let mut file = open_output_file(&settings.output_file_path)?;
        for pass in &mut passwords {
            file.write_all(pass.as_bytes())?;
            file.write_all(b"\n")?;
            pass.zeroize();
        }
        return Ok(None);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pass in &mut passwords {
        let _ = out.write_all(pass.as_bytes());
        let _ = out.write_all(b"\n");
        pass.zeroize();
    }
    let _ = out.flush();
    Ok(None)
}

/// Append-mode output file, creating parent directories as needed.
fn open_output_file(path: &str) -> Result<File> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::OsEntropy;
    use anyhow::Result;

    fn test_settings() -> Settings {
        Settings {
            length: 12,
            count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn clipboard_buffer_joins_with_newlines() -> Result<()> {
        let mut settings = test_settings();
        settings.to_clipboard = true;
        let mut rng = OsEntropy;
        let buffer = deliver(&settings, &mut rng)?.expect("clipboard buffer");
        let lines: Vec<&str> = buffer.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 12);
        }
        Ok(())
    }

    #[test]
    fn file_output_appends() -> Result<()> {
        let dir = std::env::temp_dir().join("passforge-test-output");
        let path = dir.join("out.txt");
        let _ = std::fs::remove_file(&path);

        let mut settings = test_settings();
        settings.output_file_path = path.display().to_string();
        settings.output_to_terminal = false;

        let mut rng = OsEntropy;
        assert!(deliver(&settings, &mut rng)?.is_none());
        assert!(deliver(&settings, &mut rng)?.is_none());

        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written.lines().count(), 6);

        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn invalid_settings_deliver_nothing() {
        let mut settings = test_settings();
        settings.upper = false;
        settings.lower = false;
        settings.digits = false;
        settings.special = false;
        let mut rng = OsEntropy;
        assert!(deliver(&settings, &mut rng).is_err());
    }
}

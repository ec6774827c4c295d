//! Settings file persistence.
//!
//! Single-line comma-separated record under `~/.config/passforge/settings`.
//! The output path field may contain commas, so it is pipe-escaped.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELD_COUNT: usize = 9;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{}\n",
        settings.length,
        settings.count,
        settings.upper,
        settings.lower,
        settings.digits,
        settings.special,
        settings.exclude_ambiguous,
        escape(&settings.output_file_path),
        settings.output_to_terminal,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        log::warn!("failed to create settings directory: {e}");
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        save(settings)?;
    } else {
        let parts = split_escaped(line.trim(), ',');

        if parts.len() == FIELD_COUNT {
            settings.length = parts[0].parse().unwrap_or(settings.length);
            settings.count = parts[1].parse().unwrap_or(settings.count);
            settings.upper = parts[2].parse().unwrap_or(settings.upper);
            settings.lower = parts[3].parse().unwrap_or(settings.lower);
            settings.digits = parts[4].parse().unwrap_or(settings.digits);
            settings.special = parts[5].parse().unwrap_or(settings.special);
            settings.exclude_ambiguous = parts[6].parse().unwrap_or(settings.exclude_ambiguous);
            settings.output_file_path = parts[7].to_string();
            settings.output_to_terminal = parts[8].parse().unwrap_or(settings.output_to_terminal);
        } else {
            // Stale or corrupt record: rewrite with current defaults.
            log::warn!("settings file has {} fields, expected {FIELD_COUNT}", parts.len());
            save(settings)?;
        }
    }

    Ok(())
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passforge/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ',' => out.push_str("|,"),
            '|' => out.push_str("||"),
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() || (s.ends_with(delimiter) && !escape_next) {
        parts.push(current);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trips_through_split() {
        let path = "out,dir|weird/pass.txt";
        let line = format!("16,1,{},true", escape(path));
        let parts = split_escaped(&line, ',');
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2], path);
    }

    #[test]
    fn split_handles_empty_fields() {
        let parts = split_escaped("16,,true", ',');
        assert_eq!(parts, vec!["16", "", "true"]);
    }

    #[test]
    fn split_plain_record() {
        let parts = split_escaped("16,1,true,true,true,true,false,,true", ',');
        assert_eq!(parts.len(), FIELD_COUNT);
        assert_eq!(parts[7], "");
    }
}

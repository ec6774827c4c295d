use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-x" | "--exclude-similar" => flags.exclude_similar = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.count = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    // No path given, default to current dir
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_count() {
        let flags = parse(&args(&["-l", "20", "-n", "5"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.count, Some(5));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-special", "--no-digits", "-x"])).unwrap();
        assert!(flags.no_special);
        assert!(flags.no_digits);
        assert!(!flags.no_upper);
        assert!(flags.exclude_similar);
    }

    #[test]
    fn output_without_path_defaults_to_cwd() {
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_unknown_args() {
        assert!(matches!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}

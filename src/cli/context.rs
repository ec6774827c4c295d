//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::entropy::OsEntropy;
use crate::pass::output;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.check_config()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if self.flags.default {
            self.settings = Settings::default();
        }

        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(count) = self.flags.count {
            self.settings.count = count;
        }

        // Character class toggles
        if self.flags.no_upper {
            self.settings.upper = false;
        }
        if self.flags.no_lower {
            self.settings.lower = false;
        }
        if self.flags.no_digits {
            self.settings.digits = false;
        }
        if self.flags.no_special {
            self.settings.special = false;
        }
        if self.flags.exclude_similar {
            self.settings.exclude_ambiguous = true;
        }

        // Apply output file
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = if path.ends_with('/') || path == "." {
                if path == "." {
                    "passforge.txt".to_string()
                } else {
                    format!("{}passforge.txt", path)
                }
            } else {
                path.clone()
            };
            self.settings.output_to_terminal = false;
        }

        // Handle clipboard
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Surface invalid configurations before any randomness is drawn.
    fn check_config(&self) -> Result<(), Done> {
        if let Err(e) = self.settings.to_config().validate() {
            prompts::error(&format!("Invalid options: {}", e));
            std::process::exit(2);
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) {
        let mut rng = OsEntropy;
        let count = self.settings.count.max(1);

        match output::deliver(&self.settings, &mut rng) {
            Ok(Some(mut passwords)) => {
                if let Some(ctx) = self.clipboard.as_mut() {
                    match ctx.set_contents(passwords.clone()) {
                        Ok(_) => {
                            if let Ok(mut retrieved) = ctx.get_contents() {
                                retrieved.zeroize();
                            }
                            prompts::clipboard_copied(count);
                        }
                        Err(e) => {
                            prompts::clipboard_error(&e.to_string());
                        }
                    }
                }
                passwords.zeroize();
            }
            Ok(None) => {
                if !self.settings.output_file_path.is_empty() {
                    let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| self.settings.output_file_path.clone());
                    prompts::passwords_written(count, &full_path);
                }
            }
            Err(e) => {
                prompts::error(&format!("Generation failed: {}", e));
                std::process::exit(1);
            }
        }
    }
}

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::process::exit;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::entropy::OsEntropy;
use crate::pass::history::History;
use crate::pass::{output, strength, synthesize};
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_top, clear, print_error, reset_terminal, strength_meter,
};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_file_exists, print_help,
    print_history, print_main_menu, print_settings_menu,
};

pub fn gen_file_exists_menu(settings: &Settings) -> Option<File> {
    print_file_exists(&settings.output_file_path);

    loop {
        let answer = get_editable_input("Enter your choice", "")?;

        let choice = answer.trim().to_lowercase();
        let open = match choice.as_str() {
            "o" => OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&settings.output_file_path),
            "a" => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&settings.output_file_path),
            _ => {
                // Move up 2 lines (to blank line), clear it, print error, move down, clear prompt line
                print!(
                    "\x1b[2A\x1b[2K\x1b[31mInvalid choice. Please enter 'a' or 'o'.\x1b[0m\n\x1b[2K"
                );
                let _ = std::io::stdout().flush();
                continue;
            }
        };

        match open {
            Ok(file) => return Some(file),
            Err(e) => {
                print_error(&format!("Failed to open file: {}", e));
                return None;
            }
        }
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("failed to load settings: {e}");
            Settings::default()
        }
    };

    let mut history = History::new();
    let mut print_invalid = false;

    // Generate right away with the loaded settings, unless they point at a
    // file or ask for an unwieldy batch.
    if settings.output_file_path.is_empty() && settings.count <= 100 {
        generate_passwords(&settings, &mut history);
    }

    loop {
        print_main_menu(&mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                generate_passwords(&settings, &mut history);
                reset_terminal(); // Ensure clean state after password generation
            }
            "1" => {
                update_settings(&mut settings, &mut history);
            }
            "2" => {
                clear();
                print_history(&history);
            }
            "3" => copy_latest(&history),
            "4" => {
                clear();
                history.clear();
            }
            "5" => {
                clear();
                print_help();
            }
            "6" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

/// Generate per current settings and show the result. Single terminal
/// passwords get a strength meter and land in the history.
fn generate_passwords(settings: &Settings, history: &mut History) {
    let config = settings.to_config();
    if let Err(e) = config.validate() {
        println!();
        print_error(&format!("{}", e));
        println!();
        return;
    }

    let mut rng = OsEntropy;
    let count = settings.count.max(1);

    output::print_header(settings);

    if !settings.output_file_path.is_empty() {
        let file = if Path::new(&settings.output_file_path).exists() {
            gen_file_exists_menu(settings)
        } else {
            open_new_output(&settings.output_file_path)
        };
        let Some(mut file) = file else {
            return;
        };

        for _ in 0..count {
            match synthesize(&config, &mut rng) {
                Ok(mut pass) => {
                    let _ = file.write_all(pass.as_bytes());
                    let _ = file.write_all(b"\n");
                    pass.zeroize();
                }
                Err(e) => {
                    print_error(&format!("Generation failed: {}", e));
                    return;
                }
            }
        }

        box_top("Complete");
        box_line(&format!(
            "{} password(s) \u{2192} {}",
            count, settings.output_file_path
        ));
        box_bottom();
        println!();
        return;
    }

    let mut keep: Option<String> = None;
    for _ in 0..count {
        match synthesize(&config, &mut rng) {
            Ok(pass) => {
                println!("{}", pass);
                if count == 1 {
                    keep = Some(pass);
                } else {
                    let mut pass = pass;
                    pass.zeroize();
                }
            }
            Err(e) => {
                print_error(&format!("Generation failed: {}", e));
                return;
            }
        }
    }
    println!();

    if let Some(pass) = keep {
        let scored = strength::score(&pass);
        strength_meter(scored.score, scored.label);
        println!();
        // History owns the password now; it is zeroized on eviction.
        history.push(pass);
    }
}

fn copy_latest(history: &History) {
    clear();
    let Some(entry) = history.latest() else {
        print_error("No password to copy.");
        println!();
        return;
    };

    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(entry.password().to_string()) {
            Ok(_) => println!("*** -COPIED TO CLIPBOARD- ***\n"),
            Err(e) => print_error(&format!("Clipboard error: {}", e)),
        },
        Err(e) => print_error(&format!("Clipboard unavailable: {}", e)),
    }
}

fn open_new_output(path: &str) -> Option<File> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
        && std::fs::create_dir_all(parent).is_err()
    {
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

pub fn update_settings(settings: &mut Settings, history: &mut History) {
    let (mut print_error_code, mut error_txt) = (0, String::new());

    loop {
        print_settings_menu(settings, print_error_code, &error_txt);
        print_error_code = 0;

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                break; // ESC pressed - return to main menu
            }
        };
        let choice = choice.trim();

        let action = match choice.parse::<i32>() {
            Ok(num) => menu_options(num, &mut print_error_code, &mut error_txt, settings),
            Err(_) => command_options(
                choice,
                &mut print_error_code,
                &mut error_txt,
                settings,
                history,
            ),
        };

        if let Break = action {
            break;
        }
    }
}

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

fn menu_options(
    choice: i32,
    print_error_code: &mut i32,
    error_txt: &mut String,
    settings: &mut Settings,
) -> LoopAction {
    use crate::pass::config::{MAX_LENGTH, MIN_LENGTH};

    match choice {
        1 => {
            // pass length
            if let Some(len) = get_numeric_input("Enter new password length", settings.length) {
                if (MIN_LENGTH..=MAX_LENGTH).contains(&len) {
                    settings.length = len;
                } else {
                    *print_error_code = 2;
                }
            }
        }
        2 => {
            // num of passwords
            if let Some(count) = get_numeric_input("Enter number of passwords", settings.count) {
                if count > 0 {
                    settings.count = count;
                } else {
                    *print_error_code = 999;
                    *error_txt = "Number of passwords must be at least 1.".to_string();
                }
            }
        }
        3 => toggle_class(settings, |s| &mut s.upper, print_error_code, error_txt),
        4 => toggle_class(settings, |s| &mut s.lower, print_error_code, error_txt),
        5 => toggle_class(settings, |s| &mut s.digits, print_error_code, error_txt),
        6 => toggle_class(settings, |s| &mut s.special, print_error_code, error_txt),
        7 => settings.exclude_ambiguous = !settings.exclude_ambiguous,
        8 => {
            // output to terminal
            settings.output_to_terminal = !settings.output_to_terminal;
        }
        9 => {
            // output file path
            let new_path = match get_editable_input(
                "Enter new .txt output file path",
                &settings.output_file_path,
            ) {
                Some(s) => s,
                None => return Continue,
            };

            let path = match new_path.trim().to_string() {
                path if path.is_empty() => {
                    settings.output_file_path = String::new();
                    return Continue;
                }
                path if path.ends_with(".txt") => path,
                path if path.ends_with('.') => format!("{}/passforge.txt", path),
                path if path.ends_with('/') => format!("{}passforge.txt", path),
                _ => {
                    *print_error_code = 3;
                    return Continue;
                }
            };

            if Path::new(path.trim()).parent().is_none() {
                *print_error_code = 3;
                return Continue;
            }

            settings.output_file_path = path.trim().to_string();
        }
        _ => {
            clear();
            *print_error_code = 998;
        }
    }
    Continue
}

fn command_options(
    choice: &str,
    print_error_code: &mut i32,
    error_txt: &mut String,
    settings: &mut Settings,
    history: &mut History,
) -> LoopAction {
    if choice.is_empty() {
        if settings.output_file_path.is_empty() && !settings.output_to_terminal {
            *print_error_code = 999;
            *error_txt = "You must output to the terminal or a file.".to_string();
            return Continue; // Stay in settings to show error
        } else {
            // generate passwords
            clear();
            generate_passwords(settings, history);
            return Break;
        }
    }

    if choice == "help" {
        clear();
        print_help();
        return Break;
    }

    match choice.chars().next() {
        Some('s') | Some('e') | Some('r') | Some('f') | Some('d') => {}
        _ => {
            *print_error_code = 999;
            *error_txt = "Invalid selection".to_string();
            return Continue;
        }
    }

    for ch in choice.chars() {
        match ch {
            's' => {
                // save settings
                if let Err(e) = settings.save_to_file() {
                    *print_error_code = 1;
                    *error_txt = format!("Error saving settings: {}", e);
                }
            }
            'e' => {}
            'r' => {
                // load default settings
                *settings = Settings::default();
            }
            'f' => {
                // load from file
                match Settings::load_from_file() {
                    Ok(s) => {
                        *settings = s;
                    }
                    Err(e) => {
                        *print_error_code = 1;
                        *error_txt = format!("Error loading settings: {}", e);
                    }
                }
            }
            'd' => {
                clear();
                if Path::new(&settings.output_file_path).exists() {
                    let _ = std::fs::remove_file(&settings.output_file_path);
                }
            }
            _ => {
                // invalid input
                clear();
                *print_error_code = 998;
            }
        }
    }

    if choice.contains('e') {
        clear();
        exit(0);
    }
    Continue
}

/// Flip a class toggle, refusing to turn off the last enabled class.
fn toggle_class(
    settings: &mut Settings,
    field: fn(&mut Settings) -> &mut bool,
    print_error_code: &mut i32,
    error_txt: &mut String,
) {
    let last_one = settings.enabled_classes().len() == 1;
    let flag = field(settings);
    if *flag && last_one {
        *print_error_code = 999;
        *error_txt = "At least one character class must stay enabled.".to_string();
    } else {
        *flag = !*flag;
    }
}

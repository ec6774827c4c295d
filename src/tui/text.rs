use crate::pass::charset::CharClass;
use crate::pass::history::History;
use crate::pass::strength;
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    format_number, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate passwords)"
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Constraint-satisfying secure password generator");
    box_line("");
    box_line("Every password is drawn uniformly from the enabled character");
    box_line("classes and is guaranteed to contain at least one character");
    box_line("from each of them.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI menu to");
    box_line("     configure settings and generate passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 4-128 (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Drop uppercase letters");
    box_opt("      --no-lower", "Drop lowercase letters");
    box_opt("      --no-digits", "Drop digits");
    box_opt("      --no-special", "Drop special characters");
    box_opt("  -x, --exclude-similar", "Exclude look-alikes: 0 O 1 l I");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passforge.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                One password, interactive menu");
    box_line("  passforge -l 16          One password, 16 characters");
    box_line("  passforge -l 20 -n 3     Three passwords, 20 characters each");
    box_line("  passforge -x --no-special  Alphanumeric, no look-alikes");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_file_exists(file_name: &str) {
    print_error(&format!("File {file_name} already exists."));
    println!();
    box_top("");
    box_line_center("a) append | o) overwrite");
    box_bottom();
    println!();
    flush();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) settings");
    box_line("  2) history");
    box_line("  3) copy last password");
    box_line("  4) clear screen and history");
    box_line("  5) help");
    box_line("  6) quit");
    box_line("");
    box_bottom();

    // Error message (or blank line if no error)
    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_settings_menu(settings: &Settings, print_error_code: i32, error_txt: &str) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    // General section
    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!(
        "  1) Password Length: {}",
        format_number(settings.length)
    ));
    box_line(&format!(
        "  2) Number of Passwords: {}",
        format_number(settings.count)
    ));

    // Character class section
    box_line("");
    box_line(&format!("{UNDERLINE}Character Classes{RESET}:"));
    box_line(&format!(
        "  3) Uppercase ({}): {}",
        CharClass::Upper.alphabet(),
        on_off(settings.upper)
    ));
    box_line(&format!(
        "  4) Lowercase ({}): {}",
        CharClass::Lower.alphabet(),
        on_off(settings.lower)
    ));
    box_line(&format!(
        "  5) Digits ({}): {}",
        CharClass::Digit.alphabet(),
        on_off(settings.digits)
    ));
    box_line(&format!(
        "  6) Special ({}): {}",
        CharClass::Special.alphabet(),
        on_off(settings.special)
    ));
    box_line(&format!(
        "  7) Exclude similar (0 O 1 l I): {}",
        on_off(settings.exclude_ambiguous)
    ));

    // Output section
    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!(
        "  8) Password(s) to terminal: {}",
        on_off(settings.output_to_terminal)
    ));
    box_line(&format!(
        "  9) Password output file path: {}",
        settings.output_file_path
    ));

    // Footer
    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_line("     d) delete output file");
    box_bottom();

    // Error messages (or blank line if no error)
    match print_error_code {
        1 => print_error(error_txt),
        2 => print_error("Invalid input, please enter a number between 4 and 128..."),
        3 => print_error("Invalid input, please enter a valid file path..."),
        998 => print_error("Invalid input, please enter a valid menu option..."),
        999 => print_error(error_txt),
        _ => println!(),
    }
    flush();
}

pub fn print_history(history: &History) {
    if history.is_empty() {
        box_top("History");
        box_line_center("No passwords generated yet");
    } else {
        box_top(&format!("History ({})", history.len()));
        for entry in history.iter() {
            let strength = strength::score(entry.password());
            box_line(&format!(
                "  {}  ({}, {}s ago)",
                entry.password(),
                strength.label,
                entry.age().as_secs()
            ));
        }
    }
    box_bottom();
    println!();
}

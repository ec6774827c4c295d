mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(c) => c,
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    };
    let _ = context.run();
}

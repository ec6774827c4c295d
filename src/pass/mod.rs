//! Password synthesis and delivery.

pub mod charset;
pub mod config;
mod generate;
pub mod history;
pub mod output;
pub mod strength;

pub use charset::CharClass;
pub use config::GeneratorConfig;
pub use generate::{synthesize, synthesize_batch};

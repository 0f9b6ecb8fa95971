// CLI layer - the command-line stand-in for the moderation page.

#[path = "args.rs"]
pub mod args;

#[path = "commands.rs"]
pub mod commands;

pub use args::Args;

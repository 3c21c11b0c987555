/// CLI layer: argument parsing and output rendering.
pub mod args;
pub mod output;

pub use args::{Cli, Mode, OutputFormat};
pub use output::OutputCtx;

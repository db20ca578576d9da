//! One module per subcommand.

pub mod compile;
pub mod completions;
pub mod config;
pub mod variants;

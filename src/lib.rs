/// Define Rewriter
///
/// Compile-time define substitution for JavaScript and TypeScript. Sources are
/// parsed with Tree-sitter; property chains, bare identifiers and `typeof`
/// expressions that match a configured path are replaced with literals, and
/// the binary expression around each substitution is folded when its value is
/// known.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod logging;
pub mod utils;

pub use config::{ConfigSource, Defines};
pub use engine::{Context, RewriteOptions, RewriteOutput, Rewriter};
pub use error::{Error, Result};

// Export modules for library usage
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod resolver;
pub mod runner;
pub mod target;

// Re-export commonly used types
pub use crate::command::JdepsCommand;
pub use crate::config::{AnalysisConfig, JdepsConfig, ResolverConfig, Verbosity};
pub use crate::errors::{JdepsError, Result};
pub use crate::resolver::{JdepsResolver, Platform, ToolchainDir, ToolchainLookup};
pub use crate::runner::{execute, run_analysis, Invocation};
pub use crate::target::{StaticTarget, TargetProvider};

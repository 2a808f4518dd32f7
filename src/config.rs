use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{JdepsError, Result};

/// Detail level of the dependency listing produced by jdeps.
///
/// Textual values map permissively: `class` and `package` select the
/// archive-excluding listings, anything else selects the full class-level
/// listing. Unknown values are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verbosity {
    /// Class-level dependencies, excluding dependencies within the same archive
    Class,
    /// Package-level dependencies, excluding dependencies within the same archive
    Package,
    /// All class-level dependencies
    Full,
}

impl From<&str> for Verbosity {
    fn from(value: &str) -> Self {
        match value {
            "class" => Self::Class,
            "package" => Self::Package,
            _ => Self::Full,
        }
    }
}

impl From<String> for Verbosity {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<Verbosity> for String {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Class => "class",
            Verbosity::Package => "package",
            Verbosity::Full => "full",
        }
        .to_string()
    }
}

/// Immutable snapshot of the user-facing options for one jdeps invocation.
///
/// Constructed once, fully resolved before any argument building happens,
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Destination directory for DOT file output
    #[serde(default)]
    pub dot_output: Option<PathBuf>,

    /// Detail level of the dependency listing
    #[serde(default)]
    pub verbose: Option<Verbosity>,

    /// Restrict analysis to classes matching the pattern
    #[serde(default)]
    pub include: Option<String>,

    /// Restrict analysis to the signatures of public and protected members
    #[serde(default)]
    pub api_only: bool,

    /// Show profile or the file containing a package
    #[serde(default)]
    pub profile: bool,

    /// Recursively traverse all dependencies
    #[serde(default)]
    pub recursive: bool,

    /// Base directory receiving diagnostic output; the child process runs here
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dot_output: None,
            verbose: None,
            include: None,
            api_only: false,
            profile: false,
            recursive: false,
            output_directory: default_output_directory(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("target")
}

/// Settings feeding executable resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Installation directory of the Java runtime the build executes on
    #[serde(default)]
    pub java_home: Option<PathBuf>,

    /// Explicit JDK home whose tools take priority over filesystem heuristics
    #[serde(default)]
    pub toolchain: Option<PathBuf>,

    /// Specification version of the runtime, e.g. 1.6 or 1.8
    #[serde(default)]
    pub java_version: Option<f32>,
}

/// On-disk configuration, conventionally `jdeps.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JdepsConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl JdepsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            JdepsError::configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            JdepsError::configuration(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

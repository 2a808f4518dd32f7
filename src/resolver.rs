//! jdeps executable discovery.
//!
//! The tool ships inside the JDK, but its location relative to the runtime
//! home is platform- and vendor-version-dependent. An explicit toolchain
//! answer is authoritative; the runtime-relative layouts are a convenience;
//! the `JAVA_HOME` environment variable is the last resort for non-standard
//! installations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{JdepsError, Result};

/// Runtime spec version assumed when the host does not say otherwise.
const DEFAULT_JAVA_VERSION: f32 = 1.8;

/// Host-provided registry locating per-JDK tool binaries.
pub trait ToolchainLookup {
    /// Path to the named tool, or `None` when the registry has no entry.
    fn find_tool(&self, tool: &str) -> Option<PathBuf>;
}

/// Toolchain rooted at an explicit JDK home directory.
#[derive(Debug, Clone)]
pub struct ToolchainDir {
    home: PathBuf,
}

impl ToolchainDir {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }
}

impl ToolchainLookup for ToolchainDir {
    fn find_tool(&self, tool: &str) -> Option<PathBuf> {
        Some(self.home.join("bin").join(tool))
    }
}

/// Operating-system family, as far as tool layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Aix,
    MacOsx,
    Other,
}

impl Platform {
    /// Platform the binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "aix") {
            Self::Aix
        } else if cfg!(target_os = "macos") {
            Self::MacOsx
        } else {
            Self::Other
        }
    }

    fn executable_name(self) -> &'static str {
        match self {
            Self::Windows => "jdeps.exe",
            _ => "jdeps",
        }
    }
}

/// Locates the jdeps executable for one invocation.
///
/// Strategies, in strict priority order, short-circuiting on the first hit:
/// an explicit toolchain, the layout of the runtime installation itself,
/// and finally `JAVA_HOME`.
pub struct JdepsResolver {
    toolchain: Option<Box<dyn ToolchainLookup>>,
    platform: Platform,
    runtime_home: Option<PathBuf>,
    java_version: f32,
    env: Box<dyn Fn(&str) -> Option<String>>,
}

impl JdepsResolver {
    pub fn new() -> Self {
        Self {
            toolchain: None,
            platform: Platform::current(),
            runtime_home: None,
            java_version: DEFAULT_JAVA_VERSION,
            env: Box::new(|name| std::env::var(name).ok()),
        }
    }

    pub fn with_toolchain(mut self, toolchain: Box<dyn ToolchainLookup>) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Installation directory of the Java runtime the build executes on.
    pub fn with_runtime_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.runtime_home = Some(home.into());
        self
    }

    pub fn with_java_version(mut self, version: f32) -> Self {
        self.java_version = version;
        self
    }

    /// Replace the environment reader, mainly for tests.
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Absolute path of an existing jdeps executable.
    pub fn resolve(&self) -> Result<PathBuf> {
        let command = self.platform.executable_name();

        if let Some(toolchain) = &self.toolchain {
            let found = toolchain
                .find_tool("jdeps")
                .filter(|path| !path.as_os_str().is_empty());
            if let Some(path) = found {
                // An explicit toolchain answer is final; no fallback past it.
                return self.verify_toolchain_tool(path, command);
            }
        }

        let candidate = match self.runtime_relative_candidate(command) {
            Some(path) if path.is_file() => path,
            _ => self.java_home_candidate(command)?,
        };

        verify_executable(&candidate)
    }

    fn verify_toolchain_tool(&self, mut path: PathBuf, command: &str) -> Result<PathBuf> {
        if path.is_dir() {
            path.push(command);
        }
        if self.platform == Platform::Windows && extensionless(&path) {
            path.set_extension("exe");
        }
        if !path.is_file() {
            return Err(JdepsError::tool_not_found(format!(
                "The jdeps executable '{}' doesn't exist or is not a file.",
                path.display()
            )));
        }
        Ok(std::path::absolute(&path)?)
    }

    // Where the runtime's own installation keeps the tool. The runtime home
    // usually points at the JRE nested inside the JDK, hence the `..`.
    fn runtime_relative_candidate(&self, command: &str) -> Option<PathBuf> {
        let home = self.runtime_home.as_ref()?;
        let candidate = match self.platform {
            // IBM JDKs on AIX keep shell-launched tools in a sibling sh directory.
            Platform::Aix => home.join("..").join("sh").join(command),
            // Apple JDKs before 1.7 had no nested jre directory.
            Platform::MacOsx if self.java_version < 1.7 => home.join("bin").join(command),
            _ => home.join("..").join("bin").join(command),
        };
        Some(candidate)
    }

    fn java_home_candidate(&self, command: &str) -> Result<PathBuf> {
        let java_home = (self.env)("JAVA_HOME")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                JdepsError::tool_not_found("The environment variable JAVA_HOME is not correctly set.")
            })?;
        let root = PathBuf::from(&java_home);
        let valid = fs::canonicalize(&root)
            .map(|real| real.is_dir())
            .unwrap_or(false);
        if !valid {
            return Err(JdepsError::tool_not_found(format!(
                "The environment variable JAVA_HOME={java_home} doesn't exist or is not a valid directory."
            )));
        }
        Ok(root.join("bin").join(command))
    }
}

impl Default for JdepsResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn extensionless(path: &Path) -> bool {
    path.file_name()
        .map(|name| !name.to_string_lossy().contains('.'))
        .unwrap_or(false)
}

// Symlinks are fine as long as they lead to a regular file.
fn verify_executable(candidate: &Path) -> Result<PathBuf> {
    match fs::canonicalize(candidate) {
        Ok(real) if real.is_file() => Ok(std::path::absolute(candidate)?),
        _ => Err(JdepsError::tool_not_found(format!(
            "The jdeps executable '{}' doesn't exist or is not a file. \
             Verify the JAVA_HOME environment variable.",
            candidate.display()
        ))),
    }
}

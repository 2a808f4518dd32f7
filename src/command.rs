//! Translation of an [`AnalysisConfig`] into the flat jdeps argument list.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{AnalysisConfig, Verbosity};
use crate::errors::Result;
use crate::target::TargetProvider;

#[cfg(windows)]
const CLASSPATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const CLASSPATH_SEPARATOR: &str = ":";

/// A fully-built jdeps invocation: executable plus ordered arguments.
///
/// Building is pure and deterministic; equal inputs yield identical ordered
/// lists. The only failure mode is classpath resolution, which aborts the
/// whole build of the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdepsCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl JdepsCommand {
    pub fn build(
        program: impl Into<PathBuf>,
        config: &AnalysisConfig,
        target: &dyn TargetProvider,
    ) -> Result<Self> {
        let mut command = Self {
            program: program.into(),
            args: Vec::new(),
        };
        command.push_options(config, target)?;
        command.push_classes(target);
        Ok(command)
    }

    fn push_options(
        &mut self,
        config: &AnalysisConfig,
        target: &dyn TargetProvider,
    ) -> Result<()> {
        if let Some(dot_output) = &config.dot_output {
            self.arg("-dotoutput");
            self.arg(dot_output);
        }

        match config.verbose {
            Some(Verbosity::Class) => self.arg("-verbose:class"),
            Some(Verbosity::Package) => self.arg("-verbose:package"),
            Some(Verbosity::Full) => self.arg("-v"),
            None => {}
        }

        self.arg("-cp");
        self.arg(join_classpath(&target.resolved_classpath()?));

        if let Some(include) = &config.include {
            self.arg("-include");
            self.arg(include);
        }

        if config.profile {
            self.arg("-P");
        }

        if config.api_only {
            self.arg("-apionly");
        }

        if config.recursive {
            self.arg("-R");
        }

        // Always have the tool report its own version alongside the analysis.
        self.arg("-version");
        Ok(())
    }

    // The trailing positional argument: a class file, directory, or JAR.
    fn push_classes(&mut self, target: &dyn TargetProvider) {
        self.arg(target.classes_location());
    }

    fn arg(&mut self, value: impl Into<OsString>) {
        self.args.push(value.into());
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for JdepsCommand {
    // Unquoted, space-joined; what the debug log and failure message show.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn join_classpath(entries: &[PathBuf]) -> OsString {
    let mut joined = OsString::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            joined.push(CLASSPATH_SEPARATOR);
        }
        joined.push(entry);
    }
    joined
}

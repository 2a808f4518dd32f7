//! Target abstraction: which classes get analyzed and against which classpath.
//!
//! The host project model supplies both halves. Variants such as "analyze the
//! main classes" and "analyze a test source set" are just different
//! implementations of the same capability.

use std::path::PathBuf;

use crate::errors::Result;

/// Supplies the analysis target and its classpath for one invocation.
pub trait TargetProvider {
    /// Pathname of a class file, directory, or JAR handed to jdeps as the
    /// trailing positional argument.
    fn classes_location(&self) -> PathBuf;

    /// Classpath entries, resolved at invocation time. Fails with
    /// `DependencyResolution` when the host's dependency graph has not been
    /// materialized yet.
    fn resolved_classpath(&self) -> Result<Vec<PathBuf>>;
}

/// Target backed by an already-materialized classpath.
#[derive(Debug, Clone)]
pub struct StaticTarget {
    classes: PathBuf,
    classpath: Vec<PathBuf>,
}

impl StaticTarget {
    pub fn new(classes: impl Into<PathBuf>, classpath: Vec<PathBuf>) -> Self {
        Self {
            classes: classes.into(),
            classpath,
        }
    }
}

impl TargetProvider for StaticTarget {
    fn classes_location(&self) -> PathBuf {
        self.classes.clone()
    }

    fn resolved_classpath(&self) -> Result<Vec<PathBuf>> {
        Ok(self.classpath.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_target_returns_configured_paths() {
        let target = StaticTarget::new(
            "target/classes",
            vec![PathBuf::from("lib/a.jar"), PathBuf::from("lib/b.jar")],
        );
        assert_eq!(target.classes_location(), PathBuf::from("target/classes"));
        assert_eq!(target.resolved_classpath().unwrap().len(), 2);
    }
}

//! Source file references and project-root anchoring.
//!
//! Every declared HDL file is a [`SourceRef`]: a path plus its role in the
//! compile order. Paths are always resolved against a fixed [`ProjectRoot`]
//! anchor computed once at startup (the directory holding the project
//! manifest), never against the process working directory, so the tool
//! behaves identically regardless of where it is invoked from.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BenchError, Result};

/// Role of a source file within a library's compile order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceRole {
    /// A design unit other testbenches depend on; compiled first.
    #[default]
    Dependency,
    /// A verification entry point.
    Testbench,
}

/// One HDL source file declared for a library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRef {
    /// Path relative to the project root (absolute paths pass through).
    pub path: PathBuf,
    /// Compile-order role.
    #[serde(default)]
    pub role: SourceRole,
}

impl SourceRef {
    /// Declares a dependency source.
    pub fn dependency(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            role: SourceRole::Dependency,
        }
    }

    /// Declares a testbench source.
    pub fn testbench(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            role: SourceRole::Testbench,
        }
    }
}

/// Fixed anchor directory all relative source paths resolve against.
///
/// Computed once at orchestration startup and immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Anchors the project at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }

    /// Anchors the project at the directory containing `manifest`.
    ///
    /// A bare file name has no parent component; that means the manifest
    /// sits in the current directory, so the anchor is `"."` made explicit.
    pub fn for_manifest(manifest: &Path) -> Self {
        let dir = manifest.parent().filter(|p| !p.as_os_str().is_empty());
        Self(dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf))
    }

    /// The anchor directory itself.
    pub fn dir(&self) -> &Path {
        &self.0
    }

    /// Resolves a source reference to an on-disk path.
    ///
    /// Fails with [`BenchError::UnresolvedSource`] when the file does not
    /// exist at resolution time; the error carries the fully resolved path
    /// so the offending declaration is identifiable.
    pub fn resolve(&self, source: &SourceRef) -> Result<PathBuf> {
        let path = if source.path.is_absolute() {
            source.path.clone()
        } else {
            self.0.join(&source.path)
        };
        if path.is_file() {
            Ok(path)
        } else {
            Err(BenchError::UnresolvedSource { path })
        }
    }
}

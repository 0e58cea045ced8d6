//! Simulation libraries and the library registry.
//!
//! A [`Library`] names a backend compilation namespace and carries its
//! ordered source manifest (dependencies before dependents — the backend
//! compiles in declaration order). The [`LibraryRegistry`] maps library
//! names to libraries for one orchestration run. It supports any number of
//! libraries even though typical projects declare one.

use crate::error::{BenchError, Result};
use crate::source::SourceRef;

/// A named library and its ordered source manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    sources: Vec<SourceRef>,
}

impl Library {
    fn new(name: String) -> Self {
        Self {
            name,
            sources: Vec::new(),
        }
    }

    /// The library's name in the backend namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends sources in declaration order.
    pub fn add_sources(&mut self, sources: impl IntoIterator<Item = SourceRef>) {
        self.sources.extend(sources);
    }

    /// The ordered source manifest.
    pub fn sources(&self) -> &[SourceRef] {
        &self.sources
    }
}

/// Maps library name to [`Library`] for one orchestration run.
///
/// Iteration follows registration order, never hash order. Built once at
/// startup; there is no cross-run persistence.
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    libraries: Vec<Library>,
}

impl LibraryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new library and returns it for source population.
    ///
    /// Fails with [`BenchError::DuplicateLibrary`] when the name is already
    /// registered, regardless of whether the source lists would differ.
    pub fn register(&mut self, name: impl Into<String>) -> Result<&mut Library> {
        let name = name.into();
        if self.libraries.iter().any(|lib| lib.name == name) {
            return Err(BenchError::DuplicateLibrary { name });
        }
        self.libraries.push(Library::new(name));
        let idx = self.libraries.len() - 1;
        Ok(&mut self.libraries[idx])
    }

    /// Looks up a library by name.
    pub fn get(&self, name: &str) -> Option<&Library> {
        self.libraries.iter().find(|lib| lib.name == name)
    }

    /// Iterates libraries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Library> {
        self.libraries.iter()
    }

    /// Number of registered libraries.
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// True when no library has been registered.
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

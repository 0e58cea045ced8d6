//! Orchestration error taxonomy.
//!
//! All errors here are configuration-time errors: they are detected eagerly,
//! before any simulator invocation, and abort the run. Backend failures
//! (compile errors, assertion failures inside a testbench) are deliberately
//! absent — those travel as [`SimReport`](crate::backend::SimReport) values
//! inside the run summary and are never wrapped or reinterpreted.

use std::path::PathBuf;

/// Fatal configuration error raised before any backend invocation.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A library name was registered twice in the same registry.
    #[error("library '{name}' is already registered")]
    DuplicateLibrary {
        /// The colliding library name.
        name: String,
    },

    /// Two configs under the same testbench share a name.
    ///
    /// Uniqueness is scoped per testbench: the same config name under two
    /// different testbenches is legal.
    #[error("testbench '{testbench}' already has a config named '{name}'")]
    DuplicateConfigName {
        /// Testbench the colliding config belongs to.
        testbench: String,
        /// The colliding config name.
        name: String,
    },

    /// A declared source file does not exist under the project root.
    #[error("source file not found: {}", path.display())]
    UnresolvedSource {
        /// The resolved path that was checked on disk.
        path: PathBuf,
    },

    /// A testbench declaration names a library that was never registered.
    #[error("testbench '{testbench}' references unknown library '{library}'")]
    UnknownLibrary {
        /// The testbench naming the missing library.
        testbench: String,
        /// The library name that is not in the registry.
        library: String,
    },

    /// The project manifest could not be read or parsed.
    #[error("failed to load project manifest {}: {source}", path.display())]
    Manifest {
        /// Path of the manifest that failed to load.
        path: PathBuf,
        /// Underlying I/O or JSON error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

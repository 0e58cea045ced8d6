//! Orchestration entry point.
//!
//! [`BenchRunner`] composes the registry, config sets, and resolved run-mode
//! options, then dispatches the expanded matrix to a [`Simulator`]. It owns
//! no logic beyond composition and two policies:
//! 1. **Eager validation:** every configuration-time error (unknown library,
//!    unresolvable source) is detected at construction, before any backend
//!    invocation. Duplicate libraries and config names cannot reach this
//!    point — they are rejected at declaration.
//! 2. **Continue on failure:** a failing instance never aborts the rest of
//!    the matrix; outcomes are aggregated into a [`RunSummary`].

use std::path::PathBuf;

use tracing::{debug, info};

use crate::backend::{RunSummary, SimJob, Simulator};
use crate::config::ConfigSet;
use crate::error::{BenchError, Result};
use crate::library::LibraryRegistry;
use crate::matrix::{expand, Matrix};
use crate::options::SimOptions;
use crate::source::ProjectRoot;

/// Composed, validated orchestration state for one run.
///
/// Construction is the validation boundary: a `BenchRunner` that exists can
/// be dispatched without further configuration errors.
#[derive(Debug)]
pub struct BenchRunner {
    registry: LibraryRegistry,
    sets: Vec<ConfigSet>,
    options: SimOptions,
    // Resolved source paths per library, in registration order.
    resolved: Vec<(String, Vec<PathBuf>)>,
}

impl BenchRunner {
    /// Composes and eagerly validates an orchestration run.
    ///
    /// Fails with [`BenchError::UnknownLibrary`] when a config set names an
    /// unregistered library and with [`BenchError::UnresolvedSource`] when a
    /// declared source file does not exist under the project root. On
    /// success all source paths are pre-resolved for dispatch.
    pub fn new(
        root: &ProjectRoot,
        registry: LibraryRegistry,
        sets: Vec<ConfigSet>,
        options: SimOptions,
    ) -> Result<Self> {
        for set in &sets {
            if registry.get(set.library()).is_none() {
                return Err(BenchError::UnknownLibrary {
                    testbench: set.testbench().to_owned(),
                    library: set.library().to_owned(),
                });
            }
        }

        let mut resolved = Vec::with_capacity(registry.len());
        for library in registry.iter() {
            let mut paths = Vec::with_capacity(library.sources().len());
            for source in library.sources() {
                let path = root.resolve(source)?;
                debug!(library = library.name(), path = %path.display(), "resolved source");
                paths.push(path);
            }
            resolved.push((library.name().to_owned(), paths));
        }

        Ok(Self {
            registry,
            sets,
            options,
            resolved,
        })
    }

    /// The validated library registry.
    pub fn registry(&self) -> &LibraryRegistry {
        &self.registry
    }

    /// The resolved global option set.
    pub fn options(&self) -> &SimOptions {
        &self.options
    }

    /// The expanded matrix in dispatch order.
    pub fn instances(&self) -> Matrix<'_> {
        expand(&self.sets)
    }

    /// Dispatches every instance to the backend and aggregates the verdicts.
    ///
    /// Instances run in matrix order. Backend failures are recorded and the
    /// remaining matrix keeps running.
    pub fn run(&self, simulator: &mut dyn Simulator) -> RunSummary {
        let mut summary = RunSummary::default();
        for instance in self.instances() {
            let sources = self
                .resolved
                .iter()
                .find_map(|(name, paths)| (name == &instance.library).then_some(paths.as_slice()))
                // Validated at construction: every set's library is registered.
                .unwrap_or(&[]);

            let job = SimJob {
                library: &instance.library,
                sources,
                testbench: &instance.testbench,
                config: &instance.config,
                generics: &instance.generics,
                options: &self.options,
            };
            let report = simulator.run(&job);
            info!(test = %instance, passed = report.passed, "instance finished");
            summary.record(instance, report);
        }
        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            "run complete"
        );
        summary
    }
}

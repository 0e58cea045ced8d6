//! Declarative project manifest.
//!
//! A project is described by a JSON manifest: libraries with their ordered
//! sources, testbenches with named configs and/or positional sweeps, GUI
//! options, and the backend command. [`Project::load`] parses the manifest
//! and anchors the project root at the manifest's directory, so runs behave
//! the same from any working directory.
//!
//! ```json
//! {
//!   "libraries": [
//!     { "name": "src_lib",
//!       "sources": [
//!         { "path": "src/utils_pkg.vhd" },
//!         { "path": "tb/alu_tb.vhd", "role": "testbench" } ] } ],
//!   "testbenches": [
//!     { "name": "alu_tb", "library": "src_lib",
//!       "sweeps": [ { "data_width_g": 8 }, { "data_width_g": 16 } ] } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigSet;
use crate::error::{BenchError, Result};
use crate::library::LibraryRegistry;
use crate::options::{resolve, GuiOptions, RunMode};
use crate::params::ParameterBinding;
use crate::runner::BenchRunner;
use crate::source::{ProjectRoot, SourceRef};

/// One library declaration.
#[derive(Debug, Deserialize)]
pub struct LibraryDecl {
    /// Library name in the backend namespace.
    pub name: String,
    /// Ordered sources, dependencies before dependents.
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

/// One explicitly named config declaration.
#[derive(Debug, Deserialize)]
pub struct ConfigDecl {
    /// Config name, unique within its testbench.
    pub name: String,
    /// Generic overrides; empty means backend defaults.
    #[serde(default)]
    pub generics: ParameterBinding,
}

/// One testbench declaration with its configurations.
///
/// `configs` carries explicit names; `sweeps` is a bare list of generic
/// maps that gets auto-named positionally after the explicit configs. Both
/// go through the same uniqueness check.
#[derive(Debug, Deserialize)]
pub struct TestbenchDecl {
    /// Testbench entry point name.
    pub name: String,
    /// Library the testbench is compiled into.
    pub library: String,
    /// Explicitly named configs.
    #[serde(default)]
    pub configs: Vec<ConfigDecl>,
    /// Positional sweep of generic maps, auto-named `config0`, `config1`, ...
    #[serde(default)]
    pub sweeps: Vec<ParameterBinding>,
}

/// Backend executable declaration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulatorDecl {
    /// Command the CLI invokes per test instance.
    pub command: String,
}

impl Default for SimulatorDecl {
    fn default() -> Self {
        Self {
            command: "vsim".to_owned(),
        }
    }
}

/// Raw manifest contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectFile {
    libraries: Vec<LibraryDecl>,
    testbenches: Vec<TestbenchDecl>,
    gui: GuiOptions,
    simulator: SimulatorDecl,
}

/// A parsed project manifest, anchored at its own directory.
#[derive(Debug)]
pub struct Project {
    root: ProjectRoot,
    file: ProjectFile,
}

impl Project {
    /// Loads and parses a manifest file.
    ///
    /// The project root is anchored at the manifest's parent directory.
    /// I/O and JSON errors surface as [`BenchError::Manifest`] with the
    /// manifest path.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = |source: Box<dyn std::error::Error + Send + Sync>| BenchError::Manifest {
            path: path.to_path_buf(),
            source,
        };
        let text = fs::read_to_string(path).map_err(|e| manifest(Box::new(e)))?;
        let file: ProjectFile =
            serde_json::from_str(&text).map_err(|e| manifest(Box::new(e)))?;
        Ok(Self {
            root: ProjectRoot::for_manifest(path),
            file,
        })
    }

    /// The anchor directory source paths resolve against.
    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    /// The declared backend command.
    pub fn simulator_command(&self) -> &str {
        &self.file.simulator.command
    }

    /// Builds the validated runner for the given mode.
    ///
    /// Declaration errors (duplicate library, duplicate config name,
    /// unknown library, unresolvable source) all surface here, before any
    /// backend work.
    pub fn into_runner(self, mode: RunMode) -> Result<BenchRunner> {
        let mut registry = LibraryRegistry::new();
        for decl in self.file.libraries {
            registry.register(decl.name)?.add_sources(decl.sources);
        }

        let mut sets = Vec::with_capacity(self.file.testbenches.len());
        for tb in self.file.testbenches {
            let mut set = ConfigSet::with_named(
                tb.library,
                tb.name,
                tb.configs.into_iter().map(|c| (c.name, c.generics)),
            )?;
            set.push_auto_named(tb.sweeps)?;
            sets.push(set);
        }

        let options = resolve(mode, &self.file.gui);
        BenchRunner::new(&self.root, registry, sets, options)
    }
}

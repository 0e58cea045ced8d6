//! Named test configurations for a single testbench.
//!
//! A [`ConfigSet`] is the ordered list of [`TestConfig`]s attached to one
//! testbench entry point. Configs can be named explicitly or auto-named
//! positionally (`config0`, `config1`, ...); both paths funnel through the
//! same uniqueness-checked accumulator, so a name collision is rejected
//! identically in either case instead of silently overwriting.

use crate::error::{BenchError, Result};
use crate::params::ParameterBinding;

/// One named set of generic bindings to run a testbench under.
#[derive(Debug, Clone, PartialEq)]
pub struct TestConfig {
    /// Config name, unique within its [`ConfigSet`].
    pub name: String,
    /// Generic/parameter overrides for this run.
    pub generics: ParameterBinding,
}

impl TestConfig {
    /// Creates a config with an explicit name.
    pub fn new(name: impl Into<String>, generics: ParameterBinding) -> Self {
        Self {
            name: name.into(),
            generics,
        }
    }
}

/// Ordered configs for exactly one testbench.
///
/// Immutable once built (construction is the only mutation path); consumed
/// by the matrix builder. An empty set is legal, not an error: it simply
/// contributes zero instances to the matrix and the testbench falls back to
/// backend defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSet {
    library: String,
    testbench: String,
    configs: Vec<TestConfig>,
}

impl ConfigSet {
    /// Creates an empty set for `testbench`, an entry point in `library`.
    pub fn new(library: impl Into<String>, testbench: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            testbench: testbench.into(),
            configs: Vec::new(),
        }
    }

    /// Builds a set from explicitly named `(name, generics)` pairs.
    ///
    /// Pairs are accumulated in declaration order; a duplicate name fails
    /// with [`BenchError::DuplicateConfigName`].
    pub fn with_named<N>(
        library: impl Into<String>,
        testbench: impl Into<String>,
        pairs: impl IntoIterator<Item = (N, ParameterBinding)>,
    ) -> Result<Self>
    where
        N: Into<String>,
    {
        let mut set = Self::new(library, testbench);
        for (name, generics) in pairs {
            set.push(TestConfig::new(name, generics))?;
        }
        Ok(set)
    }

    /// Builds a set from bare bindings, auto-naming them positionally.
    ///
    /// The generated names are `config0`, `config1`, ... in declaration
    /// order. Goes through the same checked accumulator as explicit names.
    pub fn with_auto_named(
        library: impl Into<String>,
        testbench: impl Into<String>,
        bindings: impl IntoIterator<Item = ParameterBinding>,
    ) -> Result<Self> {
        let mut set = Self::new(library, testbench);
        set.push_auto_named(bindings)?;
        Ok(set)
    }

    /// Appends one config, rejecting a name already present in this set.
    ///
    /// Uniqueness is scoped to this set (per testbench, not global).
    pub fn push(&mut self, config: TestConfig) -> Result<()> {
        if self.configs.iter().any(|c| c.name == config.name) {
            return Err(BenchError::DuplicateConfigName {
                testbench: self.testbench.clone(),
                name: config.name,
            });
        }
        self.configs.push(config);
        Ok(())
    }

    /// Appends auto-named configs, continuing the positional counter.
    ///
    /// Numbering starts at the current set length, so mixing explicit names
    /// with a later sweep still yields gap-free `configN` names — and still
    /// collides loudly if an explicit `configN` is already taken.
    pub fn push_auto_named(
        &mut self,
        bindings: impl IntoIterator<Item = ParameterBinding>,
    ) -> Result<()> {
        for generics in bindings {
            let name = format!("config{}", self.configs.len());
            self.push(TestConfig::new(name, generics))?;
        }
        Ok(())
    }

    /// Library holding this set's testbench.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// The testbench entry point this set belongs to.
    pub fn testbench(&self) -> &str {
        &self.testbench
    }

    /// Configs in declaration order.
    pub fn configs(&self) -> &[TestConfig] {
        &self.configs
    }

    /// Number of configs in the set.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// True when the set holds no configs.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

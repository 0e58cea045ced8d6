//! Test matrix expansion.
//!
//! [`expand`] turns declared [`ConfigSet`]s into the ordered sequence of
//! runnable [`TestInstance`]s: for each testbench in declaration order, for
//! each config in declaration order, one instance. The expansion is a pure
//! function of its inputs — no hidden counters — so re-invoking it yields
//! the identical sequence. Determinism is a hard invariant: CI logs and
//! reports are order-sensitive for humans diffing runs.

use std::fmt;

use crate::config::ConfigSet;
use crate::params::ParameterBinding;

/// One runnable testbench instantiation, the unit dispatched to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TestInstance {
    /// Library holding the testbench.
    pub library: String,
    /// Testbench entry point.
    pub testbench: String,
    /// Config name, unique within the testbench.
    pub config: String,
    /// Resolved generic bindings for this run.
    pub generics: ParameterBinding,
}

impl fmt::Display for TestInstance {
    /// Formats the instance's full test name, `library.testbench.config`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.library, self.testbench, self.config)
    }
}

/// Lazy iterator over the expanded test matrix.
///
/// Finite (bounded by the total config count) and restartable: a fresh
/// [`expand`] over the same sets walks the same sequence.
#[derive(Debug, Clone)]
pub struct Matrix<'a> {
    sets: &'a [ConfigSet],
    set_idx: usize,
    config_idx: usize,
}

impl Iterator for Matrix<'_> {
    type Item = TestInstance;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let set = self.sets.get(self.set_idx)?;
            match set.configs().get(self.config_idx) {
                Some(config) => {
                    self.config_idx += 1;
                    return Some(TestInstance {
                        library: set.library().to_owned(),
                        testbench: set.testbench().to_owned(),
                        config: config.name.clone(),
                        generics: config.generics.clone(),
                    });
                }
                // Empty or exhausted set: contributes nothing, move on.
                None => {
                    self.set_idx += 1;
                    self.config_idx = 0;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self
            .sets
            .iter()
            .skip(self.set_idx)
            .map(ConfigSet::len)
            .sum::<usize>()
            .saturating_sub(self.config_idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Matrix<'_> {}

/// Expands config sets into the ordered test matrix.
pub fn expand(sets: &[ConfigSet]) -> Matrix<'_> {
    Matrix {
        sets,
        set_idx: 0,
        config_idx: 0,
    }
}

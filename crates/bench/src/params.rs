//! Generic/parameter bindings passed to a testbench.
//!
//! A [`ParameterBinding`] maps parameter names to values the backend's
//! generic system accepts. It preserves insertion order: order shows up in
//! display and log naming, and a hash map would leak nondeterministic
//! ordering into CI output. Key validity against the testbench's declared
//! generics is delegated to the backend.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// A single generic/parameter value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean generic.
    Bool(bool),
    /// Integer generic.
    Int(i64),
    /// String generic.
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Insertion-ordered map from parameter name to value.
///
/// Backed by a `Vec` rather than a hash map: binding sets are small (a
/// handful of generics per config) and iteration order must equal insertion
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterBinding {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterBinding {
    /// Creates an empty binding (testbench runs on backend defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing an existing value in place.
    ///
    /// Replacement keeps the key's original position so re-assignment does
    /// not reorder log names.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ParameterBinding {
    /// Renders as `name=value` pairs in insertion order, comma separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for ParameterBinding {
    /// Deserializes from a JSON object, keeping document key order.
    ///
    /// The map is visited entry by entry, so declaration order survives
    /// without any `preserve_order` feature on the JSON crate.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BindingVisitor;

        impl<'de> Visitor<'de> for BindingVisitor {
            type Value = ParameterBinding;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of generic names to values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut binding = ParameterBinding::new();
                while let Some((name, value)) = access.next_entry::<String, ParamValue>()? {
                    binding.set(name, value);
                }
                Ok(binding)
            }
        }

        deserializer.deserialize_map(BindingVisitor)
    }
}

//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::system()`] which reads the real process
//! environment. Tests use [`Env::fixed()`] backed by explicit pairs, so
//! no test ever needs `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` that reads from the real process environment.
    pub fn system() -> Self {
        Self { fixed: None }
    }

    /// An `Env` backed by explicit key-value pairs. Lookups of anything
    /// not in `vars` report absence.
    pub fn fixed(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<String> {
        match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }
}

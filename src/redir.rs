use crate::err::DecodeError;
use serde::Deserialize;
use std::collections::HashMap;

/// One path-to-URL mapping, as it appears in a routes document.
///
/// Missing keys decode as empty strings rather than failing; an empty
/// path is a legal table key that no real request ever matches.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: String,
}

/// Immutable path-to-URL table. Built once at startup; read-only
/// afterward, so request tasks share it without synchronization.
#[derive(Debug, Default)]
pub struct Table(HashMap<String, String>);

impl Table {
    /// Folds routes into a table. Later routes overwrite earlier ones
    /// with the same path.
    pub fn build(routes: impl IntoIterator<Item = Route>) -> Self {
        Self(routes.into_iter().map(|r| (r.path, r.url)).collect())
    }

    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }
}

/// Decodes a YAML sequence of `path`/`url` mappings, in document order.
pub fn decode_yaml(bytes: &[u8]) -> Result<Vec<Route>, DecodeError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Decodes a JSON array of objects with `path`/`url` fields, in
/// document order.
pub fn decode_json(bytes: &[u8]) -> Result<Vec<Route>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

//! Kubernetes object wrappers for linting.

use crate::analyzer::kubelint::context::error::LoadError;
use crate::common::stringutils::{or_fallback, pointer_or_fallback};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Shown in place of a path for sources that were not read from a file.
pub const STDIN_PATH: &str = "<stdin>";

/// Metadata about where a manifest came from.
///
/// Immutable once built; the builder methods consume `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    file_path: PathBuf,
    raw: Vec<u8>,
    line_number: Option<u32>,
}

impl ObjectMetadata {
    /// Create metadata from a path and the manifest's raw bytes.
    pub fn new(path: impl Into<PathBuf>, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            file_path: path.into(),
            raw: raw.into(),
            line_number: None,
        }
    }

    /// Create metadata for an object from a file, with no raw content yet.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Vec::new())
    }

    /// Set the raw content.
    pub fn with_raw(mut self, raw: impl Into<Vec<u8>>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Set the line number (1-indexed) where the manifest starts.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    /// The source file path. Empty when the source was not file-backed.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The original serialized bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Line in the source file where this manifest starts.
    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    /// Whether the source was read from a file.
    pub fn is_file_backed(&self) -> bool {
        !self.file_path.as_os_str().is_empty()
    }

    /// Path suitable for display, `<stdin>` for non-file sources.
    pub fn display_path(&self) -> String {
        let path = self.file_path.to_string_lossy();
        or_fallback(&path, STDIN_PATH).to_string()
    }
}

/// A decoded Kubernetes resource.
///
/// The lint context treats this as opaque; rules downstream use the
/// accessors to identify what they are looking at.
pub trait K8sResource: fmt::Debug + Send + Sync {
    /// The `apiVersion` of the resource.
    fn api_version(&self) -> &str;

    /// The `kind` of the resource.
    fn kind(&self) -> &str;

    /// `metadata.name`, empty when unset.
    fn name(&self) -> &str;

    /// `metadata.namespace`, if any.
    fn namespace(&self) -> Option<&str>;

    /// `metadata.labels`, if any.
    fn labels(&self) -> Option<&BTreeMap<String, String>> {
        None
    }

    /// `metadata.annotations`, if any.
    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        None
    }
}

/// A resource of any kind, kept as its parsed YAML tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericObject {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
    pub annotations: Option<BTreeMap<String, String>>,
    pub raw: serde_yaml::Value,
}

impl GenericObject {
    /// Decode a parsed YAML document.
    ///
    /// Fails when the document is not a mapping or lacks `apiVersion`/`kind`.
    pub fn from_value(value: serde_yaml::Value) -> Result<Self, LoadError> {
        if !value.is_mapping() {
            return Err(LoadError::NotAMapping);
        }
        let api_version = required_string(&value, "apiVersion")?;
        let kind = required_string(&value, "kind")?;

        let metadata = value.get("metadata");
        let name = metadata
            .and_then(|m| get_string(m, "name"))
            .unwrap_or_default();
        let namespace = metadata.and_then(|m| get_string(m, "namespace"));
        let labels = metadata.and_then(|m| get_string_map(m, "labels"));
        let annotations = metadata.and_then(|m| get_string_map(m, "annotations"));

        Ok(Self {
            api_version,
            kind,
            name,
            namespace,
            labels,
            annotations,
            raw: value,
        })
    }
}

impl K8sResource for GenericObject {
    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        self.annotations.as_ref()
    }
}

fn required_string(value: &serde_yaml::Value, key: &'static str) -> Result<String, LoadError> {
    match value.get(key) {
        None | Some(serde_yaml::Value::Null) => Err(LoadError::MissingField(key)),
        Some(field) => field
            .as_str()
            .map(|s| s.to_string())
            .ok_or(LoadError::NotAString(key)),
    }
}

fn get_string(value: &serde_yaml::Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(|s| s.to_string())
}

fn get_string_map(value: &serde_yaml::Value, key: &str) -> Option<BTreeMap<String, String>> {
    let mapping = value.get(key)?.as_mapping()?;
    let map: BTreeMap<String, String> = mapping
        .iter()
        .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
        .collect();
    if map.is_empty() { None } else { Some(map) }
}

/// A parsed Kubernetes object ready for linting.
#[derive(Debug)]
pub struct Object {
    /// Metadata about where this object came from.
    pub metadata: ObjectMetadata,
    /// The decoded resource.
    pub k8s_object: Box<dyn K8sResource>,
}

impl Object {
    /// Create a new object.
    pub fn new(metadata: ObjectMetadata, k8s_object: impl K8sResource + 'static) -> Self {
        Self {
            metadata,
            k8s_object: Box::new(k8s_object),
        }
    }

    /// Get the object's kind.
    pub fn kind(&self) -> &str {
        self.k8s_object.kind()
    }

    /// Get the object's name.
    pub fn name(&self) -> &str {
        self.k8s_object.name()
    }

    /// Get the object's namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.k8s_object.namespace()
    }

    /// Human-readable identifier, e.g. `default/web (Deployment)`.
    pub fn display_name(&self) -> String {
        format!(
            "{}/{} ({})",
            pointer_or_fallback(self.namespace(), "<no namespace>"),
            or_fallback(self.name(), "<unnamed>"),
            or_fallback(self.kind(), "<unknown kind>"),
        )
    }
}

/// An object that failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidObject {
    /// Metadata about where this object came from.
    pub metadata: ObjectMetadata,
    /// The error that occurred during loading.
    pub load_err: LoadError,
}

impl InvalidObject {
    /// Create a new invalid object record.
    pub fn new(metadata: ObjectMetadata, error: impl Into<LoadError>) -> Self {
        Self {
            metadata,
            load_err: error.into(),
        }
    }
}

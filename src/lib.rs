//! # kubelint-context
//!
//! The lint context of a Kubernetes manifest linter: it collects the
//! resources a load pass decoded and, separately, the ones that failed, so
//! rule evaluation can run over what loaded while diagnostics are still
//! reported for what didn't.
//!
//! ## Example
//!
//! ```rust
//! use kubelint_context::{
//!     GenericObject, InvalidObject, LintContext, LintContextImpl, LoadError, Object,
//!     ObjectMetadata,
//! };
//!
//! # fn main() -> Result<(), LoadError> {
//! let mut ctx = LintContextImpl::new();
//!
//! let value = serde_yaml::from_str("apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\n")?;
//! ctx.add_object(Object::new(
//!     ObjectMetadata::from_file("a.yaml"),
//!     GenericObject::from_value(value)?,
//! ));
//! ctx.add_invalid_object(InvalidObject::new(
//!     ObjectMetadata::from_file("b.yaml"),
//!     LoadError::other("malformed YAML"),
//! ));
//!
//! assert_eq!(ctx.objects()[0].name(), "web");
//! assert_eq!(ctx.invalid_objects()[0].load_err.to_string(), "malformed YAML");
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod common;

// Re-export commonly used types and functions
pub use analyzer::kubelint::{
    ConfigError, GenericObject, InvalidObject, K8sResource, LintContext, LintContextImpl,
    LoadError, LoadOutcome, LoaderConfig, Object, ObjectMetadata, SharedLintContext, Source,
    load_source, load_sources, load_sources_parallel,
};
pub use common::stringutils::{or_fallback, pointer_or_fallback};

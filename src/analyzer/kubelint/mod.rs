//! KubeLint lint context: the in-memory aggregation point of a Kubernetes
//! manifest linter.
//!
//! # Attribution
//!
//! This module is a derivative work based on [kube-linter](https://github.com/stackrox/kube-linter),
//! originally written in Go by StackRox (Red Hat).
//!
//! **Original Project:** <https://github.com/stackrox/kube-linter>
//! **Original License:** Apache-2.0
//! **Original Copyright:** Copyright (c) StackRox, Inc.
//!
//! # Overview
//!
//! A load pass appends one entry per manifest document to a
//! [`LintContextImpl`]: an [`Object`] when the document decoded, an
//! [`InvalidObject`] when it did not. Rule drivers then read both
//! collections through the [`LintContext`] trait.
//!
//! # Example
//!
//! ```rust
//! use kubelint_context::analyzer::kubelint::{
//!     LintContext, LoaderConfig, Source, load_sources,
//! };
//!
//! let sources = vec![
//!     Source::new("a.yaml", "apiVersion: v1\nkind: Pod\nmetadata:\n  name: web\n"),
//!     Source::new("b.yaml", "kind: [\n"),
//! ];
//! let ctx = load_sources(&sources, &LoaderConfig::default());
//!
//! assert_eq!(ctx.objects().len(), 1);
//! assert_eq!(ctx.invalid_objects().len(), 1);
//! ```

pub mod config;
pub mod context;
pub mod loader;

// Re-export main types and functions
pub use config::{ConfigError, LoaderConfig};
pub use context::{
    GenericObject, InvalidObject, K8sResource, LintContext, LintContextImpl, LoadError,
    LoadOutcome, Object, ObjectMetadata, SharedLintContext,
};
pub use loader::{Source, load_source, load_sources, load_sources_parallel};

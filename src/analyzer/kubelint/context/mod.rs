//! Lint context for Kubernetes objects.
//!
//! The lint context holds every manifest a load pass attempted: those that
//! decoded into objects and those that failed. Entries are appended one at
//! a time and never removed or reordered.

pub mod error;
pub mod object;

pub use error::LoadError;
pub use object::{GenericObject, InvalidObject, K8sResource, Object, ObjectMetadata};

use parking_lot::Mutex;

/// A lint context provides access to all loaded Kubernetes objects.
pub trait LintContext: Send + Sync {
    /// Get all valid parsed objects.
    fn objects(&self) -> &[Object];

    /// Get all objects that failed to load.
    fn invalid_objects(&self) -> &[InvalidObject];
}

/// The result of one load attempt: exactly one of the two outcomes.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Object),
    Invalid(InvalidObject),
}

impl From<Object> for LoadOutcome {
    fn from(object: Object) -> Self {
        Self::Loaded(object)
    }
}

impl From<InvalidObject> for LoadOutcome {
    fn from(invalid: InvalidObject) -> Self {
        Self::Invalid(invalid)
    }
}

/// Default implementation of LintContext.
#[derive(Debug, Default)]
pub struct LintContextImpl {
    objects: Vec<Object>,
    invalid_objects: Vec<InvalidObject>,
}

impl LintContextImpl {
    /// Create a new empty lint context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a valid object to the context.
    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Add an invalid object to the context.
    pub fn add_invalid_object(&mut self, invalid: InvalidObject) {
        self.invalid_objects.push(invalid);
    }

    /// Record the outcome of a single load attempt.
    pub fn add(&mut self, outcome: impl Into<LoadOutcome>) {
        match outcome.into() {
            LoadOutcome::Loaded(object) => self.add_object(object),
            LoadOutcome::Invalid(invalid) => self.add_invalid_object(invalid),
        }
    }

    /// Total number of entries, valid and invalid.
    pub fn len(&self) -> usize {
        self.objects.len() + self.invalid_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LintContext for LintContextImpl {
    fn objects(&self) -> &[Object] {
        &self.objects
    }

    fn invalid_objects(&self) -> &[InvalidObject] {
        &self.invalid_objects
    }
}

impl Extend<LoadOutcome> for LintContextImpl {
    fn extend<I: IntoIterator<Item = LoadOutcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.add(outcome);
        }
    }
}

/// A lint context that several threads can append to.
///
/// Appends are serialized by a mutex. Call [`SharedLintContext::into_inner`]
/// once population is done to read the result without locking.
#[derive(Debug, Default)]
pub struct SharedLintContext {
    inner: Mutex<LintContextImpl>,
}

impl SharedLintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a valid object to the context.
    pub fn add_object(&self, object: Object) {
        self.inner.lock().add_object(object);
    }

    /// Add an invalid object to the context.
    pub fn add_invalid_object(&self, invalid: InvalidObject) {
        self.inner.lock().add_invalid_object(invalid);
    }

    /// Record the outcome of a single load attempt.
    pub fn add(&self, outcome: impl Into<LoadOutcome>) {
        self.inner.lock().add(outcome);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the write phase and hand back the plain context.
    pub fn into_inner(self) -> LintContextImpl {
        self.inner.into_inner()
    }
}

impl From<LintContextImpl> for SharedLintContext {
    fn from(ctx: LintContextImpl) -> Self {
        Self {
            inner: Mutex::new(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;
    use std::thread;

    fn object(path: &str, name: &str) -> Object {
        let value: serde_yaml::Value = serde_yaml::from_str(&format!(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: {name}\n"
        ))
        .unwrap();
        Object::new(
            ObjectMetadata::from_file(path),
            GenericObject::from_value(value).unwrap(),
        )
    }

    fn invalid(path: &str, msg: &str) -> InvalidObject {
        InvalidObject::new(ObjectMetadata::from_file(path), LoadError::other(msg))
    }

    #[test]
    fn test_new_context_is_empty() {
        let ctx = LintContextImpl::new();
        assert!(ctx.objects().is_empty());
        assert!(ctx.invalid_objects().is_empty());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_valid_and_invalid_are_kept_apart() {
        let mut ctx = LintContextImpl::new();
        ctx.add_object(object("a.yaml", "a"));
        ctx.add_invalid_object(invalid("b.yaml", "malformed YAML"));

        assert_eq!(ctx.objects().len(), 1);
        assert_eq!(ctx.objects()[0].metadata.file_path(), Path::new("a.yaml"));
        assert_eq!(ctx.invalid_objects().len(), 1);
        assert_eq!(
            ctx.invalid_objects()[0].metadata.file_path(),
            Path::new("b.yaml")
        );
        assert_eq!(ctx.invalid_objects()[0].load_err.to_string(), "malformed YAML");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ctx = LintContextImpl::new();
        ctx.add(object("1.yaml", "one"));
        ctx.add(invalid("2.yaml", "bad"));
        ctx.add(object("3.yaml", "three"));
        ctx.add(invalid("4.yaml", "worse"));

        let names: Vec<_> = ctx.objects().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["one", "three"]);
        let errors: Vec<_> = ctx
            .invalid_objects()
            .iter()
            .map(|o| o.load_err.to_string())
            .collect();
        assert_eq!(errors, vec!["bad", "worse"]);
        assert_eq!(ctx.len(), 4);
    }

    #[test]
    fn test_extend_with_outcomes() {
        let mut ctx = LintContextImpl::new();
        ctx.extend(vec![
            LoadOutcome::from(object("a.yaml", "a")),
            LoadOutcome::from(invalid("b.yaml", "oops")),
        ]);
        assert_eq!(ctx.objects().len(), 1);
        assert_eq!(ctx.invalid_objects().len(), 1);
    }

    #[test]
    fn test_trait_object_access() {
        let mut ctx = LintContextImpl::new();
        ctx.add_object(object("a.yaml", "a"));
        let dyn_ctx: &dyn LintContext = &ctx;
        assert_eq!(dyn_ctx.objects()[0].name(), "a");
    }

    #[test]
    fn test_shared_context_from_threads() {
        let shared = Arc::new(SharedLintContext::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..10 {
                        let path = format!("{t}-{i}.yaml");
                        match i % 4 {
                            0 => shared.add_object(object(&path, "pod")),
                            1 => shared.add_invalid_object(invalid(&path, "bad")),
                            2 => shared.add(LoadOutcome::Loaded(object(&path, "pod"))),
                            _ => shared.add(LoadOutcome::Invalid(invalid(&path, "bad"))),
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 40);
        let ctx = Arc::try_unwrap(shared).unwrap().into_inner();
        assert_eq!(ctx.len(), 40);
        assert_eq!(ctx.objects().len(), 20);
        assert_eq!(ctx.invalid_objects().len(), 20);
    }

    #[test]
    fn test_shared_context_keeps_seeded_entries() {
        let mut seed = LintContextImpl::new();
        seed.add_object(object("seed.yaml", "seed"));
        seed.add_invalid_object(invalid("seed-bad.yaml", "broken"));

        let shared = SharedLintContext::from(seed);
        assert!(!shared.is_empty());
        shared.add(object("later.yaml", "later"));
        shared.add(invalid("later-bad.yaml", "worse"));

        let ctx = shared.into_inner();
        let names: Vec<_> = ctx.objects().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["seed", "later"]);
        let errors: Vec<_> = ctx
            .invalid_objects()
            .iter()
            .map(|o| o.load_err.to_string())
            .collect();
        assert_eq!(errors, vec!["broken", "worse"]);
    }
}

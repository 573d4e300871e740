//! Populating a lint context from in-memory manifest sources.
//!
//! Each YAML document in a source becomes exactly one context entry: an
//! [`Object`] when it decodes, an [`InvalidObject`] when it does not. A bad
//! document never stops the rest of the source from loading.
//!
//! Reading files is left to the caller; this module only sees bytes.

use crate::analyzer::kubelint::config::LoaderConfig;
use crate::analyzer::kubelint::context::{
    GenericObject, InvalidObject, LintContextImpl, LoadError, LoadOutcome, Object, ObjectMetadata,
};
use log::{debug, warn};
use rayon::prelude::*;
use std::path::PathBuf;

/// A manifest source: where it came from and its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file_path: PathBuf,
    pub raw: Vec<u8>,
}

impl Source {
    pub fn new(file_path: impl Into<PathBuf>, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            file_path: file_path.into(),
            raw: raw.into(),
        }
    }

    /// A source that was not read from a file.
    pub fn from_stdin(raw: impl Into<Vec<u8>>) -> Self {
        Self::new(PathBuf::new(), raw)
    }
}

/// Load every document of `source` into `ctx`.
///
/// Returns the number of entries appended.
pub fn load_source(ctx: &mut LintContextImpl, source: &Source, config: &LoaderConfig) -> usize {
    let outcomes = decode_source(source, config);
    let appended = outcomes.len();
    ctx.extend(outcomes);
    appended
}

/// Build a context from `sources`, one after another.
pub fn load_sources<'a>(
    sources: impl IntoIterator<Item = &'a Source>,
    config: &LoaderConfig,
) -> LintContextImpl {
    let mut ctx = LintContextImpl::new();
    for source in sources {
        load_source(&mut ctx, source, config);
    }
    ctx
}

/// Build a context from `sources`, decoding them in parallel.
///
/// Entries end up in the same order [`load_sources`] would produce: sources
/// are decoded on the rayon pool, then appended by a single writer.
pub fn load_sources_parallel(sources: &[Source], config: &LoaderConfig) -> LintContextImpl {
    let decoded: Vec<Vec<LoadOutcome>> = sources
        .par_iter()
        .map(|source| decode_source(source, config))
        .collect();

    let mut ctx = LintContextImpl::new();
    ctx.extend(decoded.into_iter().flatten());
    ctx
}

fn decode_source(source: &Source, config: &LoaderConfig) -> Vec<LoadOutcome> {
    let content = match std::str::from_utf8(&source.raw) {
        Ok(content) => content,
        Err(err) => {
            let metadata = ObjectMetadata::new(&source.file_path, source.raw.clone());
            warn!("{}: {}", metadata.display_path(), err);
            return vec![InvalidObject::new(metadata, err).into()];
        }
    };

    split_documents(content)
        .into_iter()
        .filter_map(|doc| decode_document(source, &doc, config))
        .collect()
}

fn decode_document(
    source: &Source,
    doc: &Document<'_>,
    config: &LoaderConfig,
) -> Option<LoadOutcome> {
    let metadata = ObjectMetadata::new(&source.file_path, doc.text.as_bytes()).with_line(doc.line);

    if is_blank(doc.text) {
        if config.skip_empty_documents {
            return None;
        }
        warn!("{}:{}: empty document", metadata.display_path(), doc.line);
        return Some(InvalidObject::new(metadata, LoadError::EmptyDocument).into());
    }

    match decode_resource(doc.text, config) {
        Ok(resource) => {
            debug!(
                "{}:{}: loaded {} {:?}",
                metadata.display_path(),
                doc.line,
                resource.kind,
                resource.name
            );
            Some(Object::new(metadata, resource).into())
        }
        Err(err) => {
            warn!("{}:{}: {}", metadata.display_path(), doc.line, err);
            Some(InvalidObject::new(metadata, err).into())
        }
    }
}

fn decode_resource(text: &str, config: &LoaderConfig) -> Result<GenericObject, LoadError> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    let resource = GenericObject::from_value(value)?;
    if config.require_name && resource.name.is_empty() {
        return Err(LoadError::MissingField("metadata.name"));
    }
    Ok(resource)
}

/// One YAML document and the 1-indexed line it starts on.
struct Document<'a> {
    text: &'a str,
    line: u32,
}

fn split_documents(content: &str) -> Vec<Document<'_>> {
    let mut docs = Vec::new();
    let mut start = 0;
    let mut start_line = 1;
    let mut offset = 0;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        if let Some(inline) = separator(line) {
            if offset > start {
                docs.push(Document {
                    text: &content[start..offset],
                    line: start_line,
                });
            }
            if inline {
                // `--- {kind: Pod}`: the document starts right after the marker.
                start = offset + 3;
                start_line = idx as u32 + 1;
            } else {
                start = offset + line.len();
                start_line = idx as u32 + 2;
            }
        }
        offset += line.len();
    }
    if content.len() > start {
        docs.push(Document {
            text: &content[start..],
            line: start_line,
        });
    }

    docs
}

/// Returns `Some(true)` when the separator line also carries document content,
/// `Some(false)` for a bare separator, `None` for any other line.
fn separator(line: &str) -> Option<bool> {
    let rest = line.trim_end().strip_prefix("---")?;
    if rest.is_empty() {
        return Some(false);
    }
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let rest = rest.trim_start();
    Some(!(rest.is_empty() || rest.starts_with('#')))
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use miette::{NamedSource, SourceSpan};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use crate::constants::maven::POM_NAMESPACE;
use crate::core::{ModuleIdentity, ModuleRecord};
use crate::error::{PomGraphError, XmlParseError};

/// Read and parse a single `pom.xml` into a [`ModuleRecord`]
pub fn parse_file(path: &Path) -> Result<ModuleRecord, PomGraphError> {
    let bytes = std::fs::read(path).map_err(|e| PomGraphError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = decode(&bytes, path)?;

    parse_str(&content, path)
}

/// Decode raw descriptor bytes into text.
///
/// A byte order mark wins over the `encoding` named in the XML declaration,
/// which wins over the UTF-8 default.
fn decode<'a>(bytes: &'a [u8], path: &Path) -> Result<Cow<'a, str>, PomGraphError> {
    let encoding = match declared_encoding(bytes) {
        // A declaration readable as ASCII rules out BOM-less UTF-16
        Some(label) => Encoding::for_label(label.as_bytes())
            .map(Encoding::output_encoding)
            .ok_or_else(|| PomGraphError::DecodeError {
                path: path.to_path_buf(),
                encoding: label.to_string(),
            })?,
        None => UTF_8,
    };

    let (content, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(PomGraphError::DecodeError {
            path: path.to_path_buf(),
            encoding: used.name().to_string(),
        });
    }

    Ok(content)
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let rest = bytes.strip_prefix(b"<?xml")?;
    if !rest.first().is_some_and(u8::is_ascii_whitespace) {
        return None;
    }

    let end = rest.windows(2).position(|pair| pair == b"?>")?;
    let declaration = std::str::from_utf8(&rest[..end]).ok()?;

    let (_, after) = declaration.split_once("encoding")?;
    let value = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];

    value.find(quote).map(|close| &value[..close])
}

/// Parse descriptor markup that was read from `path`.
///
/// `path` is only used for error reporting and is stored as the record's
/// source.
pub fn parse_str(content: &str, path: &Path) -> Result<ModuleRecord, PomGraphError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    let document = Document::parse_with_options(content, options).map_err(|e| {
        let span = span_for_position(content, e.pos());

        XmlParseError {
            file: path.display().to_string(),
            source_code: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
            source: e,
        }
    })?;

    let project = document.root_element();
    let (parent_group_id, parent_artifact_id) = child_element(project, "parent")
        .map(coordinates)
        .unwrap_or((None, None));

    let group_id = child_text(project, "groupId")
        .or_else(|| parent_group_id.clone())
        .ok_or_else(|| PomGraphError::MissingGroupId {
            path: path.to_path_buf(),
        })?;

    let artifact_id =
        child_text(project, "artifactId").ok_or_else(|| PomGraphError::MissingArtifactId {
            path: path.to_path_buf(),
        })?;

    let parent = match (parent_group_id, parent_artifact_id) {
        (_, None) => None,
        (Some(group_id), Some(artifact_id)) => Some(ModuleIdentity::new(group_id, artifact_id)),
        (None, Some(_)) => {
            return Err(PomGraphError::MissingParentGroupId {
                path: path.to_path_buf(),
            });
        }
    };

    let dependencies = parse_dependencies(project, path)?;

    let record = ModuleRecord::new(ModuleIdentity::new(group_id, artifact_id), path)
        .with_parent(parent)
        .with_dependencies(dependencies);

    debug!(
        module = %record.identity(),
        parent = ?record.parent().map(ToString::to_string),
        dependencies = record.dependencies().len(),
        "parsed {}",
        path.display()
    );

    Ok(record)
}

fn parse_dependencies(
    project: Node<'_, '_>,
    path: &Path,
) -> Result<Vec<ModuleIdentity>, PomGraphError> {
    let mut dependencies = Vec::new();

    let entries = child_elements(project, "dependencies")
        .flat_map(|block| child_elements(block, "dependency"));

    for (index, dependency) in entries.enumerate() {
        let (group_id, artifact_id) = coordinates(dependency);

        let group_id = group_id.ok_or_else(|| PomGraphError::MissingDependencyField {
            path: path.to_path_buf(),
            field: "groupId",
            index: index + 1,
        })?;
        let artifact_id = artifact_id.ok_or_else(|| PomGraphError::MissingDependencyField {
            path: path.to_path_buf(),
            field: "artifactId",
            index: index + 1,
        })?;

        dependencies.push(ModuleIdentity::new(group_id, artifact_id));
    }

    Ok(dependencies)
}

/// `groupId` and `artifactId` declared directly under `node`
fn coordinates(node: Node<'_, '_>) -> (Option<String>, Option<String>) {
    (child_text(node, "groupId"), child_text(node, "artifactId"))
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name((POM_NAMESPACE, name)))
}

fn child_element<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    child_elements(node, name).next()
}

/// Trimmed text of the first matching child; blank text counts as absent
fn child_text(node: Node<'_, '_>, name: &'static str) -> Option<String> {
    child_element(node, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn span_for_position(content: &str, pos: roxmltree::TextPos) -> Option<SourceSpan> {
    let row = usize::try_from(pos.row).ok()?.checked_sub(1)?;
    let col = usize::try_from(pos.col).ok()?.saturating_sub(1);

    let line_start: usize = content
        .split_inclusive('\n')
        .take(row)
        .map(str::len)
        .sum();
    let line = content.get(line_start..)?;
    let column_offset = line
        .char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len());

    let offset = (line_start + column_offset).min(content.len());
    let len = usize::from(offset < content.len());

    Some(SourceSpan::new(offset.into(), len))
}

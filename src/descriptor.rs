//! Project descriptor access: reading, comment-stripped JSON, and version bumps.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{increment, BumpKind};
use crate::error::{AppVersionerError, Result};

/// Descriptor used when no path is given.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "./package.json";

const VERSION_FIELD: &str = "version";

/// A project descriptor (`package.json` style) with field order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    fields: Map<String, Value>,
}

impl ProjectDescriptor {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        ProjectDescriptor { fields }
    }

    /// The `version` field, if present and a string.
    pub fn version(&self) -> Option<&str> {
        self.fields.get(VERSION_FIELD).and_then(Value::as_str)
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        let version = Value::String(version.into());
        self.fields.insert(VERSION_FIELD.to_string(), version);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serializes with 2-space indentation, no trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.fields)
            .map_err(|e| AppVersionerError::Io(e.into()))
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppVersionerError::from_io(path, e))
}

fn parse_json(path: &Path, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| AppVersionerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_object(path: &Path, text: &str) -> Result<Map<String, Value>> {
    match parse_json(path, text)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppVersionerError::config(format!(
            "{} does not contain a JSON object",
            path.display()
        ))),
    }
}

/// Loads a descriptor as plain JSON (no comment stripping).
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<ProjectDescriptor> {
    let path = path.as_ref();
    let text = read_text(path)?;
    Ok(ProjectDescriptor::from_map(parse_object(path, &text)?))
}

/// Loads any JSON file after stripping `//` and `/* */` comments.
pub fn load_json_with_comments(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_json(path, &strip_json_comments(&text))
}

/// Removes `//` line comments and `/* */` block comments outside of string
/// literals. The newline terminating a line comment is kept.
pub fn strip_json_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Reads the `version` field of the descriptor at `path`.
pub fn get_version(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    load_descriptor(path)?
        .version()
        .map(str::to_string)
        .ok_or_else(|| AppVersionerError::missing_field(path, VERSION_FIELD))
}

/// Writes the descriptor as a whole-file replacement, creating parent directories.
pub fn write_descriptor(descriptor: &ProjectDescriptor, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let contents = descriptor.to_pretty_string()?;
    write_file(path, &contents)
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Bumps the descriptor version and persists it to `output_path` (or back to `path`).
///
/// # Returns
/// The new version string.
pub fn bump_version(
    kind: BumpKind,
    path: impl AsRef<Path>,
    output_path: Option<&Path>,
) -> Result<String> {
    let path = path.as_ref();
    let mut descriptor = load_descriptor(path)?;
    let current = descriptor
        .version()
        .ok_or_else(|| AppVersionerError::missing_field(path, VERSION_FIELD))?;

    let new_version = increment(current, kind)?;
    descriptor.set_version(new_version.clone());
    write_descriptor(&descriptor, output_path.unwrap_or(path))?;

    Ok(new_version)
}

//! Task definition model, loading, and writing.
//!
//! The typed model retains only the eight fields the registration API
//! accepts, so the projection that strips read-only metadata (revision,
//! ARN, status, timestamps) falls out of deserialization. Container
//! definitions keep every field verbatim through a flattened remainder map
//! so re-registration input is not lossy.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, ParseError, Result, SchemaError};

/// A named pointer to a value in a secret store, resolved at container
/// start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRef {
    pub name: String,
    pub value_from: String,
}

/// One container within a task definition.
///
/// Only `image` and `secrets` are edited; everything else (environment,
/// port mappings, log configuration, ...) passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretRef>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The deployable unit specification, reduced to its registration input.
///
/// `family` and the container list are required; the remaining fields are
/// carried through when present and omitted when absent, matching what the
/// registration API tolerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<String>,
    #[serde(default)]
    pub container_definitions: Vec<ContainerDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_compatibilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Load a task definition from a JSON file.
///
/// Accepts either a bare descriptor or the `describe-task-definition`
/// output that wraps it in a `taskDefinition` envelope.
///
/// # Errors
///
/// Returns `ParseError` if the file is missing or not valid JSON, and
/// `SchemaError::Descriptor` if the document does not map onto the model.
pub fn load(path: &Path) -> Result<TaskDescriptor> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&contents).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptor_value = unwrap_envelope(document);
    let descriptor: TaskDescriptor =
        serde_json::from_value(descriptor_value).map_err(SchemaError::Descriptor)?;

    debug!(
        family = %descriptor.family,
        containers = descriptor.container_definitions.len(),
        "task definition loaded"
    );
    Ok(descriptor)
}

/// Peel off the `taskDefinition` envelope if the document carries one.
fn unwrap_envelope(document: Value) -> Value {
    match document {
        Value::Object(mut map) => match map.remove("taskDefinition") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Write the registration input as JSON with 4-space indentation,
/// overwriting any existing file at `path`.
pub fn write(path: &Path, descriptor: &TaskDescriptor) -> Result<()> {
    let json = to_indented_json(descriptor).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "registration input written");
    Ok(())
}

fn to_indented_json(descriptor: &TaskDescriptor) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    descriptor.serialize(&mut serializer)?;
    Ok(buf)
}

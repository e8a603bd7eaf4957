//! Deployment edits applied to a loaded task definition.
//!
//! Two field-level edits on the first container: point `image` at the
//! staging target and merge the required secret references into `secrets`
//! without duplicating names. Both edits are idempotent.

use tracing::debug;

use crate::core::constants;
use crate::core::descriptor::{ContainerDefinition, SecretRef, TaskDescriptor};
use crate::error::{Result, SchemaError};

/// What the secret merge did, for reporting.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Names appended to the secret list, in append order.
    pub appended: Vec<String>,
    /// Required names that were already present and left untouched.
    pub already_present: Vec<String>,
}

/// Apply the compiled-in deployment edits to the first container.
///
/// # Errors
///
/// Returns `SchemaError::NoContainerDefinitions` if the descriptor has no
/// containers to edit.
pub fn apply(descriptor: &mut TaskDescriptor) -> Result<MergeOutcome> {
    let container = descriptor
        .container_definitions
        .first_mut()
        .ok_or(SchemaError::NoContainerDefinitions)?;

    set_image(container, constants::TARGET_IMAGE);
    Ok(merge_secrets(container, &required_secrets()))
}

/// Overwrite the container's image reference.
pub fn set_image(container: &mut ContainerDefinition, image: &str) {
    debug!(image, "setting container image");
    container.image = Some(image.to_string());
}

/// Append each required secret whose name is not already in the list.
///
/// Existing entries keep their order and their `valueFrom`; new entries are
/// appended in `required` order. Running this twice yields the same list.
pub fn merge_secrets(container: &mut ContainerDefinition, required: &[SecretRef]) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for secret in required {
        if container.secrets.iter().any(|s| s.name == secret.name) {
            outcome.already_present.push(secret.name.clone());
        } else {
            container.secrets.push(secret.clone());
            outcome.appended.push(secret.name.clone());
        }
    }

    debug!(
        appended = outcome.appended.len(),
        already_present = outcome.already_present.len(),
        "secrets merged"
    );
    outcome
}

/// The compiled-in required secrets as model values.
pub fn required_secrets() -> Vec<SecretRef> {
    constants::REQUIRED_SECRETS
        .iter()
        .map(|(name, value_from)| SecretRef {
            name: (*name).to_string(),
            value_from: (*value_from).to_string(),
        })
        .collect()
}

//! Constants used throughout taskprep.
//!
//! Centralizes the compiled-in deployment configuration.

/// Input file name, resolved against the working directory.
pub const INPUT_FILE: &str = "task-def.json";

/// Output file name, resolved against the working directory.
pub const OUTPUT_FILE: &str = "task-def-updated.json";

/// Image the first container definition is rewritten to.
pub const TARGET_IMAGE: &str =
    "779424486071.dkr.ecr.us-east-1.amazonaws.com/staging-zenthea:latest";

/// Secret references every deployed container must carry, as
/// (name, secrets-manager ARN) pairs. Appended in this order when missing.
pub const REQUIRED_SECRETS: &[(&str, &str)] = &[
    (
        "STRIPE_PRICE_ID_FREE",
        "arn:aws:secretsmanager:us-east-1:779424486071:secret:staging/zenthea/STRIPE_PRICE_ID_FREE",
    ),
    (
        "STRIPE_PRICE_ID_PRO",
        "arn:aws:secretsmanager:us-east-1:779424486071:secret:staging/zenthea/STRIPE_PRICE_ID_PRO",
    ),
    (
        "STRIPE_PRICE_ID_ENTERPRISE",
        "arn:aws:secretsmanager:us-east-1:779424486071:secret:staging/zenthea/STRIPE_PRICE_ID_ENTERPRISE",
    ),
];

//! Test fixtures and constants.

/// Image the transformer always sets on the first container.
pub const TARGET_IMAGE: &str =
    "779424486071.dkr.ecr.us-east-1.amazonaws.com/staging-zenthea:latest";

/// Required secret names, in the order the transformer appends them.
pub const REQUIRED_SECRET_NAMES: &[&str] = &[
    "STRIPE_PRICE_ID_FREE",
    "STRIPE_PRICE_ID_PRO",
    "STRIPE_PRICE_ID_ENTERPRISE",
];

/// The eight top-level fields the registration API accepts.
pub const PROJECTED_FIELDS: &[&str] = &[
    "family",
    "taskRoleArn",
    "executionRoleArn",
    "networkMode",
    "containerDefinitions",
    "requiresCompatibilities",
    "cpu",
    "memory",
];

/// A `describe-task-definition` style document: the descriptor sits under
/// a `taskDefinition` envelope and carries read-only registration metadata.
pub const DESCRIBE_OUTPUT: &str = r#"{
    "taskDefinition": {
        "family": "staging-zenthea",
        "taskRoleArn": "arn:aws:iam::779424486071:role/staging-zenthea-task",
        "executionRoleArn": "arn:aws:iam::779424486071:role/staging-zenthea-exec",
        "networkMode": "awsvpc",
        "containerDefinitions": [
            {
                "name": "zenthea",
                "image": "779424486071.dkr.ecr.us-east-1.amazonaws.com/staging-zenthea:v42",
                "essential": true,
                "portMappings": [
                    { "containerPort": 3000, "protocol": "tcp" }
                ],
                "environment": [
                    { "name": "NODE_ENV", "value": "staging" }
                ],
                "secrets": [
                    {
                        "name": "DATABASE_URL",
                        "valueFrom": "arn:aws:secretsmanager:us-east-1:779424486071:secret:staging/zenthea/DATABASE_URL"
                    }
                ]
            }
        ],
        "requiresCompatibilities": ["FARGATE"],
        "cpu": "512",
        "memory": "1024",
        "revision": 42,
        "taskDefinitionArn": "arn:aws:ecs:us-east-1:779424486071:task-definition/staging-zenthea:42",
        "status": "ACTIVE",
        "registeredAt": "2024-06-01T12:00:00.000000+00:00",
        "registeredBy": "arn:aws:iam::779424486071:user/deploy",
        "compatibilities": ["EC2", "FARGATE"],
        "requiresAttributes": [
            { "name": "ecs.capability.secrets.asm.environment-variables" }
        ]
    }
}"#;

/// A bare descriptor with no envelope and no secrets list.
pub const BARE_TASK_DEF: &str = r#"{
    "family": "staging-zenthea",
    "networkMode": "awsvpc",
    "containerDefinitions": [
        { "name": "zenthea", "image": "registry/app:v1", "essential": true }
    ],
    "cpu": "256",
    "memory": "512"
}"#;

/// A descriptor already carrying one of the required secrets, under a
/// different ARN than the compiled-in one.
pub const TASK_DEF_WITH_REQUIRED_SECRET: &str = r#"{
    "family": "staging-zenthea",
    "containerDefinitions": [
        {
            "name": "zenthea",
            "image": "registry/app:v1",
            "secrets": [
                { "name": "STRIPE_PRICE_ID_PRO", "valueFrom": "arn:custom:pre-existing" }
            ]
        }
    ]
}"#;

/// A descriptor with no containerDefinitions field at all.
pub const TASK_DEF_NO_CONTAINERS: &str = r#"{
    "family": "staging-zenthea",
    "cpu": "256",
    "memory": "512"
}"#;

/// A descriptor with an empty container list.
pub const TASK_DEF_EMPTY_CONTAINERS: &str = r#"{
    "family": "staging-zenthea",
    "containerDefinitions": []
}"#;

pub mod artifact_registry_client;

pub const AUDIENCE: &str = "https://artifactregistry.googleapis.com/";
pub const ARTIFACT_REGISTRY: &str = "artifactregistry.googleapis.com";
pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];

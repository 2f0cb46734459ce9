use serde::{Deserialize, Serialize};

/// fnship.toml configuration.
///
/// Unlike a service config, the file is required: the account identifiers
/// and credential profiles have no usable defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FnshipConfig {
    pub project: ProjectConfig,
    /// Development environment
    pub dev: EnvConfig,
    /// Production environment
    pub prod: EnvConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Application name; also the local image name
    pub app_name: String,
    /// Substring used to locate the Lambda function by name
    /// (defaults to the application name)
    pub function_token: Option<String>,
    /// AWS region shared by both environments
    #[serde(default = "default_region")]
    pub region: String,
    /// ECR repository name (defaults to the application name)
    pub repository: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// AWS account ID, e.g. "111111111111"
    pub account_id: String,
    /// Credential profile name passed to the aws CLI
    pub profile: String,
}

impl FnshipConfig {
    /// Load from fnship.toml in the given directory.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("fnship.toml");
        if !config_path.exists() {
            return Err(crate::Error::ConfigMissing {
                dir: project_dir.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;

        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %config_path.display(), "loaded fnship.toml");
        Ok(config)
    }

    /// ECR repository name, derived from the application name unless overridden.
    pub fn repository(&self) -> &str {
        self.project
            .repository
            .as_deref()
            .unwrap_or(&self.project.app_name)
    }

    /// Name substring used to discover the Lambda function.
    pub fn function_token(&self) -> &str {
        self.project
            .function_token
            .as_deref()
            .unwrap_or(&self.project.app_name)
    }

    /// Tag applied to the locally built image.
    pub fn local_tag(&self) -> String {
        format!("{}:latest", self.project.app_name)
    }
}

fn default_region() -> String {
    "eu-south-1".to_owned()
}

use crate::FnshipConfig;

/// One of the two deployment environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvName {
    Dev,
    Prod,
}

impl EnvName {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvName::Dev => "dev",
            EnvName::Prod => "prod",
        }
    }
}

impl std::fmt::Display for EnvName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which environments the operator selected for this run.
///
/// Set once from the menu choice (or `--env`), read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub dev: bool,
    pub prod: bool,
}

impl Selection {
    /// Map a menu choice to a selection: 1 = dev, 2 = prod, 3 = both.
    /// Anything else is a fatal error.
    pub fn from_choice(input: &str) -> crate::Result<Self> {
        match input.trim() {
            "1" => Ok(Self {
                dev: true,
                prod: false,
            }),
            "2" => Ok(Self {
                dev: false,
                prod: true,
            }),
            "3" => Ok(Self {
                dev: true,
                prod: true,
            }),
            other => Err(crate::Error::InvalidChoice {
                input: other.to_owned(),
            }),
        }
    }

    /// Selected environments in deploy order: dev always before prod.
    pub fn envs(self) -> Vec<EnvName> {
        let mut envs = Vec::new();
        if self.dev {
            envs.push(EnvName::Dev);
        }
        if self.prod {
            envs.push(EnvName::Prod);
        }
        envs
    }
}

/// Everything needed to deploy into one environment.
///
/// Built once at startup from the config; never mutated.
#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub env: EnvName,
    pub account_id: String,
    pub profile: String,
    pub region: String,
    /// ECR registry host, `{account}.dkr.ecr.{region}.amazonaws.com`
    pub registry: String,
    /// Fully-qualified remote image tag
    pub remote_tag: String,
}

impl FnshipConfig {
    /// Resolve the deployment target for one environment.
    pub fn target(&self, env: EnvName) -> DeployTarget {
        let env_config = match env {
            EnvName::Dev => &self.dev,
            EnvName::Prod => &self.prod,
        };
        let region = &self.project.region;
        let registry = format!(
            "{account}.dkr.ecr.{region}.amazonaws.com",
            account = env_config.account_id,
        );
        let remote_tag = format!("{registry}/{repo}:latest", repo = self.repository());

        DeployTarget {
            env,
            account_id: env_config.account_id.clone(),
            profile: env_config.profile.clone(),
            region: region.clone(),
            registry,
            remote_tag,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable that overrides the `--orchestrator` flag.
pub const ORCHESTRATOR_ENV: &str = "DOCKER_ORCHESTRATOR";

/// Deployment target runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orchestrator {
    Swarm,
    Kubernetes,
}

impl Orchestrator {
    /// Resolve the orchestrator from the flag value, letting
    /// `DOCKER_ORCHESTRATOR` override it when set.
    pub fn resolve(flag: &str) -> Result<Self> {
        let env = std::env::var(ORCHESTRATOR_ENV).ok();
        Self::resolve_with(flag, env.as_deref())
    }

    /// Pure resolution: env value wins over the flag; anything outside
    /// `swarm`/`kubernetes` is rejected before any side effect.
    pub fn resolve_with(flag: &str, env: Option<&str>) -> Result<Self> {
        env.unwrap_or(flag).parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swarm => "swarm",
            Self::Kubernetes => "kubernetes",
        }
    }
}

impl FromStr for Orchestrator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "swarm" => Ok(Self::Swarm),
            "kubernetes" => Ok(Self::Kubernetes),
            other => Err(Error::InvalidOrchestrator {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

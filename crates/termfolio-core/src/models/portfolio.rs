//! Portfolio dataset consumed by the command handlers.
//!
//! The record is read-only configuration: it is decoded once from the bundled
//! TOML document and shared by every session.

use serde::Deserialize;

use crate::config::PORTFOLIO_TOML;
use crate::error::DatasetError;

/// The portfolio owner's profile, work and contact details.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub identity: Identity,
    pub contact: Contact,
    pub resume: Resume,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// How the simulated machine introduces itself.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Identity {
    /// Login name shown in the prompt.
    pub user: String,
    /// Hostname shown in the prompt.
    pub host: String,
    /// Operating system name used in `neofetch` and the welcome banner.
    pub os: String,
    pub version: String,
    /// Hostname reported when the session logs out.
    pub closing_host: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub phone: Option<String>,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resume {
    pub summary: String,
    pub download_url: String,
    pub last_updated: String,
}

impl Portfolio {
    /// Decode a portfolio from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, DatasetError> {
        toml::from_str(source).map_err(|e| DatasetError::Parse {
            document: "portfolio",
            message: e.message().to_string(),
        })
    }

    /// The portfolio bundled with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_toml(PORTFOLIO_TOML)
    }

    /// Prompt string shown before every input line.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.identity.user, self.identity.host)
    }

    /// Project by its 1-based number as used in `project<N>.txt`.
    pub fn project(&self, number: usize) -> Option<&Project> {
        number.checked_sub(1).and_then(|i| self.projects.get(i))
    }
}

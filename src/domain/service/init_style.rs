use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ConfigurationError;

/// Init ecosystem an artifact is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitStyle {
    SysvDebian,
    SysvSles,
    SysvRedhat,
    Systemd,
    Upstart,
    Launchd,
}

impl InitStyle {
    pub const ALL: [InitStyle; 6] = [
        InitStyle::SysvDebian,
        InitStyle::SysvSles,
        InitStyle::SysvRedhat,
        InitStyle::Systemd,
        InitStyle::Upstart,
        InitStyle::Launchd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InitStyle::SysvDebian => "sysv_debian",
            InitStyle::SysvSles => "sysv_sles",
            InitStyle::SysvRedhat => "sysv_redhat",
            InitStyle::Systemd => "systemd",
            InitStyle::Upstart => "upstart",
            InitStyle::Launchd => "launchd",
        }
    }

    /// Whether the artifact is a script the init system executes directly.
    pub fn is_sysv(&self) -> bool {
        matches!(self, InitStyle::SysvDebian | InitStyle::SysvSles | InitStyle::SysvRedhat)
    }

    /// Group of the privileged account on the platform this style targets.
    pub fn privileged_group(&self) -> &'static str {
        match self {
            InitStyle::Launchd => "wheel",
            _ => "root",
        }
    }
}

impl fmt::Display for InitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InitStyle {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InitStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownInitStyle(s.to_string()))
    }
}

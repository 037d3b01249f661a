/// Service description error.
///
/// Raised before any template is touched; the caller must correct the
/// description and render again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("No init style selected")]
    MissingInitStyle,

    #[error(
        "Unknown init style '{0}': must be one of sysv_debian, sysv_sles, sysv_redhat, systemd, upstart, launchd"
    )]
    UnknownInitStyle(String),

    #[error(
        "Invalid service name '{0}': must be alphanumeric with hyphens, underscores, periods, or '@'"
    )]
    InvalidServiceName(String),

    #[error("Command must contain at least the executable")]
    EmptyCommand,

    #[error("Command executable must not be empty")]
    EmptyExecutable,

    #[error("Pre-start command #{0} has no tokens")]
    EmptyPreStartCommand(usize),

    #[error("Resource limit names must not be empty")]
    EmptyLimitName,

    #[error("Invalid resource limit name {0:?}: must not contain whitespace or control characters")]
    InvalidLimitName(String),

    #[error(
        "Invalid value {value:?} for resource limit '{name}': must be non-empty without whitespace or control characters"
    )]
    InvalidLimitValue { name: String, value: String },

    #[error("Invalid user {0:?}: must be non-empty without control characters")]
    InvalidUser(String),

    #[error("Invalid group {0:?}: must be non-empty without control characters")]
    InvalidGroup(String),

    #[error("Pre-start command #{0} contains a line break")]
    PreStartLineBreak(usize),

    #[error("Command tokens must not contain line breaks for the systemd init style")]
    CommandLineBreak,

    #[error("launchd_name is required for the launchd init style")]
    MissingLaunchdName,

    #[error(
        "Invalid launchd name '{0}': must be alphanumeric with hyphens, underscores, periods, or '@'"
    )]
    InvalidLaunchdName(String),
}

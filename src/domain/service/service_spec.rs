use crate::domain::validation::{is_directive_value, is_directive_word, validate_unit_identifier};

use super::{ConfigurationError, InitStyle, LimitTable};

const PRIVILEGED_USER: &str = "root";

/// Fully resolved description of a long-running service.
///
/// Rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Identifier used for file, unit, and default-file names.
    pub name: String,
    /// Executable followed by its arguments.
    pub command: Vec<String>,
    /// Target init ecosystem. Never inferred by the engine.
    pub init_style: Option<InitStyle>,
    /// Commands run in order before the main command starts.
    pub before_command: Vec<Vec<String>>,
    pub ulimit: LimitTable,
    /// Free-text description; empty suppresses description directives.
    pub description: String,
    /// Source the OS-conventional environment file before starting.
    pub source_default_file: bool,
    /// Reverse-DNS base name, required for launchd.
    pub launchd_name: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
}

/// Run-as identity after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunAs<'a> {
    pub user: &'a str,
    pub group: &'a str,
}

impl ServiceSpec {
    pub fn new<N, I, S>(name: N, command: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            command: command.into_iter().map(Into::into).collect(),
            init_style: None,
            before_command: Vec::new(),
            ulimit: LimitTable::new(),
            description: String::new(),
            source_default_file: false,
            launchd_name: None,
            user: None,
            group: None,
        }
    }

    pub fn with_init_style(mut self, style: InitStyle) -> Self {
        self.init_style = Some(style);
        self
    }

    pub fn with_before_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.before_command.push(command.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_limit(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.ulimit.insert(name, value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source_default_file(mut self, enabled: bool) -> Self {
        self.source_default_file = enabled;
        self
    }

    pub fn with_launchd_name(mut self, launchd_name: impl Into<String>) -> Self {
        self.launchd_name = Some(launchd_name.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// The executable, i.e. the first command token.
    pub fn executable(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments following the executable.
    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// Run-as identity, falling back to the privileged account for `style`.
    pub fn run_as(&self, style: InitStyle) -> RunAs<'_> {
        RunAs {
            user: self.user.as_deref().unwrap_or(PRIVILEGED_USER),
            group: self.group.as_deref().unwrap_or(style.privileged_group()),
        }
    }

    /// Check that the spec can be rendered and return the selected style.
    pub fn validate(&self) -> Result<InitStyle, ConfigurationError> {
        let style = self.init_style.ok_or(ConfigurationError::MissingInitStyle)?;

        if !validate_unit_identifier(&self.name) {
            return Err(ConfigurationError::InvalidServiceName(self.name.clone()));
        }

        match self.command.first() {
            None => return Err(ConfigurationError::EmptyCommand),
            Some(executable) if executable.is_empty() => {
                return Err(ConfigurationError::EmptyExecutable);
            }
            Some(_) => {}
        }

        if let Some(index) = self.before_command.iter().position(Vec::is_empty) {
            return Err(ConfigurationError::EmptyPreStartCommand(index));
        }

        if let Some(index) = self
            .before_command
            .iter()
            .position(|command| command.iter().any(|token| token.contains(['\n', '\r'])))
        {
            return Err(ConfigurationError::PreStartLineBreak(index));
        }

        if style == InitStyle::Systemd
            && self.command.iter().any(|token| token.contains(['\n', '\r']))
        {
            return Err(ConfigurationError::CommandLineBreak);
        }

        for (name, value) in self.ulimit.iter() {
            if name.is_empty() {
                return Err(ConfigurationError::EmptyLimitName);
            }
            if !is_directive_word(name) {
                return Err(ConfigurationError::InvalidLimitName(name.to_string()));
            }
            if !is_directive_word(value) {
                return Err(ConfigurationError::InvalidLimitValue {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if let Some(user) = self.user.as_deref().filter(|user| !is_directive_value(user)) {
            return Err(ConfigurationError::InvalidUser(user.to_string()));
        }
        if let Some(group) = self.group.as_deref().filter(|group| !is_directive_value(group)) {
            return Err(ConfigurationError::InvalidGroup(group.to_string()));
        }

        if style == InitStyle::Launchd {
            let launchd_name =
                self.launchd_name.as_deref().ok_or(ConfigurationError::MissingLaunchdName)?;
            if !validate_unit_identifier(launchd_name) {
                return Err(ConfigurationError::InvalidLaunchdName(launchd_name.to_string()));
            }
        }

        Ok(style)
    }
}

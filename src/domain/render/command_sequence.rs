//! Pre-start command sequences.
//!
//! Pre-start tokens are joined verbatim: they are expected to be shell-safe
//! already, so quoting or redirections written by the caller survive.

use super::Dialect;

/// Join one pre-start command with single spaces.
pub fn join_command<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|token| token.as_ref()).collect::<Vec<&str>>().join(" ")
}

/// Render the pre-start sequence in `dialect`.
///
/// An empty sequence renders to no lines at all, not an empty block.
pub fn render_pre_start(commands: &[Vec<String>], dialect: Dialect) -> Vec<String> {
    if commands.is_empty() {
        return Vec::new();
    }

    match dialect {
        Dialect::Shell { indent } => commands
            .iter()
            .map(|command| format!("{:indent$}{}", "", join_command(command)))
            .collect(),
        Dialect::Upstart => {
            let mut lines = Vec::with_capacity(commands.len() + 2);
            lines.push("pre-start script".to_string());
            lines.extend(commands.iter().map(|command| format!("    {}", join_command(command))));
            lines.push("end script".to_string());
            lines
        }
        Dialect::Systemd => commands
            .iter()
            .map(|command| format!("ExecStartPre={}", join_command(command)))
            .collect(),
        Dialect::Launchd => Vec::new(),
    }
}

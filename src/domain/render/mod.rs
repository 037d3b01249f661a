//! Rendering primitives shared by every style.

mod command_sequence;
mod dialect;
mod limit_directives;
mod shell_escape;
mod xml_escape;

pub use command_sequence::{join_command, render_pre_start};
pub use dialect::Dialect;
pub use limit_directives::{limit_lines, render_limits, systemd_directive, ulimit_flag};
pub use shell_escape::{shell_escape, shell_join, single_quote};
pub use xml_escape::xml_escape;

/// Collapse free text onto one line for single-line directives and comments.
pub fn one_line(text: &str) -> String {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join(" ")
}

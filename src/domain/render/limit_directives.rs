//! Resource limit directives.

use crate::domain::service::LimitTable;

use super::Dialect;

/// Known limit names with their `ulimit` flag and systemd directive suffix.
const KNOWN_LIMITS: &[(&str, &str, &str)] = &[
    ("as", "-v", "AS"),
    ("core", "-c", "CORE"),
    ("cpu", "-t", "CPU"),
    ("data", "-d", "DATA"),
    ("fsize", "-f", "FSIZE"),
    ("locks", "-x", "LOCKS"),
    ("memlock", "-l", "MEMLOCK"),
    ("msgqueue", "-q", "MSGQUEUE"),
    ("nice", "-e", "NICE"),
    ("nofile", "-n", "NOFILE"),
    ("nproc", "-u", "NPROC"),
    ("rss", "-m", "RSS"),
    ("rtprio", "-r", "RTPRIO"),
    ("sigpending", "-i", "SIGPENDING"),
    ("stack", "-s", "STACK"),
];

fn known(name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    KNOWN_LIMITS.iter().find(|(known, _, _)| *known == name)
}

/// `ulimit` flag for a limit name; unknown names are used verbatim.
pub fn ulimit_flag(name: &str) -> &str {
    known(name).map(|(_, flag, _)| *flag).unwrap_or(name)
}

/// systemd directive for a limit name, e.g. `LimitNOFILE`.
pub fn systemd_directive(name: &str) -> String {
    match known(name) {
        Some((_, _, suffix)) => format!("Limit{suffix}"),
        None => format!("Limit{}", name.to_ascii_uppercase()),
    }
}

/// Render one limit as the line(s) of `dialect`.
pub fn limit_lines(name: &str, value: &str, dialect: Dialect) -> Vec<String> {
    match dialect {
        Dialect::Shell { indent } => {
            let flag = ulimit_flag(name);
            ["-H", "-S"]
                .iter()
                .map(|kind| format!("{:indent$}ulimit {kind} {flag} {value}", ""))
                .collect()
        }
        Dialect::Upstart => vec![format!("limit {name} {value} {value}")],
        Dialect::Systemd => {
            let value = if value == "unlimited" { "infinity" } else { value };
            vec![format!("{}={value}", systemd_directive(name))]
        }
        Dialect::Launchd => Vec::new(),
    }
}

/// Render a whole table, preserving its order.
pub fn render_limits(limits: &LimitTable, dialect: Dialect) -> Vec<String> {
    limits.iter().flat_map(|(name, value)| limit_lines(name, value, dialect)).collect()
}

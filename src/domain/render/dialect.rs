/// Directive idiom a fragment is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Lines inside a shell script body, indented by `indent` spaces.
    Shell { indent: usize },
    /// Upstart job stanzas.
    Upstart,
    /// systemd `[Service]` directives.
    Systemd,
    /// launchd property list; has no line-oriented fragments.
    Launchd,
}

impl Dialect {
    pub fn shell(indent: usize) -> Self {
        Dialect::Shell { indent }
    }
}

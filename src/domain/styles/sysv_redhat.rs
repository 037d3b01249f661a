use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::render::{Dialect, render_limits, render_pre_start, shell_join};
use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::{INIT_D_DIR, StyleRenderer, summary};

/// chkconfig-compatible init script using `/etc/rc.d/init.d/functions`.
pub struct SysvRedhat;

const FUNCTION_BODY: Dialect = Dialect::Shell { indent: 4 };

impl StyleRenderer for SysvRedhat {
    fn style(&self) -> InitStyle {
        InitStyle::SysvRedhat
    }

    fn template_name(&self) -> &'static str {
        "sysv_redhat.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(INIT_D_DIR).join(&spec.name))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        let run_as = spec.run_as(self.style());
        Ok(json!({
            "name": spec.name,
            "summary": summary(spec),
            "command": shell_join(&spec.command),
            "user": run_as.user,
            "group": run_as.group,
            "source_default_file": spec.source_default_file,
            "limits": render_limits(&spec.ulimit, FUNCTION_BODY),
            "pre_start": render_pre_start(&spec.before_command, FUNCTION_BODY),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{render, sample_spec};

    use super::*;

    #[test]
    fn command_line_is_escaped_and_indented() {
        let artifact = render(&sample_spec(InitStyle::SysvRedhat));
        assert_eq!(artifact.path, Path::new("/etc/init.d/initscriptname"));
        assert!(artifact.content.contains("\n        foo bar baz\\ \\<baz\\>\\ baz \\\n"));
    }

    #[test]
    fn sysconfig_is_sourced_behind_existence_test() {
        let spec = ServiceSpec::new("initscriptname", ["foo", "bar"])
            .with_init_style(InitStyle::SysvRedhat)
            .with_source_default_file(true);
        let content = render(&spec).content;
        assert!(content.contains(
            "\n[ -e /etc/sysconfig/initscriptname ] && . /etc/sysconfig/initscriptname\n"
        ));
    }

    #[test]
    fn sysconfig_is_omitted_by_default() {
        let content = render(&sample_spec(InitStyle::SysvRedhat)).content;
        assert!(!content.contains("/etc/sysconfig/"));
    }

    #[test]
    fn chkconfig_header_uses_description() {
        let content = render(&sample_spec(InitStyle::SysvRedhat).with_description("Queue worker")).content;
        assert!(content.contains("# chkconfig:   2345 95 05\n"));
        assert!(content.contains("# description: Queue worker\n"));
    }

    #[test]
    fn runs_as_configured_identity() {
        let content =
            render(&sample_spec(InitStyle::SysvRedhat).with_user("worker").with_group("staff")).content;
        assert!(content.contains("\nuser=worker\ngroup=staff\n"));
        assert!(content.contains(r#"runuser -u "$user" -g "$group" --"#));
    }

    #[test]
    fn pre_start_lines_are_indented_inside_start() {
        let spec = sample_spec(InitStyle::SysvRedhat)
            .with_limit("nproc", "256")
            .with_before_command(["/usr/bin/prepare", "--fast"]);
        let content = render(&spec).content;
        assert!(content.contains(
            "    ulimit -H -u 256\n    ulimit -S -u 256\n    /usr/bin/prepare --fast\n    setsid"
        ));
    }

    #[test]
    fn start_status_checks_the_launched_process() {
        let content = render(&sample_spec(InitStyle::SysvRedhat)).content;
        assert!(content.contains(
            "    pid=$!\n    echo \"$pid\" > \"$pidfile\"\n    if checkpid \"$pid\"; then\n        retval=0\n"
        ));
        assert!(!content.contains("retval=$?\n    if [ $retval -eq 0 ]; then\n        touch"));
    }
}

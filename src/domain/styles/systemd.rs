use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::render::{Dialect, one_line, render_limits, render_pre_start, shell_join, single_quote};
use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::StyleRenderer;

const UNIT_DIR: &str = "/lib/systemd/system";

/// systemd service unit.
pub struct Systemd;

/// The `ExecStart=` value.
///
/// Sourcing the default file folds into one `sh -c` invocation so the
/// variables are visible to the command. `%` and `$` are doubled so systemd
/// expands neither unit specifiers nor environment variables.
fn exec_start(spec: &ServiceSpec) -> String {
    let command = shell_join(&spec.command);
    let line = if spec.source_default_file {
        let default_file = format!("/etc/default/{}", spec.name);
        let script = format!("[ -f {default_file} ] && . {default_file} ;{command}");
        format!("sh -c {}", single_quote(&script))
    } else {
        command
    };
    line.replace('%', "%%").replace('$', "$$")
}

impl StyleRenderer for Systemd {
    fn style(&self) -> InitStyle {
        InitStyle::Systemd
    }

    fn template_name(&self) -> &'static str {
        "systemd.service.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(UNIT_DIR).join(format!("{}.service", spec.name)))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        let run_as = spec.run_as(self.style());
        Ok(json!({
            "description": one_line(&spec.description),
            "has_description": !spec.description.is_empty(),
            "user": run_as.user,
            "group": run_as.group,
            "limits": render_limits(&spec.ulimit, Dialect::Systemd),
            "pre_start": render_pre_start(&spec.before_command, Dialect::Systemd),
            "exec_start": exec_start(spec),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{lines_starting_with, render, sample_spec};

    use super::*;

    #[test]
    fn exec_start_escapes_each_token() {
        let artifact = render(&sample_spec(InitStyle::Systemd));
        assert_eq!(artifact.path, Path::new("/lib/systemd/system/initscriptname.service"));
        assert_eq!(artifact.mode, 0o644);
        assert_eq!(
            lines_starting_with(&artifact.content, "ExecStart="),
            vec![r"ExecStart=foo bar baz\ \<baz\>\ baz"]
        );
    }

    #[test]
    fn default_file_wraps_exec_start_in_sh() {
        let spec = ServiceSpec::new("initscriptname", ["foo", "bar"])
            .with_init_style(InitStyle::Systemd)
            .with_source_default_file(true);
        let content = render(&spec).content;
        assert_eq!(
            lines_starting_with(&content, "ExecStart="),
            vec![
                "ExecStart=sh -c '[ -f /etc/default/initscriptname ] && . /etc/default/initscriptname ;foo bar'"
            ]
        );
    }

    #[test]
    fn single_quotes_survive_sh_wrapping() {
        let spec = ServiceSpec::new("svc", ["echo", "it's"])
            .with_init_style(InitStyle::Systemd)
            .with_source_default_file(true);
        assert!(exec_start(&spec).ends_with(r";echo it\'\''s'"));
    }

    #[test]
    fn percent_is_not_a_specifier() {
        let spec = ServiceSpec::new("svc", ["date", "+%s"]).with_init_style(InitStyle::Systemd);
        assert_eq!(exec_start(&spec), "date +%%s");
    }

    #[test]
    fn dollar_is_not_expanded() {
        let spec = ServiceSpec::new("svc", ["echo", "$HOME"]).with_init_style(InitStyle::Systemd);
        assert_eq!(exec_start(&spec), r"echo \$$HOME");

        let spec = spec.with_source_default_file(true);
        assert_eq!(
            exec_start(&spec),
            r"sh -c '[ -f /etc/default/svc ] && . /etc/default/svc ;echo \$$HOME'"
        );
    }

    #[test]
    fn description_line_only_when_present() {
        let content = render(&sample_spec(InitStyle::Systemd)).content;
        assert!(lines_starting_with(&content, "Description").is_empty());

        let content = render(&sample_spec(InitStyle::Systemd).with_description("Web frontend")).content;
        assert_eq!(lines_starting_with(&content, "Description"), vec!["Description=Web frontend"]);
    }

    #[test]
    fn blank_description_still_emits_directive() {
        for description in ["   ", "\n", " \t "] {
            let spec = sample_spec(InitStyle::Systemd).with_description(description);
            let content = render(&spec).content;
            assert_eq!(lines_starting_with(&content, "Description"), vec!["Description="]);
        }
    }

    #[test]
    fn limits_follow_insertion_order() {
        let spec = sample_spec(InitStyle::Systemd)
            .with_limit("nproc", "64")
            .with_limit("nofile", "unlimited")
            .with_limit("core", "0");
        let content = render(&spec).content;
        assert_eq!(
            lines_starting_with(&content, "Limit"),
            vec!["LimitNPROC=64", "LimitNOFILE=infinity", "LimitCORE=0"]
        );
    }

    #[test]
    fn pre_start_becomes_exec_start_pre() {
        let spec = sample_spec(InitStyle::Systemd)
            .with_before_command(["/bin/mkdir", "-p", "/run/app"])
            .with_before_command(["/bin/chmod", "0700", "/run/app"]);
        let content = render(&spec).content;
        assert_eq!(
            lines_starting_with(&content, "ExecStartPre="),
            vec!["ExecStartPre=/bin/mkdir -p /run/app", "ExecStartPre=/bin/chmod 0700 /run/app"]
        );
        assert!(content.find("ExecStartPre=").unwrap() < content.find("ExecStart=").unwrap());
    }

    #[test]
    fn runs_as_identity() {
        let content = render(&sample_spec(InitStyle::Systemd).with_user("www-data")).content;
        assert!(content.contains("\nUser=www-data\nGroup=root\n"));
    }
}

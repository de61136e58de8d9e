use std::path::Path;

use crate::config::InstallerConfig;
use crate::console::Console;
use crate::hooks;
use crate::manifest;
use crate::prompt::Prompt;
use crate::verify::{self, VerifyOutcome};

/// What a run accomplished. The binary maps this to an exit code.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub hooks_copied: usize,
    pub copy_failures: usize,
    pub manifest_updated: bool,
    /// Set when the run hit a fatal problem: no Git repository, a failed
    /// hooks-directory creation, or a confirmed manifest merge that
    /// errored. Per-file copy failures are reported but not fatal.
    pub failed: bool,
}

/// Orchestrates a full installation run: verify directories, copy hooks,
/// then offer to register manifest commands.
///
/// Every internal error is translated into a console message here; none
/// escape to the caller.
pub struct Installer<P, C> {
    config: InstallerConfig,
    prompt: P,
    console: C,
}

impl<P: Prompt, C: Console> Installer<P, C> {
    pub fn new(config: InstallerConfig, prompt: P, console: C) -> Self {
        Installer {
            config,
            prompt,
            console,
        }
    }

    pub fn run(&mut self) -> InstallReport {
        let mut report = InstallReport::default();

        let project_dir = match self.config.resolve_project_dir() {
            Ok(dir) => dir,
            Err(e) => {
                self.console
                    .err(&format!("Unable to determine the project directory: {e}"));
                report.failed = true;
                return report;
            }
        };

        match verify::verify(&project_dir) {
            Ok(VerifyOutcome::Ready) => {}
            Ok(VerifyOutcome::CreatedHooksDir) => {
                self.console
                    .out("Creating hooks directory in Git repository");
            }
            Ok(VerifyOutcome::MissingGitRepo) => {
                self.console
                    .err("No .git directory found in your project, unable to copy Git hooks!");
                report.failed = true;
                return report;
            }
            Err(e) => {
                self.console.err(&format!("{e}, unable to proceed!"));
                report.failed = true;
                return report;
            }
        }

        self.copy_hooks_step(&project_dir, &mut report);
        self.manifest_step(&project_dir, &mut report);
        report
    }

    fn copy_hooks_step(&mut self, project_dir: &Path, report: &mut InstallReport) {
        let dest = project_dir.join(".git").join("hooks");
        match hooks::copy_hooks(&self.config.hooks_dir, &dest) {
            Ok(outcome) => {
                for failure in &outcome.failures {
                    self.console.err(&format!(
                        "Unable to copy {} hook: {}",
                        failure.hook, failure.error
                    ));
                }
                report.hooks_copied = outcome.copied;
                report.copy_failures = outcome.failures.len();
                self.console
                    .out(&format!("Installed {} Git hook(s)", outcome.copied));
            }
            Err(e) => {
                self.console.err(&format!(
                    "Unable to read hook templates from {}: {e}",
                    self.config.hooks_dir.display()
                ));
            }
        }
    }

    /// Offer to register the configured commands in the project manifest.
    ///
    /// Skipped silently when no commands are configured; declining the
    /// prompt leaves the manifest untouched.
    fn manifest_step(&mut self, project_dir: &Path, report: &mut InstallReport) {
        if self.config.post_install_cmds.is_empty() && self.config.post_update_cmds.is_empty() {
            return;
        }

        let manifest_path = self.config.manifest_path(project_dir);
        let question = format!("Register hook commands in {}?", manifest_path.display());
        if !self.prompt.confirm(&question) {
            self.console.out("Skipping manifest hook registration");
            return;
        }

        match manifest::merge_and_write(
            &manifest_path,
            &self.config.post_install_cmds,
            &self.config.post_update_cmds,
        ) {
            Ok(()) => {
                report.manifest_updated = true;
                self.console.out(&format!(
                    "Registered hook commands in {}",
                    manifest_path.display()
                ));
            }
            Err(e) => {
                self.console
                    .err(&format!("Unable to register hook commands: {e}"));
                report.failed = true;
            }
        }
    }
}

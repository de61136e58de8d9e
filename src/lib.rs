pub mod config;
pub mod console;
pub mod hooks;
pub mod installer;
pub mod manifest;
pub mod prompt;
pub mod verify;

use config::InstallerConfig;
use console::StdConsole;
use installer::{InstallReport, Installer};
use prompt::StdinPrompt;

/// Run a full installation with the bundled hook templates and the
/// process stdio collaborators.
///
/// This is the binary entry point. Library callers should construct an
/// [`installer::Installer`] directly to inject their own config, prompt,
/// and console.
pub fn run() -> InstallReport {
    Installer::new(InstallerConfig::bundled(), StdinPrompt, StdConsole).run()
}

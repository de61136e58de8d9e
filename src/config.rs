use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Manifest filename used when none is configured.
pub const DEFAULT_MANIFEST_FILE: &str = "composer.json";

/// Immutable per-run configuration for the installer.
///
/// Built once and handed to [`crate::installer::Installer`] at
/// construction; nothing here changes during a run.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// Directory holding the bundled hook templates.
    pub hooks_dir: PathBuf,
    /// Manifest filename, resolved against the project directory.
    pub manifest_file: String,
    /// Commands to register under `post-install-cmd`.
    pub post_install_cmds: Vec<String>,
    /// Commands to register under `post-update-cmd`.
    pub post_update_cmds: Vec<String>,
    /// Project directory override; `None` resolves the working directory.
    pub project_dir: Option<PathBuf>,
}

impl InstallerConfig {
    /// Configuration for the shipped binary: hook templates in a `hooks`
    /// directory next to the executable, no manifest commands.
    pub fn bundled() -> Self {
        Self::with_hooks_dir(default_hooks_dir())
    }

    pub fn with_hooks_dir(hooks_dir: impl Into<PathBuf>) -> Self {
        InstallerConfig {
            hooks_dir: hooks_dir.into(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            post_install_cmds: Vec::new(),
            post_update_cmds: Vec::new(),
            project_dir: None,
        }
    }

    /// The project directory for this run: the override when set,
    /// otherwise the process working directory.
    pub fn resolve_project_dir(&self) -> io::Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir(),
        }
    }

    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.manifest_file)
    }
}

/// `hooks/` next to the executable, falling back to a relative `hooks/`
/// when the executable path cannot be determined.
fn default_hooks_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("hooks")))
        .unwrap_or_else(|| PathBuf::from("hooks"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_has_no_commands() {
        let config = InstallerConfig::bundled();
        assert!(config.post_install_cmds.is_empty());
        assert!(config.post_update_cmds.is_empty());
        assert_eq!(config.manifest_file, DEFAULT_MANIFEST_FILE);
    }

    #[test]
    fn project_dir_override_wins() {
        let mut config = InstallerConfig::with_hooks_dir("/opt/githookd/hooks");
        config.project_dir = Some(PathBuf::from("/srv/project"));
        assert_eq!(
            config.resolve_project_dir().unwrap(),
            PathBuf::from("/srv/project")
        );
    }

    #[test]
    fn without_override_the_working_directory_is_used() {
        let config = InstallerConfig::with_hooks_dir("/opt/githookd/hooks");
        assert_eq!(
            config.resolve_project_dir().unwrap(),
            env::current_dir().unwrap()
        );
    }

    #[test]
    fn manifest_path_joins_project_dir() {
        let config = InstallerConfig::with_hooks_dir("/opt/githookd/hooks");
        assert_eq!(
            config.manifest_path(Path::new("/srv/project")),
            PathBuf::from("/srv/project/composer.json")
        );
    }
}

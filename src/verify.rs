use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of checking the project's Git directories.
#[derive(Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// `.git` and `.git/hooks` both already existed.
    Ready,
    /// `.git` existed; `.git/hooks` was missing and has been created.
    CreatedHooksDir,
    /// No `.git` directory: the project is not a Git repository.
    MissingGitRepo,
}

/// Errors that can occur while preparing the hooks directory.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("failed to create {path}: {source}")]
    CreateHooksDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check that `project_dir` is a Git repository with a hooks directory,
/// creating `.git/hooks` when absent.
pub fn verify(project_dir: &Path) -> Result<VerifyOutcome, VerifyError> {
    let git_dir = project_dir.join(".git");
    if !git_dir.is_dir() {
        return Ok(VerifyOutcome::MissingGitRepo);
    }

    let hooks_dir = git_dir.join("hooks");
    if hooks_dir.is_dir() {
        return Ok(VerifyOutcome::Ready);
    }

    match fs::create_dir(&hooks_dir) {
        Ok(()) => Ok(VerifyOutcome::CreatedHooksDir),
        Err(source) => Err(VerifyError::CreateHooksDir {
            path: hooks_dir,
            source,
        }),
    }
}

use std::fs;
use std::io;
use std::path::Path;

/// The Git hooks eligible for installation.
///
/// <https://www.kernel.org/pub/software/scm/git/docs/githooks.html>
pub const HOOK_WHITELIST: [&str; 18] = [
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "post-receive",
    "post-update",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
];

/// Returns true when `name` is a recognized Git hook filename.
///
/// Exact, case-sensitive match against [`HOOK_WHITELIST`]; no extension
/// stripping, so `pre-commit.sample` is not a hook.
pub fn is_allowed_hook(name: &str) -> bool {
    HOOK_WHITELIST.contains(&name)
}

/// A hook that could not be copied. Recoverable: the copy run continues
/// with the remaining hooks.
#[derive(Debug)]
pub struct CopyFailure {
    pub hook: String,
    pub error: io::Error,
}

/// Result of a [`copy_hooks`] run.
#[derive(Debug, Default)]
pub struct CopyOutcome {
    pub copied: usize,
    pub failures: Vec<CopyFailure>,
}

/// Copy whitelisted hook files from `source_dir` into `dest_dir`.
///
/// Lists `source_dir` non-recursively, keeps entries whose file name is in
/// the whitelist, and copies each to `dest_dir/<name>`, overwriting any
/// existing file. Per-file failures are collected in the outcome rather
/// than aborting the run.
///
/// Returns `Err` only when `source_dir` itself cannot be listed.
pub fn copy_hooks(source_dir: &Path, dest_dir: &Path) -> io::Result<CopyOutcome> {
    let mut outcome = CopyOutcome::default();

    for entry in fs::read_dir(source_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) if is_allowed_hook(name) => name,
            _ => continue,
        };

        // fs::copy preserves the source permission bits, so executable
        // templates land executable in .git/hooks.
        match fs::copy(entry.path(), dest_dir.join(name)) {
            Ok(_) => outcome.copied += 1,
            Err(error) => outcome.failures.push(CopyFailure {
                hook: name.to_string(),
                error,
            }),
        }
    }

    Ok(outcome)
}

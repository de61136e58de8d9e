use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Manifest key holding commands run after dependency installation.
pub const POST_INSTALL_KEY: &str = "post-install-cmd";
/// Manifest key holding commands run after dependency updates.
pub const POST_UPDATE_KEY: &str = "post-update-cmd";

/// Errors that can occur while merging hook commands into the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("no hook commands configured, nothing to install")]
    NothingToInstall,
    #[error("manifest {0} is not readable and writable")]
    Unwritable(PathBuf),
    #[error("failed to read manifest: {0}")]
    Read(#[from] io::Error),
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("manifest root is not a JSON object")]
    NotAnObject,
    #[error("manifest key {0} does not hold a list of commands")]
    InvalidHookKey(String),
    #[error("failed to write manifest: {0}")]
    Write(io::Error),
}

/// Append hook commands to a parsed manifest document.
///
/// For each hook key with a non-empty incoming list: an existing array is
/// appended to in place (prior entries and their order untouched), an
/// absent key is set to the new list. An existing value of any other type
/// is an error; replacing it could drop commands the user already has.
pub fn merge_hook_commands(
    doc: &mut Value,
    post_install: &[String],
    post_update: &[String],
) -> Result<(), ManifestError> {
    let root = doc.as_object_mut().ok_or(ManifestError::NotAnObject)?;
    append_commands(root, POST_INSTALL_KEY, post_install)?;
    append_commands(root, POST_UPDATE_KEY, post_update)?;
    Ok(())
}

fn append_commands(
    root: &mut Map<String, Value>,
    key: &str,
    commands: &[String],
) -> Result<(), ManifestError> {
    if commands.is_empty() {
        return Ok(());
    }
    let slot = root
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));
    let list = slot
        .as_array_mut()
        .ok_or_else(|| ManifestError::InvalidHookKey(key.to_string()))?;
    list.extend(commands.iter().map(|cmd| Value::String(cmd.clone())));
    Ok(())
}

/// Merge the configured hook commands into the manifest file at `path`
/// and rewrite it in full.
///
/// Empty file content parses as an empty object. The rewrite goes through
/// a temp file in the same directory followed by a rename, so a failed
/// write never leaves a truncated manifest behind.
pub fn merge_and_write(
    path: &Path,
    post_install: &[String],
    post_update: &[String],
) -> Result<(), ManifestError> {
    if post_install.is_empty() && post_update.is_empty() {
        return Err(ManifestError::NothingToInstall);
    }

    // Probe read+write access up front so permission problems surface
    // before any content is touched.
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|_| ManifestError::Unwritable(path.to_path_buf()))?;

    let content = fs::read_to_string(path)?;
    let mut doc: Value = if content.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str(&content)?
    };

    merge_hook_commands(&mut doc, post_install, post_update)?;

    let mut serialized = serde_json::to_string_pretty(&doc)?;
    serialized.push('\n');
    write_atomic(path, &serialized).map_err(ManifestError::Write)
}

fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write as _;
    use tempfile::{tempdir, NamedTempFile};

    fn cmds(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ---- Pure merge ----

    #[test]
    fn merge_into_empty_object_sets_both_keys() {
        let mut doc = json!({});
        merge_hook_commands(&mut doc, &cmds(&["cmd-a"]), &cmds(&["cmd-b"])).unwrap();
        assert_eq!(
            doc,
            json!({"post-install-cmd": ["cmd-a"], "post-update-cmd": ["cmd-b"]})
        );
    }

    #[test]
    fn merge_appends_to_existing_commands() {
        let mut doc = json!({"post-install-cmd": ["first"]});
        merge_hook_commands(&mut doc, &cmds(&["second"]), &[]).unwrap();
        assert_eq!(doc, json!({"post-install-cmd": ["first", "second"]}));
    }

    #[test]
    fn merge_preserves_unrelated_keys() {
        let mut doc = json!({"name": "acme/project", "require": {"php": ">=8.1"}});
        merge_hook_commands(&mut doc, &cmds(&["cmd-a"]), &[]).unwrap();
        assert_eq!(doc["name"], "acme/project");
        assert_eq!(doc["require"]["php"], ">=8.1");
        assert_eq!(doc["post-install-cmd"], json!(["cmd-a"]));
    }

    #[test]
    fn merge_with_empty_list_leaves_key_absent() {
        let mut doc = json!({});
        merge_hook_commands(&mut doc, &[], &cmds(&["cmd-b"])).unwrap();
        assert!(doc.get("post-install-cmd").is_none());
        assert_eq!(doc["post-update-cmd"], json!(["cmd-b"]));
    }

    #[test]
    fn merge_into_non_object_fails() {
        let mut doc = json!(["not", "an", "object"]);
        let err = merge_hook_commands(&mut doc, &cmds(&["cmd-a"]), &[]).unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject));
    }

    #[test]
    fn merge_into_non_array_key_fails() {
        let mut doc = json!({"post-install-cmd": "a single command"});
        let err = merge_hook_commands(&mut doc, &cmds(&["cmd-a"]), &[]).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidHookKey(_)));
    }

    // ---- merge_and_write ----

    #[test]
    fn writes_merged_manifest_to_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        merge_and_write(file.path(), &cmds(&["cmd-a"]), &cmds(&["cmd-b"])).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({"post-install-cmd": ["cmd-a"], "post-update-cmd": ["cmd-b"]})
        );
    }

    #[test]
    fn empty_file_content_is_treated_as_empty_object() {
        let file = NamedTempFile::new().unwrap();

        merge_and_write(file.path(), &cmds(&["cmd-a"]), &[]).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(written, json!({"post-install-cmd": ["cmd-a"]}));
    }

    #[test]
    fn both_lists_empty_is_an_error_and_leaves_file_untouched() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"name\": \"acme/project\"}").unwrap();

        let err = merge_and_write(file.path(), &[], &[]).unwrap_err();

        assert!(matches!(err, ManifestError::NothingToInstall));
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "{\"name\": \"acme/project\"}");
    }

    #[test]
    fn missing_manifest_is_unwritable_and_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("composer.json");

        let err = merge_and_write(&path, &cmds(&["cmd-a"]), &[]).unwrap_err();

        assert!(matches!(err, ManifestError::Unwritable(_)));
        assert!(err.to_string().contains("composer.json"));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_manifest_is_rejected_unchanged() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("composer.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444)).unwrap();

        // Permission bits are not enforced for root; nothing to assert there.
        if OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = merge_and_write(&path, &cmds(&["cmd-a"]), &[]).unwrap_err();

        assert!(matches!(err, ManifestError::Unwritable(_)));
        assert!(err.to_string().contains("composer.json"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn invalid_json_is_a_parse_error_and_leaves_file_untouched() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ this is not json").unwrap();

        let err = merge_and_write(file.path(), &cmds(&["cmd-a"]), &[]).unwrap_err();

        assert!(matches!(err, ManifestError::Parse(_)));
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "{ this is not json");
    }

    #[test]
    fn no_leftover_temp_file_after_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("composer.json");
        std::fs::write(&path, "{}").unwrap();

        merge_and_write(&path, &cmds(&["cmd-a"]), &[]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["composer.json"]);
    }
}

use super::*;

fn dotfile_in(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".alias-d").join("dotfile.zsh")
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = AliasStore::load(dotfile_in(&dir)).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_save_creates_directory_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let mut store = AliasStore::load(&path).unwrap();
    store.push(AliasRecord::alias("alias ll='ls -la'")).unwrap();
    store.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "alias ll='ls -la'\n");
}

#[cfg(unix)]
#[test]
fn test_save_sets_executable_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let store = AliasStore::load(&path).unwrap();
    store.save().unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let mut store = AliasStore::load(&path).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();
    store.save().unwrap();

    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("dotfile.zsh")]);
}

#[test]
fn test_edit_cycle_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "alias g='git'\n\ngreet() {\n  echo hi\n}\n# stray comment\n").unwrap();

    let mut store = AliasStore::load(&path).unwrap();
    assert_eq!(store.len(), 2);
    let greet = store.find("greet").unwrap();
    store.set_active(greet, false).unwrap();
    store.push(AliasRecord::alias("alias -- ..='cd ..'")).unwrap();
    store.save().unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "alias g='git'\n# greet() {\n#   echo hi\n# }\nalias -- ..='cd ..'\n"
    );

    let reloaded = AliasStore::load(&path).unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn test_push_rejects_blank_body() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AliasStore::load(dotfile_in(&dir)).unwrap();
    assert!(store.push(AliasRecord::alias("   ")).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_index_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AliasStore::load(dotfile_in(&dir)).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();

    assert!(store.remove(1).is_err());
    assert!(store.set_active(5, false).is_err());
    assert!(store.set_body(1, "alias c='d'").is_err());
    assert!(store.set_kind(1, Kind::Function).is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_set_body_and_kind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AliasStore::load(dotfile_in(&dir)).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();

    store.set_definition(0, Kind::Function, "a() {\n  b \"$@\"\n}\n").unwrap();
    store.set_body(0, "a() {\n  c \"$@\"\n}\n").unwrap();
    assert_eq!(store.get(0).unwrap().name(), Some("a"));
    assert!(store.set_body(0, "\n").is_err());
}

#[test]
fn test_remove_returns_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AliasStore::load(dotfile_in(&dir)).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();
    store.push(AliasRecord::alias("alias c='d'")).unwrap();

    let removed = store.remove(0).unwrap();
    assert_eq!(removed.body, "alias a='b'");
    assert_eq!(store.find("c"), Some(0));
    assert_eq!(store.find("a"), None);
}

#[test]
fn test_reload_failure_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let mut store = AliasStore::load(&path).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();

    // A directory where the file should be makes the read fail.
    std::fs::create_dir_all(&path).unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_save_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join(".alias-d");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = AliasStore::load(blocker.join("dotfile.zsh")).unwrap();
    assert!(store.save().is_err());
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn test_push_rejects_bodies_that_do_not_fit_their_kind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AliasStore::load(dotfile_in(&dir)).unwrap();

    assert!(store.push(AliasRecord::function("echo hi\n")).is_err());
    assert!(store
        .push(AliasRecord {
            active: false,
            kind: Kind::Alias,
            body: "alias a='b'\nalias c='d'".into(),
        })
        .is_err());
    assert!(store.push(AliasRecord::alias("export A=1")).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_set_kind_rejects_function_body_as_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let mut store = AliasStore::load(&path).unwrap();
    store.push(AliasRecord::function("f() {\n  echo f\n}\n")).unwrap();

    assert!(store.set_kind(0, Kind::Alias).is_err());
    assert!(store.set_body(0, "alias f='echo f'").is_err());
    assert_eq!(store.get(0).unwrap().kind, Kind::Function);

    store.set_active(0, false).unwrap();
    store.save().unwrap();
    let reloaded = AliasStore::load(&path).unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn test_set_definition_changes_kind_and_body_together() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    let mut store = AliasStore::load(&path).unwrap();
    store.push(AliasRecord::function("f() {\n  echo f\n}\n")).unwrap();
    store.set_active(0, false).unwrap();

    store.set_definition(0, Kind::Alias, "alias f='echo f'").unwrap();
    assert!(store.set_definition(0, Kind::Function, "echo f").is_err());
    store.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# alias f='echo f'\n");
    let reloaded = AliasStore::load(&path).unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn test_failed_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dotfile_in(&dir);
    // A non-empty directory in place of the dotfile makes the final rename fail.
    std::fs::create_dir_all(path.join("occupied")).unwrap();

    let store = AliasStore {
        path: path.clone(),
        records: vec![AliasRecord::alias("alias a='b'")],
    };
    assert!(store.save().is_err());

    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("dotfile.zsh")]);
}

#[cfg(unix)]
#[test]
fn test_save_through_symlink_keeps_link() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("stow").join("aliases.zsh");
    std::fs::create_dir_all(real.parent().unwrap()).unwrap();
    std::fs::write(&real, "alias a='b'\n").unwrap();

    let link = dotfile_in(&dir);
    std::fs::create_dir_all(link.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut store = AliasStore::load(&link).unwrap();
    store.push(AliasRecord::alias("alias c='d'")).unwrap();
    store.save().unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&real).unwrap(), "alias a='b'\nalias c='d'\n");
}

#[cfg(unix)]
#[test]
fn test_save_through_dangling_symlink_creates_target() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("stow").join("aliases.zsh");
    let link = dir.path().join("dotfile.zsh");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut store = AliasStore::load(&link).unwrap();
    store.push(AliasRecord::alias("alias a='b'")).unwrap();
    store.save().unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&real).unwrap(), "alias a='b'\n");
}

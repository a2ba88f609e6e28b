use std::fs;
use std::path::PathBuf;

const UPDATE_VAR: &str = "OBST_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare `actual` against `tests/snapshots/<name>`, or rewrite it when
/// `OBST_UPDATE_SNAPSHOTS` is set.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("snapshot {} unreadable: {}", path.display(), err));
    let expected = expected.replace("\r\n", "\n");
    let actual = actual.replace("\r\n", "\n");
    if expected == actual {
        return;
    }

    let line = expected
        .lines()
        .zip(actual.lines())
        .position(|(want, got)| want != got)
        .unwrap_or_else(|| expected.lines().count().min(actual.lines().count()));
    panic!(
        "snapshot {} differs at line {} (set {}=1 to regenerate)\n--- expected\n{}\n--- actual\n{}",
        path.display(),
        line + 1,
        UPDATE_VAR,
        expected,
        actual
    );
}

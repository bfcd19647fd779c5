use std::fs;

use encoding_rs::Encoding;
use tenc_core::codec::registry;
use tenc_core::{replace_file_in_place, Newline, ReplaceStage, ReplaceTransaction, TencError};

fn utf8() -> &'static Encoding {
    registry::resolve("utf-8").unwrap()
}

#[test]
fn success_leaves_converted_target_and_no_working_files() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("note.txt");
    fs::write(&target, b"a\r\nb\r\n").unwrap();

    let mut warnings = Vec::new();
    replace_file_in_place(&target, utf8(), utf8(), false, Newline::Lf, &mut warnings).unwrap();

    assert_eq!(fs::read(&target).unwrap(), b"a\nb\n");
    let tx = ReplaceTransaction::new(&target);
    assert_eq!(tx.tmp_path().file_name().unwrap(), "note.txt.tmp");
    assert_eq!(tx.bak_path().file_name().unwrap(), "note.txt.bak");
    assert!(!tx.tmp_path().exists());
    assert!(!tx.bak_path().exists());
    assert!(warnings.is_empty());
}

#[test]
fn convert_failure_leaves_target_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("broken.txt");
    fs::write(&target, b"ok\x80").unwrap();

    let mut warnings = Vec::new();
    let err = replace_file_in_place(&target, utf8(), utf8(), false, Newline::Lf, &mut warnings)
        .unwrap_err();
    assert!(matches!(err, TencError::Decode(_)), "got {err:?}");

    assert_eq!(fs::read(&target).unwrap(), b"ok\x80");
    let tx = ReplaceTransaction::new(&target);
    assert!(!tx.tmp_path().exists());
    assert!(!tx.bak_path().exists());
    assert!(warnings.is_empty());
}

#[test]
fn commit_failure_recovers_original_from_backup() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("note.txt");
    fs::write(&target, b"x\r\ny").unwrap();

    let tx = ReplaceTransaction::new(&target);
    tx.write_converted(utf8(), utf8(), false, Newline::Lf).unwrap();
    tx.swap().unwrap();

    // Make the commit rename fail after the swap already happened.
    fs::remove_file(tx.tmp_path()).unwrap();
    let err = tx.commit().unwrap_err();
    assert!(
        matches!(
            err,
            TencError::Replace {
                stage: ReplaceStage::Commit,
                ..
            }
        ),
        "got {err:?}"
    );

    let mut warnings = Vec::new();
    tx.recover(&mut warnings);

    assert_eq!(fs::read(&target).unwrap(), b"x\r\ny");
    assert!(!tx.tmp_path().exists());
    assert!(!tx.bak_path().exists());
    assert!(warnings.is_empty());
}

#[test]
fn recovery_with_committed_target_drops_backup() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("note.txt");
    fs::write(&target, b"p\r\nq").unwrap();

    let tx = ReplaceTransaction::new(&target);
    tx.write_converted(utf8(), utf8(), false, Newline::Lf).unwrap();
    tx.swap().unwrap();
    tx.commit().unwrap();

    // The converted file made it to the target; recovery must keep it and
    // clear the backup.
    let mut warnings = Vec::new();
    tx.recover(&mut warnings);

    assert_eq!(fs::read(&target).unwrap(), b"p\nq");
    assert!(!tx.tmp_path().exists());
    assert!(!tx.bak_path().exists());
    assert!(warnings.is_empty());
}

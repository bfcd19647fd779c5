// crates/tenc-core/src/replace.rs
//
// In-place file conversion as a tmp-write / rename-swap transaction:
//
//   write target.tmp -> rename target to target.bak -> rename target.tmp to
//   target -> delete target.bak
//
// At every step either the original or the fully converted content is
// reachable on disk; target.bak holds the original during the narrow window
// where target itself does not exist.

use std::fmt;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::codec::convert::convert;
use crate::codec::newline::Newline;
use crate::error::{Result, TencError};

/// Rename step named in `TencError::Replace`. Failures while writing the
/// temporary file keep their own error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceStage {
    Swap,
    Commit,
}

impl fmt::Display for ReplaceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceStage::Swap => f.write_str("backup rename"),
            ReplaceStage::Commit => f.write_str("commit rename"),
        }
    }
}

/// One in-place replacement of a single target path. Callers must not run
/// two transactions against the same path concurrently.
pub struct ReplaceTransaction {
    target: PathBuf,
    tmp: PathBuf,
    bak: PathBuf,
}

impl ReplaceTransaction {
    pub fn new(target: &Path) -> ReplaceTransaction {
        ReplaceTransaction {
            target: target.to_path_buf(),
            tmp: sibling(target, ".tmp"),
            bak: sibling(target, ".bak"),
        }
    }

    pub fn tmp_path(&self) -> &Path {
        &self.tmp
    }

    pub fn bak_path(&self) -> &Path {
        &self.bak
    }

    /// Stage 1: stream the converted content to the sibling tmp path.
    pub fn write_converted(
        &self,
        from: &'static Encoding,
        to: &'static Encoding,
        emit_preamble: bool,
        newline: Newline,
    ) -> Result<()> {
        let mut reader = BufReader::new(fs::File::open(&self.target)?);
        let mut writer = BufWriter::new(fs::File::create(&self.tmp)?);
        convert(&mut reader, from, &mut writer, to, emit_preamble, newline)
    }

    /// Stage 2: move the original out of the way.
    pub fn swap(&self) -> Result<()> {
        fs::rename(&self.target, &self.bak).map_err(|source| TencError::Replace {
            stage: ReplaceStage::Swap,
            source,
        })
    }

    /// Stage 3: land the converted file at the target path.
    pub fn commit(&self) -> Result<()> {
        fs::rename(&self.tmp, &self.target).map_err(|source| TencError::Replace {
            stage: ReplaceStage::Commit,
            source,
        })
    }

    /// Best-effort removal of a lingering tmp file.
    pub fn remove_tmp(&self, warnings: &mut Vec<String>) {
        if self.tmp.exists() {
            if let Err(e) = fs::remove_file(&self.tmp) {
                warnings.push(format!(
                    "failed to delete tmp file {}: {e}",
                    self.tmp.display()
                ));
            }
        }
    }

    /// Recovery after a failure past the swap: restore the backup if the
    /// target is missing, drop it if the target made it, clear the tmp file.
    pub fn recover(&self, warnings: &mut Vec<String>) {
        if self.bak.exists() {
            if self.target.exists() {
                if let Err(e) = fs::remove_file(&self.bak) {
                    warnings.push(format!(
                        "failed to delete backup file {}: {e}",
                        self.bak.display()
                    ));
                }
            } else if let Err(e) = fs::rename(&self.bak, &self.target) {
                warnings.push(format!(
                    "failed to restore backup {} to {}: {e}",
                    self.bak.display(),
                    self.target.display()
                ));
            }
        }
        self.remove_tmp(warnings);
    }

    /// Stage 4: drop the backup after a successful commit.
    pub fn cleanup_success(&self, warnings: &mut Vec<String>) {
        if self.bak.exists() {
            if let Err(e) = fs::remove_file(&self.bak) {
                warnings.push(format!(
                    "failed to delete backup file {}: {e}",
                    self.bak.display()
                ));
            }
        }
    }
}

/// Converts `target` in place. On error the original content is back (or
/// still) at `target` and working files are cleared. Cleanup problems land
/// in `warnings` on both paths and never upgrade the primary result: once
/// the converted content sits at the target path the operation succeeded.
pub fn replace_file_in_place(
    target: &Path,
    from: &'static Encoding,
    to: &'static Encoding,
    emit_preamble: bool,
    newline: Newline,
    warnings: &mut Vec<String>,
) -> Result<()> {
    let tx = ReplaceTransaction::new(target);

    if let Err(e) = tx.write_converted(from, to, emit_preamble, newline) {
        tx.remove_tmp(warnings);
        return Err(e);
    }
    if let Err(e) = tx.swap() {
        tx.remove_tmp(warnings);
        return Err(e);
    }
    if let Err(e) = tx.commit() {
        tx.recover(warnings);
        return Err(e);
    }
    tx.cleanup_success(warnings);
    Ok(())
}

fn sibling(target: &Path, suffix: &str) -> PathBuf {
    let mut s = target.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

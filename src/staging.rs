use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static STAGE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A copy of a font file in a scratch location. The copy is removed when
/// this value is dropped.
#[derive(Debug)]
pub struct StagedFont {
    path: PathBuf,
    stem: String,
}

impl StagedFont {
    /// `dir` may be relative; the staged path is always absolute so it can
    /// be turned into a file URI.
    pub fn create(dir: &Path, prefix: &str, stem: &str, bytes: &[u8]) -> io::Result<Self> {
        let path = std::path::absolute(dir)?.join(staged_file_name(prefix, stem));
        if let Err(err) = fs::write(&path, bytes) {
            let _ = fs::remove_file(&path);
            return Err(err);
        }
        Ok(Self {
            path,
            stem: stem.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stem of the original file, not of the staged copy.
    pub fn stem(&self) -> &str {
        &self.stem
    }
}

impl Drop for StagedFont {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::debug!("could not remove {}: {}", self.path.display(), err),
        }
    }
}

fn staged_file_name(prefix: &str, stem: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = STAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}_{}_{}.ttf", prefix, stem, nanos, seq)
}

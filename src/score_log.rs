use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::games::GameKind;

/// One finished quiz as it lands in the score log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub game: GameKind,
    pub questions: usize,
    pub retries: u32,
    pub points: u32,
}

/// Append-only CSV of quiz completions. Writing is best-effort; callers
/// ignore failures so a read-only home never interrupts play.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new() -> Option<Self> {
        AppDirs::score_log_path().map(|path| Self { path })
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, record: &ScoreRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // If the log doesn't exist yet, we need to emit a header
        let needs_header = !self.path.exists();

        let mut log_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(log_file, "date,game,questions,retries,points")?;
        }

        writeln!(
            log_file,
            "{},{},{},{},{}",
            Local::now().format("%c"),
            record.game,
            record.questions,
            record.retries,
            record.points,
        )?;

        Ok(())
    }
}

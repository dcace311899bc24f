use crate::games::GameKind;
use crate::quiz::QuizReport;
use crate::score_log::{ScoreLog, ScoreRecord};

/// Top-level container: cumulative score across the games played this run.
/// Receives exactly one report per quiz lifetime (0 points for an early
/// exit, a fixed positive value for a full completion).
#[derive(Debug)]
pub struct Session {
    pub score: u32,
    pub games_completed: u32,
    pub last_report: Option<(GameKind, QuizReport)>,
    log: Option<ScoreLog>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_log(ScoreLog::new())
    }

    pub fn with_log(log: Option<ScoreLog>) -> Self {
        Self {
            score: 0,
            games_completed: 0,
            last_report: None,
            log,
        }
    }

    /// Completion callback from a quiz: accumulate the points and append
    /// the score log (best-effort, failures never interrupt play).
    pub fn on_quiz_report(&mut self, kind: GameKind, report: QuizReport) {
        self.score += report.points;
        if report.points > 0 {
            self.games_completed += 1;
        }
        self.last_report = Some((kind, report));

        if let Some(ref log) = self.log {
            let _ = log.append(&ScoreRecord {
                game: kind,
                questions: report.questions_answered,
                retries: report.retries,
                points: report.points,
            });
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

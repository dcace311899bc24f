use directories::ProjectDirs;
use std::path::PathBuf;

/// Paths for everything the app persists.
pub struct AppDirs;

impl AppDirs {
    /// CSV of finished games. Prefers the XDG state dir when HOME is set,
    /// otherwise the platform-local data dir.
    pub fn score_log_path() -> Option<PathBuf> {
        match std::env::var("HOME") {
            Ok(home) => Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("numo")
                    .join("scores.csv"),
            ),
            Err(_) => project_dirs().map(|pd| pd.data_local_dir().join("scores.csv")),
        }
    }

    /// JSON settings file in the platform config dir.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|pd| pd.config_dir().join("config.json"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "numo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_log_lands_in_state_dir_with_home() {
        if std::env::var("HOME").is_ok() {
            let path = AppDirs::score_log_path().unwrap();
            assert!(path.ends_with(".local/state/numo/scores.csv"));
        }
    }
}

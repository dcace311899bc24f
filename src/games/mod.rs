pub mod comparison;
pub mod fill_blank;
pub mod matching;
pub mod true_false;

use clap::ValueEnum;

/// One of the quiz mini-games. Each kind owns a fixed, hand-authored
/// question bank and a theme used to seed the decorative backdrop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum GameKind {
    Matching,
    Comparison,
    FillBlank,
    TrueFalse,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Matching,
        GameKind::Comparison,
        GameKind::FillBlank,
        GameKind::TrueFalse,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Matching => "Match the Pairs",
            GameKind::Comparison => "Compare the Numbers",
            GameKind::FillBlank => "Fill in the Blank",
            GameKind::TrueFalse => "True or False?",
        }
    }

    /// Seed string for the backdrop; stable across runs per game.
    pub fn theme(&self) -> &'static str {
        match self {
            GameKind::Matching => "matching",
            GameKind::Comparison => "comparison",
            GameKind::FillBlank => "fillblank",
            GameKind::TrueFalse => "truefalse",
        }
    }

    pub fn question_count(&self) -> usize {
        match self {
            GameKind::Matching => matching::ROUNDS.len(),
            GameKind::Comparison => comparison::QUESTIONS.len(),
            GameKind::FillBlank => fill_blank::QUESTIONS.len(),
            GameKind::TrueFalse => true_false::QUESTIONS.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_kind_display() {
        assert_eq!(GameKind::Matching.to_string(), "Matching");
        assert_eq!(GameKind::FillBlank.to_string(), "FillBlank");
    }

    #[test]
    fn test_all_kinds_have_questions() {
        for kind in GameKind::ALL {
            assert!(kind.question_count() > 0, "{kind} bank is empty");
            assert!(!kind.title().is_empty());
            assert!(!kind.theme().is_empty());
        }
    }

    #[test]
    fn test_themes_are_distinct() {
        let themes: std::collections::HashSet<_> =
            GameKind::ALL.iter().map(|k| k.theme()).collect();
        assert_eq!(themes.len(), GameKind::ALL.len());
    }
}

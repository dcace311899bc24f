/// Fill-in-the-blank question. `tokens` is the sequence as displayed,
/// with "?" marking the blank; the answer is always a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankQuestion {
    pub tokens: &'static [&'static str],
    pub answer: &'static str,
    pub hint: &'static str,
}

pub const QUESTIONS: &[BlankQuestion] = &[
    BlankQuestion {
        tokens: &["2", "4", "6", "?", "10"],
        answer: "8",
        hint: "Rule: +2 each step",
    },
    BlankQuestion {
        tokens: &["5", "10", "15", "?", "25"],
        answer: "20",
        hint: "Rule: +5 each step",
    },
    BlankQuestion {
        tokens: &["1", "2", "4", "?", "16"],
        answer: "8",
        hint: "Rule: double each step",
    },
    BlankQuestion {
        tokens: &["3", "6", "9", "?", "15"],
        answer: "12",
        hint: "Rule: +3 each step",
    },
    BlankQuestion {
        tokens: &["5", "?"],
        answer: "10",
        hint: "2 times as much: 5 × 2",
    },
    BlankQuestion {
        tokens: &["6", "?"],
        answer: "30",
        hint: "5 times as much: 6 × 5",
    },
    BlankQuestion {
        tokens: &["3", "?"],
        answer: "24",
        hint: "8 times as much: 3 × 8",
    },
    BlankQuestion {
        tokens: &["7", "?"],
        answer: "14",
        hint: "2 times as much: 7 × 2",
    },
    BlankQuestion {
        tokens: &["12", ":", "3", "=", "?"],
        answer: "4",
        hint: "12 reduced 3 times: 12 ÷ 3",
    },
    BlankQuestion {
        tokens: &["16", ":", "4", "=", "?"],
        answer: "4",
        hint: "16 reduced 4 times: 16 ÷ 4",
    },
    BlankQuestion {
        tokens: &["20", ":", "5", "=", "?"],
        answer: "4",
        hint: "20 reduced 5 times: 20 ÷ 5",
    },
    BlankQuestion {
        tokens: &["18", ":", "2", "=", "?"],
        answer: "9",
        hint: "18 reduced 2 times: 18 ÷ 2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_numeric() {
        for q in QUESTIONS {
            assert!(q.answer.parse::<u32>().is_ok(), "bad answer: {}", q.answer);
        }
    }

    #[test]
    fn test_every_question_has_one_blank() {
        for q in QUESTIONS {
            let blanks = q.tokens.iter().filter(|t| **t == "?").count();
            assert_eq!(blanks, 1);
        }
    }

    #[test]
    fn test_hints_present() {
        for q in QUESTIONS {
            assert!(!q.hint.is_empty());
        }
    }
}

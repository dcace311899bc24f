/// Multiple-choice scaling question: what does the number become after
/// being scaled up? A few questions also accept the answer typed
/// directly; for those `numeric_answer` holds the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonQuestion {
    pub prompt: &'static str,
    pub options: [u32; 4],
    pub correct: usize,
    pub numeric_answer: Option<u32>,
}

pub const QUESTIONS: &[ComparisonQuestion] = &[
    ComparisonQuestion {
        prompt: "Scale 4 up 3 times to get ___",
        options: [6, 7, 12, 8],
        correct: 2,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "Scale 5 up 2 times to get ___",
        options: [7, 8, 9, 10],
        correct: 3,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "Scale 6 up 4 times to get ___",
        options: [10, 18, 24, 26],
        correct: 2,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "Scale 7 up 5 times to get ___",
        options: [35, 30, 25, 40],
        correct: 0,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "Scale 9 up 3 times to get ___",
        options: [18, 21, 24, 27],
        correct: 3,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "A boy has 2 notebooks. Lan has 5 times as many. Lan has ___ notebooks.",
        options: [7, 8, 10, 9],
        correct: 2,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "One rabbit has 4 legs. 6 rabbits have how many times the legs of one rabbit?",
        options: [3, 4, 5, 6],
        correct: 3,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "A row has 8 chairs. Scaled up 3 times, that makes ___ chairs.",
        options: [16, 20, 24, 28],
        correct: 2,
        numeric_answer: None,
    },
    ComparisonQuestion {
        prompt: "A number scaled up 4 times gives 20. The number is ___",
        options: [4, 5, 6, 8],
        correct: 1,
        numeric_answer: Some(5),
    },
    ComparisonQuestion {
        prompt: "A number scaled up 6 times gives 42. The number is ___",
        options: [7, 6, 8, 9],
        correct: 0,
        numeric_answer: Some(7),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_index_in_bounds() {
        for q in QUESTIONS {
            assert!(q.correct < q.options.len());
        }
    }

    #[test]
    fn test_options_are_distinct() {
        for q in QUESTIONS {
            let mut opts = q.options;
            opts.sort_unstable();
            opts.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
        }
    }

    #[test]
    fn test_numeric_answer_matches_correct_option() {
        for q in QUESTIONS {
            if let Some(value) = q.numeric_answer {
                assert_eq!(q.options[q.correct], value);
            }
        }
    }

    #[test]
    fn test_bank_has_typed_answer_questions() {
        assert!(QUESTIONS.iter().any(|q| q.numeric_answer.is_some()));
    }
}

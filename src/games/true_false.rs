/// Extra step demanded by a false statement: after spotting that it is
/// wrong, the player must also type the corrected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub value: u32,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueFalseQuestion {
    pub statement: &'static str,
    pub answer: bool,
    pub explanation: &'static str,
    pub correction: Option<Correction>,
}

pub const QUESTIONS: &[TrueFalseQuestion] = &[
    TrueFalseQuestion {
        statement: "A road is 12 km long. Shortened 3 times, 4 km remain.",
        answer: true,
        explanation: "Right, 12 ÷ 3 = 4",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "Grandma has 24 eggs, shared evenly into 6 baskets, 3 eggs per basket.",
        answer: false,
        explanation: "Wrong, 24 ÷ 6 = 4 (4 eggs per basket)",
        correction: Some(Correction {
            value: 4,
            prompt: "Type the right number of eggs per basket",
        }),
    },
    TrueFalseQuestion {
        statement: "A tree is 18 m tall. Reduced 3 times, 9 m remain.",
        answer: false,
        explanation: "Wrong, 18 ÷ 3 = 6 (6 m remain)",
        correction: Some(Correction {
            value: 6,
            prompt: "Type the right height (m)",
        }),
    },
    TrueFalseQuestion {
        statement: "A baker makes 20 cakes. Reduced 5 times, 4 cakes remain.",
        answer: true,
        explanation: "Right, 20 ÷ 5 = 4",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "A shop has 40 notebooks. Reduced 4 times, 10 notebooks remain.",
        answer: true,
        explanation: "Right, 40 ÷ 4 = 10",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "A churn holds 12 litres of milk. Reduced 2 times, 8 litres remain.",
        answer: false,
        explanation: "Wrong, 12 ÷ 2 = 6 (6 litres remain)",
        correction: Some(Correction {
            value: 6,
            prompt: "Type the right number of litres",
        }),
    },
    TrueFalseQuestion {
        statement: "A 30 m bolt of cloth is cut into 5 equal parts, each part 6 m long.",
        answer: true,
        explanation: "Right, 30 ÷ 5 = 6",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "A class has 18 pupils. Reduced 3 times, 9 pupils remain.",
        answer: false,
        explanation: "Wrong, 18 ÷ 3 = 6 (6 pupils remain)",
        correction: Some(Correction {
            value: 6,
            prompt: "Type the right number of pupils",
        }),
    },
    TrueFalseQuestion {
        statement: "Sowing by hand takes 60 kg of seed; a machine saves 3 times as much, needing only 20 kg.",
        answer: true,
        explanation: "Right, 60 ÷ 3 = 20",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "Mum buys 16 oranges, shared evenly among 4 people, 3 oranges each.",
        answer: false,
        explanation: "Wrong, 16 ÷ 4 = 4 (4 oranges each)",
        correction: Some(Correction {
            value: 4,
            prompt: "Type the right number of oranges each",
        }),
    },
    TrueFalseQuestion {
        statement: "A piece of string is 8 cm long. Reduced 4 times, 2 cm remain.",
        answer: true,
        explanation: "Right, 8 ÷ 4 = 2",
        correction: None,
    },
    TrueFalseQuestion {
        statement: "A weaver makes 15 baskets a day. If output drops 3 times, 5 baskets a day remain.",
        answer: true,
        explanation: "Right, 15 ÷ 3 = 5",
        correction: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_false_statements_carry_corrections() {
        for q in QUESTIONS {
            if q.answer {
                assert!(q.correction.is_none(), "true statement with correction");
            } else {
                assert!(q.correction.is_some(), "false statement without correction");
            }
        }
    }

    #[test]
    fn test_correction_prompts_present() {
        for q in QUESTIONS.iter().filter_map(|q| q.correction) {
            assert!(!q.prompt.is_empty());
            assert!(q.value > 0);
        }
    }

    #[test]
    fn test_explanations_present() {
        for q in QUESTIONS {
            assert!(!q.explanation.is_empty());
        }
    }
}

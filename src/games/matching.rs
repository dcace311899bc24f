/// One connectable pair in a matching round. `label` describes the
/// operation that turns the left number into the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub left: u32,
    pub right: u32,
    pub label: &'static str,
}

/// A matching round: every pair must be connected before the round is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingRound {
    pub title: &'static str,
    pub example: &'static str,
    pub pairs: &'static [Pair],
}

pub const ROUNDS: &[MatchingRound] = &[
    MatchingRound {
        title: "Match each number with its value after the reduction",
        example: "Example: 10 minus 5 = 5",
        pairs: &[
            Pair { left: 10, right: 5, label: "minus 5" },
            Pair { left: 20, right: 10, label: "minus 10" },
            Pair { left: 15, right: 12, label: "minus 3" },
        ],
    },
    MatchingRound {
        title: "Match each number with its value after the reduction",
        example: "Example: 8 minus 4 = 4",
        pairs: &[
            Pair { left: 8, right: 4, label: "minus 4" },
            Pair { left: 12, right: 6, label: "minus 6" },
            Pair { left: 18, right: 15, label: "minus 3" },
        ],
    },
    MatchingRound {
        title: "Scale each number up to reach its result",
        example: "Connect the starting number with its product",
        pairs: &[
            Pair { left: 5, right: 10, label: "2 times" },
            Pair { left: 6, right: 30, label: "5 times" },
            Pair { left: 3, right: 24, label: "8 times" },
        ],
    },
    MatchingRound {
        title: "Scale each number up to reach its result",
        example: "Example: 7 × 2 = 14",
        pairs: &[
            Pair { left: 7, right: 14, label: "2 times" },
            Pair { left: 4, right: 20, label: "5 times" },
            Pair { left: 8, right: 16, label: "2 times" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_have_pairs() {
        for round in ROUNDS {
            assert!(!round.pairs.is_empty());
        }
    }

    #[test]
    fn test_values_are_distinct_within_round() {
        // Connection checks are value-based, so sides must not repeat.
        for round in ROUNDS {
            let lefts: std::collections::HashSet<_> =
                round.pairs.iter().map(|p| p.left).collect();
            let rights: std::collections::HashSet<_> =
                round.pairs.iter().map(|p| p.right).collect();
            assert_eq!(lefts.len(), round.pairs.len());
            assert_eq!(rights.len(), round.pairs.len());
        }
    }
}

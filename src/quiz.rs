use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::games::{comparison, fill_blank, matching, true_false, GameKind};

/// Points reported for playing a quiz to the end.
pub const COMPLETION_POINTS: u32 = 10;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Feedback(Outcome),
    Complete,
}

/// A submitted answer; the variant must match the running game kind,
/// anything else is ignored by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Choice(usize),
    Text(String),
    Bool(bool),
    Connect { left: usize, right: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizMsg {
    Submit(Answer),
    SubmitCorrection(String),
    Tick,
    Exit,
}

/// Feedback dwell times, counted in event-loop ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    pub advance_ticks: u32,
    pub retry_ticks: u32,
    pub correction_ticks: u32,
}

impl Default for Delays {
    fn default() -> Self {
        // 1.5s to advance, 1.0s to retry, 0.8s lock/correction ack at 100ms ticks
        Self {
            advance_ticks: 15,
            retry_ticks: 10,
            correction_ticks: 8,
        }
    }
}

/// Where a pending feedback countdown lands when it expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    /// Next question, or `Complete` after the last one.
    Advance,
    /// Back to `Answering` on the same question with transient input cleared.
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    ticks_left: u32,
    to: Transition,
}

/// Completion report handed to the session, exactly once per quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizReport {
    pub points: u32,
    pub questions_answered: usize,
    pub retries: u32,
}

/// Borrowed view of the question the quiz is currently on.
#[derive(Clone, Copy, Debug)]
pub enum CurrentQuestion {
    Matching(&'static matching::MatchingRound),
    Comparison(&'static comparison::ComparisonQuestion),
    FillBlank(&'static fill_blank::BlankQuestion),
    TrueFalse(&'static true_false::TrueFalseQuestion),
}

/// One running mini-game. All four variants share this state machine:
/// `Answering -> Feedback(correct|incorrect) -> (Answering[next] | Complete)`,
/// with delayed transitions modeled as tick countdowns so that dropping
/// the quiz (or an explicit `Exit`) cancels anything still pending.
#[derive(Debug)]
pub struct Quiz {
    kind: GameKind,
    index: usize,
    phase: Phase,
    pending: Option<Pending>,
    delays: Delays,
    /// digits typed for fill-blank answers and true/false corrections
    input: String,
    /// left-column pick while building a matching connection
    selected_left: Option<usize>,
    /// pair indices already locked in the current matching round
    connected: HashSet<usize>,
    /// presentation order of the matching right column
    right_order: Vec<usize>,
    awaiting_correction: bool,
    correction_error: bool,
    retry_counts: Vec<u32>,
    reported: bool,
}

impl Quiz {
    pub fn new(kind: GameKind, delays: Delays) -> Self {
        let mut quiz = Self {
            kind,
            index: 0,
            phase: Phase::Answering,
            pending: None,
            delays,
            input: String::new(),
            selected_left: None,
            connected: HashSet::new(),
            right_order: Vec::new(),
            awaiting_correction: false,
            correction_error: false,
            retry_counts: vec![0; kind.question_count()],
            reported: false,
        };
        quiz.shuffle_right_order();
        quiz
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected_left(&self) -> Option<usize> {
        self.selected_left
    }

    pub fn connected(&self) -> &HashSet<usize> {
        &self.connected
    }

    pub fn right_order(&self) -> &[usize] {
        &self.right_order
    }

    pub fn awaiting_correction(&self) -> bool {
        self.awaiting_correction
    }

    pub fn correction_error(&self) -> bool {
        self.correction_error
    }

    pub fn question_count(&self) -> usize {
        self.kind.question_count()
    }

    pub fn total_retries(&self) -> u32 {
        self.retry_counts.iter().sum()
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current(&self) -> CurrentQuestion {
        match self.kind {
            GameKind::Matching => CurrentQuestion::Matching(&matching::ROUNDS[self.index]),
            GameKind::Comparison => {
                CurrentQuestion::Comparison(&comparison::QUESTIONS[self.index])
            }
            GameKind::FillBlank => CurrentQuestion::FillBlank(&fill_blank::QUESTIONS[self.index]),
            GameKind::TrueFalse => CurrentQuestion::TrueFalse(&true_false::QUESTIONS[self.index]),
        }
    }

    /// Append a typed digit (answer box or correction box).
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() || self.input.len() >= 6 {
            return;
        }
        if self.phase == Phase::Answering || self.awaiting_correction {
            self.input.push(c);
        }
    }

    pub fn pop_digit(&mut self) {
        if self.phase == Phase::Answering || self.awaiting_correction {
            self.input.pop();
        }
    }

    /// Lock-acknowledgement window: a correct non-final matching
    /// connection shows its banner on a countdown, but the round keeps
    /// accepting input so quick players are never throttled.
    fn in_lock_ack(&self) -> bool {
        self.kind == GameKind::Matching
            && matches!(self.phase, Phase::Feedback(Outcome::Correct))
            && matches!(
                self.pending,
                Some(Pending {
                    to: Transition::Resume,
                    ..
                })
            )
    }

    /// Pick a left-column entry of the current matching round. Locked
    /// entries are not selectable.
    pub fn pick_left(&mut self, i: usize) {
        if self.kind != GameKind::Matching {
            return;
        }
        if self.phase != Phase::Answering && !self.in_lock_ack() {
            return;
        }
        let pairs = matching::ROUNDS[self.index].pairs;
        if i < pairs.len() && !self.connected.contains(&i) {
            self.selected_left = Some(i);
        }
    }

    /// Advance the state machine by one message. Returns the completion
    /// report when the quiz reports, which happens at most once.
    pub fn update(&mut self, msg: QuizMsg) -> Option<QuizReport> {
        if self.reported {
            return None;
        }
        match msg {
            QuizMsg::Exit => {
                // Cancel any pending countdown so nothing advances after this.
                self.pending = None;
                self.phase = Phase::Complete;
                self.reported = true;
                Some(QuizReport {
                    points: 0,
                    questions_answered: self.index,
                    retries: self.total_retries(),
                })
            }
            QuizMsg::Tick => self.on_tick(),
            QuizMsg::Submit(answer) => {
                if self.phase != Phase::Answering && !self.in_lock_ack() {
                    return None;
                }
                self.submit(answer)
            }
            QuizMsg::SubmitCorrection(text) => {
                if !self.awaiting_correction {
                    return None;
                }
                self.submit_correction(&text)
            }
        }
    }

    fn on_tick(&mut self) -> Option<QuizReport> {
        let pending = self.pending.as_mut()?;
        pending.ticks_left = pending.ticks_left.saturating_sub(1);
        if pending.ticks_left > 0 {
            return None;
        }
        let to = pending.to;
        self.pending = None;
        match to {
            Transition::Advance => self.advance(),
            Transition::Resume => {
                self.phase = Phase::Answering;
                self.input.clear();
                self.selected_left = None;
                None
            }
        }
    }

    fn submit(&mut self, answer: Answer) -> Option<QuizReport> {
        match (self.kind, answer) {
            (GameKind::Comparison, Answer::Choice(i)) => {
                let q = &comparison::QUESTIONS[self.index];
                if i == q.correct {
                    self.mark_correct();
                } else if i < q.options.len() {
                    self.mark_incorrect();
                }
            }
            (GameKind::Comparison, Answer::Text(text)) => {
                // Only some questions take a typed value; for the rest a
                // text submission means nothing.
                let q = &comparison::QUESTIONS[self.index];
                if let Some(value) = q.numeric_answer {
                    if answers_match(&text, &value.to_string()) {
                        self.phase = Phase::Feedback(Outcome::Correct);
                        self.pending = Some(Pending {
                            ticks_left: self.delays.correction_ticks,
                            to: Transition::Advance,
                        });
                    } else {
                        self.mark_incorrect();
                    }
                }
            }
            (GameKind::FillBlank, Answer::Text(text)) => {
                let q = &fill_blank::QUESTIONS[self.index];
                if answers_match(&text, q.answer) {
                    self.mark_correct();
                } else {
                    self.mark_incorrect();
                }
            }
            (GameKind::TrueFalse, Answer::Bool(b)) => {
                let q = &true_false::QUESTIONS[self.index];
                if b != q.answer {
                    self.mark_incorrect();
                } else if let Some(_correction) = q.correction {
                    // Spotted the false statement; the corrected value is
                    // still owed before the advance is scheduled.
                    self.phase = Phase::Feedback(Outcome::Correct);
                    self.awaiting_correction = true;
                    self.correction_error = false;
                    self.input.clear();
                } else {
                    self.mark_correct();
                }
            }
            (GameKind::Matching, Answer::Connect { left, right }) => {
                return self.connect(left, right);
            }
            // Answer shape does not belong to this game; ignore it.
            _ => {}
        }
        None
    }

    fn connect(&mut self, left: usize, right: usize) -> Option<QuizReport> {
        let pairs = matching::ROUNDS[self.index].pairs;
        if left >= pairs.len() || right >= pairs.len() {
            return None;
        }
        if self.connected.contains(&left) || self.connected.contains(&right) {
            return None;
        }
        let correct = pairs
            .iter()
            .any(|p| p.left == pairs[left].left && p.right == pairs[right].right);
        if !correct {
            self.mark_incorrect();
            return None;
        }
        self.connected.insert(left);
        self.selected_left = None;
        self.phase = Phase::Feedback(Outcome::Correct);
        if self.connected.len() == pairs.len() {
            self.pending = Some(Pending {
                ticks_left: self.delays.advance_ticks,
                to: Transition::Advance,
            });
        } else {
            // Brief lock acknowledgement, then keep connecting.
            self.pending = Some(Pending {
                ticks_left: self.delays.correction_ticks,
                to: Transition::Resume,
            });
        }
        None
    }

    fn submit_correction(&mut self, text: &str) -> Option<QuizReport> {
        let q = &true_false::QUESTIONS[self.index];
        let correction = q.correction?;
        if answers_match(text, &correction.value.to_string()) {
            self.awaiting_correction = false;
            self.correction_error = false;
            self.phase = Phase::Feedback(Outcome::Correct);
            self.pending = Some(Pending {
                ticks_left: self.delays.correction_ticks,
                to: Transition::Advance,
            });
        } else {
            self.correction_error = true;
            self.retry_counts[self.index] += 1;
            self.input.clear();
        }
        None
    }

    fn mark_correct(&mut self) {
        self.phase = Phase::Feedback(Outcome::Correct);
        self.pending = Some(Pending {
            ticks_left: self.delays.advance_ticks,
            to: Transition::Advance,
        });
    }

    fn mark_incorrect(&mut self) {
        self.phase = Phase::Feedback(Outcome::Incorrect);
        self.retry_counts[self.index] += 1;
        self.pending = Some(Pending {
            ticks_left: self.delays.retry_ticks,
            to: Transition::Resume,
        });
    }

    fn advance(&mut self) -> Option<QuizReport> {
        self.input.clear();
        self.selected_left = None;
        self.connected.clear();
        self.awaiting_correction = false;
        self.correction_error = false;
        if self.index + 1 >= self.question_count() {
            self.phase = Phase::Complete;
            self.reported = true;
            return Some(QuizReport {
                points: COMPLETION_POINTS,
                questions_answered: self.question_count(),
                retries: self.total_retries(),
            });
        }
        self.index += 1;
        self.shuffle_right_order();
        self.phase = Phase::Answering;
        None
    }

    fn shuffle_right_order(&mut self) {
        if self.kind != GameKind::Matching {
            return;
        }
        let n = matching::ROUNDS[self.index].pairs.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rand::thread_rng());
        // Avoid the identity order so answers never line up row by row.
        if n > 1 && order.iter().enumerate().all(|(i, v)| i == *v) {
            order.rotate_left(1);
        }
        self.right_order = order;
    }
}

/// Exact-equality answer check with normalization: trim, then numeric
/// comparison when both sides parse, case-insensitive text otherwise.
fn answers_match(given: &str, expected: &str) -> bool {
    let given = given.trim();
    let expected = expected.trim();
    match (given.parse::<i64>(), expected.parse::<i64>()) {
        (Ok(g), Ok(e)) => g == e,
        _ => given.eq_ignore_ascii_case(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn fast_delays() -> Delays {
        Delays {
            advance_ticks: 2,
            retry_ticks: 2,
            correction_ticks: 1,
        }
    }

    fn tick_until_idle(quiz: &mut Quiz) -> Option<QuizReport> {
        for _ in 0..100 {
            if let Some(report) = quiz.update(QuizMsg::Tick) {
                return Some(report);
            }
            if !quiz.has_pending_transition() {
                return None;
            }
        }
        panic!("pending transition never expired");
    }

    /// Drive any quiz to completion by always submitting the right answer.
    fn solve(quiz: &mut Quiz) -> QuizReport {
        for _ in 0..1000 {
            let answers: Vec<QuizMsg> = match quiz.current() {
                CurrentQuestion::Comparison(q) => {
                    vec![QuizMsg::Submit(Answer::Choice(q.correct))]
                }
                CurrentQuestion::FillBlank(q) => {
                    vec![QuizMsg::Submit(Answer::Text(q.answer.to_string()))]
                }
                CurrentQuestion::TrueFalse(q) => {
                    let mut msgs = vec![QuizMsg::Submit(Answer::Bool(q.answer))];
                    if let Some(c) = q.correction {
                        msgs.push(QuizMsg::SubmitCorrection(c.value.to_string()));
                    }
                    msgs
                }
                CurrentQuestion::Matching(round) => (0..round.pairs.len())
                    .map(|i| QuizMsg::Submit(Answer::Connect { left: i, right: i }))
                    .collect(),
            };
            for msg in answers {
                if let Some(report) = quiz.update(msg) {
                    return report;
                }
                if let Some(report) = tick_until_idle(quiz) {
                    return report;
                }
            }
        }
        panic!("quiz never completed");
    }

    #[test]
    fn test_correct_answer_advances() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let correct = comparison::QUESTIONS[0].correct;

        assert_eq!(quiz.index(), 0);
        quiz.update(QuizMsg::Submit(Answer::Choice(correct)));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));

        assert!(tick_until_idle(&mut quiz).is_none());
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.phase(), Phase::Answering);
    }

    #[test]
    fn test_incorrect_answer_retries_same_question() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let wrong = (comparison::QUESTIONS[0].correct + 1) % 4;

        quiz.update(QuizMsg::Submit(Answer::Choice(wrong)));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Incorrect));

        assert!(tick_until_idle(&mut quiz).is_none());
        assert_eq!(quiz.index(), 0, "index unchanged after retry delay");
        assert_eq!(quiz.phase(), Phase::Answering);
        assert_eq!(quiz.total_retries(), 1);
    }

    #[test]
    fn test_fill_blank_input_is_cleared_on_retry() {
        let mut quiz = Quiz::new(GameKind::FillBlank, fast_delays());
        quiz.push_digit('9');
        quiz.push_digit('9');
        quiz.update(QuizMsg::Submit(Answer::Text(quiz.input().to_string())));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Incorrect));

        tick_until_idle(&mut quiz);
        assert_eq!(quiz.input(), "");
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn test_fill_blank_normalizes_whitespace() {
        let mut quiz = Quiz::new(GameKind::FillBlank, fast_delays());
        let answer = format!("  {} ", fill_blank::QUESTIONS[0].answer);
        quiz.update(QuizMsg::Submit(Answer::Text(answer)));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));
    }

    #[test]
    fn test_submissions_ignored_during_feedback() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let correct = comparison::QUESTIONS[0].correct;
        quiz.update(QuizMsg::Submit(Answer::Choice(correct)));
        assert_matches!(quiz.phase(), Phase::Feedback(_));

        // A second submit while feedback is showing must not change anything.
        quiz.update(QuizMsg::Submit(Answer::Choice(correct)));
        assert_eq!(quiz.index(), 0);
        assert!(quiz.has_pending_transition());
    }

    #[test]
    fn test_wrong_answer_shape_is_ignored() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        quiz.update(QuizMsg::Submit(Answer::Bool(true)));
        assert_eq!(quiz.phase(), Phase::Answering);
        assert_eq!(quiz.total_retries(), 0);
    }

    #[test]
    fn test_completion_reports_fixed_points_once() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let report = solve(&mut quiz);

        assert_eq!(report.points, COMPLETION_POINTS);
        assert_eq!(report.questions_answered, comparison::QUESTIONS.len());
        assert_eq!(quiz.phase(), Phase::Complete);

        // Nothing reports twice: the machine is inert afterwards.
        assert!(quiz.update(QuizMsg::Tick).is_none());
        assert!(quiz.update(QuizMsg::Exit).is_none());
    }

    #[test]
    fn test_retry_then_complete_still_scores_full_points() {
        // 3-question style run: miss question 1 once, then solve everything.
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let wrong = (comparison::QUESTIONS[0].correct + 1) % 4;
        quiz.update(QuizMsg::Submit(Answer::Choice(wrong)));
        tick_until_idle(&mut quiz);

        let report = solve(&mut quiz);
        assert_eq!(report.points, COMPLETION_POINTS);
        assert_eq!(report.retries, 1);
    }

    #[test]
    fn test_exit_reports_zero_immediately() {
        let mut quiz = Quiz::new(GameKind::FillBlank, fast_delays());
        let report = quiz.update(QuizMsg::Exit).expect("exit must report");
        assert_eq!(report.points, 0);
        assert_eq!(quiz.phase(), Phase::Complete);
    }

    #[test]
    fn test_exit_cancels_pending_transition() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        let correct = comparison::QUESTIONS[0].correct;
        quiz.update(QuizMsg::Submit(Answer::Choice(correct)));
        assert!(quiz.has_pending_transition());

        let report = quiz.update(QuizMsg::Exit).unwrap();
        assert_eq!(report.points, 0);
        assert!(!quiz.has_pending_transition());

        // Ticks after exit never advance state or report again.
        for _ in 0..10 {
            assert!(quiz.update(QuizMsg::Tick).is_none());
        }
        assert_eq!(quiz.phase(), Phase::Complete);
    }

    #[test]
    fn test_comparison_typed_answer_needs_numeric_question() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());
        assert!(comparison::QUESTIONS[0].numeric_answer.is_none());

        // Even the right option value typed as text means nothing here.
        let value = comparison::QUESTIONS[0].options[comparison::QUESTIONS[0].correct];
        quiz.update(QuizMsg::Submit(Answer::Text(value.to_string())));
        assert_eq!(quiz.phase(), Phase::Answering);
        assert_eq!(quiz.total_retries(), 0);
    }

    #[test]
    fn test_comparison_numeric_entry() {
        let mut quiz = Quiz::new(GameKind::Comparison, fast_delays());

        // Solve forward to the first question that takes a typed value.
        loop {
            let q = match quiz.current() {
                CurrentQuestion::Comparison(q) => q,
                _ => unreachable!(),
            };
            if q.numeric_answer.is_some() {
                break;
            }
            quiz.update(QuizMsg::Submit(Answer::Choice(q.correct)));
            tick_until_idle(&mut quiz);
        }
        let (index, value) = match quiz.current() {
            CurrentQuestion::Comparison(q) => (quiz.index(), q.numeric_answer.unwrap()),
            _ => unreachable!(),
        };

        // Wrong typed value retries the same question.
        quiz.update(QuizMsg::Submit(Answer::Text("999".to_string())));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Incorrect));
        tick_until_idle(&mut quiz);
        assert_eq!(quiz.index(), index);

        // The right value advances without touching the options.
        quiz.update(QuizMsg::Submit(Answer::Text(value.to_string())));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));
        tick_until_idle(&mut quiz);
        assert_eq!(quiz.index(), index + 1);
    }

    #[test]
    fn test_true_false_true_statement() {
        let mut quiz = Quiz::new(GameKind::TrueFalse, fast_delays());
        assert!(true_false::QUESTIONS[0].answer);

        quiz.update(QuizMsg::Submit(Answer::Bool(true)));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));
        assert!(!quiz.awaiting_correction());

        tick_until_idle(&mut quiz);
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn test_true_false_correction_stage() {
        let mut quiz = Quiz::new(GameKind::TrueFalse, fast_delays());
        // Question 2 of the bank is a false statement with correction 4.
        quiz.update(QuizMsg::Submit(Answer::Bool(true)));
        tick_until_idle(&mut quiz);
        assert_matches!(quiz.current(), CurrentQuestion::TrueFalse(q) if !q.answer);

        quiz.update(QuizMsg::Submit(Answer::Bool(false)));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));
        assert!(quiz.awaiting_correction());
        assert!(
            !quiz.has_pending_transition(),
            "no advance until the corrected value arrives"
        );

        // Wrong correction: stay in the correction stage, count the retry.
        quiz.update(QuizMsg::SubmitCorrection("99".to_string()));
        assert!(quiz.awaiting_correction());
        assert!(quiz.correction_error());
        assert_eq!(quiz.total_retries(), 1);

        // Right correction: advance gets scheduled.
        quiz.update(QuizMsg::SubmitCorrection("4".to_string()));
        assert!(!quiz.awaiting_correction());
        assert!(quiz.has_pending_transition());
        tick_until_idle(&mut quiz);
        assert_eq!(quiz.index(), 2);
    }

    #[test]
    fn test_matching_locks_pairs_until_round_done() {
        let mut quiz = Quiz::new(GameKind::Matching, fast_delays());
        let pairs = matching::ROUNDS[0].pairs;

        quiz.update(QuizMsg::Submit(Answer::Connect { left: 0, right: 0 }));
        assert!(quiz.connected().contains(&0));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Correct));
        tick_until_idle(&mut quiz);
        assert_eq!(quiz.index(), 0, "round continues until all pairs connect");

        // A wrong connection gives incorrect feedback but keeps the lock.
        quiz.update(QuizMsg::Submit(Answer::Connect { left: 1, right: 2 }));
        assert_matches!(quiz.phase(), Phase::Feedback(Outcome::Incorrect));
        tick_until_idle(&mut quiz);
        assert!(quiz.connected().contains(&0));

        for i in 1..pairs.len() {
            quiz.update(QuizMsg::Submit(Answer::Connect { left: i, right: i }));
            tick_until_idle(&mut quiz);
        }
        assert_eq!(quiz.index(), 1, "full round advances to the next one");
        assert!(quiz.connected().is_empty());
    }

    #[test]
    fn test_matching_accepts_connections_during_lock_ack() {
        let mut quiz = Quiz::new(GameKind::Matching, Delays::default());
        let pairs = matching::ROUNDS[0].pairs;

        // Fire every connection back to back, no ticks in between: the
        // ack banner of one lock must not swallow the next.
        for i in 0..pairs.len() {
            quiz.pick_left(i);
            assert_eq!(quiz.selected_left(), Some(i));
            quiz.update(QuizMsg::Submit(Answer::Connect { left: i, right: i }));
            assert!(quiz.connected().contains(&i));
        }

        // All pairs locked, so the scheduled transition is the advance.
        assert!(quiz.has_pending_transition());
        assert!(tick_until_idle(&mut quiz).is_none());
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn test_matching_ignores_locked_or_out_of_range() {
        let mut quiz = Quiz::new(GameKind::Matching, fast_delays());
        quiz.update(QuizMsg::Submit(Answer::Connect { left: 0, right: 0 }));
        tick_until_idle(&mut quiz);

        // Re-connecting a locked pair or indexing past the round is a no-op.
        quiz.update(QuizMsg::Submit(Answer::Connect { left: 0, right: 1 }));
        assert_eq!(quiz.phase(), Phase::Answering);
        quiz.update(QuizMsg::Submit(Answer::Connect { left: 9, right: 0 }));
        assert_eq!(quiz.phase(), Phase::Answering);
    }

    #[test]
    fn test_matching_right_order_is_permutation() {
        for _ in 0..20 {
            let quiz = Quiz::new(GameKind::Matching, Delays::default());
            let n = matching::ROUNDS[0].pairs.len();
            let mut order = quiz.right_order().to_vec();
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());
            // Never the identity, so answers don't line up row by row.
            assert!(quiz
                .right_order()
                .iter()
                .enumerate()
                .any(|(i, v)| i != *v));
        }
    }

    #[test]
    fn test_every_game_kind_completes() {
        for kind in GameKind::ALL {
            let mut quiz = Quiz::new(kind, fast_delays());
            let report = solve(&mut quiz);
            assert_eq!(report.points, COMPLETION_POINTS, "{kind}");
            assert_eq!(report.questions_answered, kind.question_count());
        }
    }

    #[test]
    fn test_digit_input_editing() {
        let mut quiz = Quiz::new(GameKind::FillBlank, fast_delays());
        quiz.push_digit('1');
        quiz.push_digit('2');
        quiz.push_digit('x'); // not a digit, ignored
        assert_eq!(quiz.input(), "12");
        quiz.pop_digit();
        assert_eq!(quiz.input(), "1");
    }

    #[test]
    fn test_answers_match_normalization() {
        assert!(answers_match(" 8 ", "8"));
        assert!(answers_match("08", "8"));
        assert!(!answers_match("7", "8"));
        assert!(answers_match("True", "true"));
    }
}

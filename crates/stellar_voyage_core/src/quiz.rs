//! crates/stellar_voyage_core/src/quiz.rs
//!
//! The quiz session state machine. Drives a single user through the fixed
//! question sequence to a final recorded score. The machine is pure: the
//! completion date is injected and the caller owns persisting the emitted
//! score.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{QuizQuestion, QuizScore};

/// Invalid transitions and inputs, all rejected without a state change.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("A username is required to start the quiz")]
    BlankUsername,
    #[error("The quiz has already been started")]
    AlreadyStarted,
    #[error("The quiz is not in progress")]
    NotInProgress,
    #[error("Option index {index} is out of range for the current question ({options} options)")]
    InvalidOption { index: usize, options: usize },
    #[error("Select an option before advancing")]
    NoSelection,
    #[error("The quiz question set is malformed")]
    MalformedQuestions,
}

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress {
        username: String,
        question_index: usize,
        running_score: u32,
        selected_option: Option<usize>,
    },
    /// Terminal. Holds the score emitted at completion for display; the only
    /// way out is `reset`.
    Finished { result: QuizScore },
}

/// One user's run through the quiz.
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Builds a session over a validated question set.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() || !questions.iter().all(QuizQuestion::is_well_formed) {
            return Err(QuizError::MalformedQuestions);
        }
        Ok(Self {
            questions,
            phase: QuizPhase::NotStarted,
        })
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The question currently on screen, if the session is in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.phase {
            QuizPhase::InProgress { question_index, .. } => self.questions.get(*question_index),
            _ => None,
        }
    }

    /// Starts the session. Rejects a blank username and a double start.
    pub fn start(&mut self, username: &str) -> Result<(), QuizError> {
        if !matches!(self.phase, QuizPhase::NotStarted) {
            return Err(QuizError::AlreadyStarted);
        }
        let username = username.trim();
        if username.is_empty() {
            return Err(QuizError::BlankUsername);
        }
        self.phase = QuizPhase::InProgress {
            username: username.to_string(),
            question_index: 0,
            running_score: 0,
            selected_option: None,
        };
        Ok(())
    }

    /// Records the user's choice for the current question. Overwritable
    /// until the session advances.
    pub fn select(&mut self, option: usize) -> Result<(), QuizError> {
        let options = self
            .current_question()
            .map(|q| q.options.len())
            .ok_or(QuizError::NotInProgress)?;
        if option >= options {
            return Err(QuizError::InvalidOption {
                index: option,
                options,
            });
        }
        if let QuizPhase::InProgress {
            selected_option, ..
        } = &mut self.phase
        {
            *selected_option = Some(option);
        }
        Ok(())
    }

    /// Scores the current selection and moves on. On the last question the
    /// session transitions to `Finished` and the emitted `QuizScore` is
    /// returned for the caller to record; otherwise `None`.
    pub fn advance(&mut self, today: NaiveDate) -> Result<Option<QuizScore>, QuizError> {
        let QuizPhase::InProgress {
            username,
            question_index,
            running_score,
            selected_option,
        } = &mut self.phase
        else {
            return Err(QuizError::NotInProgress);
        };

        let selected = (*selected_option).ok_or(QuizError::NoSelection)?;
        if selected == self.questions[*question_index].correct_answer {
            *running_score += 1;
        }

        if *question_index + 1 < self.questions.len() {
            *question_index += 1;
            *selected_option = None;
            return Ok(None);
        }

        let result = QuizScore {
            id: Uuid::new_v4().to_string(),
            username: username.clone(),
            score: *running_score,
            total: self.questions.len() as u32,
            date: today.to_string(),
        };
        self.phase = QuizPhase::Finished {
            result: result.clone(),
        };
        Ok(Some(result))
    }

    /// Full reset back to `NotStarted`, discarding any session state.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::NotStarted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::quiz_questions;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn started() -> QuizSession {
        let mut session = QuizSession::new(quiz_questions()).unwrap();
        session.start("Captain Nyx").unwrap();
        session
    }

    #[test]
    fn blank_username_cannot_start() {
        let mut session = QuizSession::new(quiz_questions()).unwrap();
        assert_eq!(session.start("   "), Err(QuizError::BlankUsername));
        assert_eq!(session.phase(), &QuizPhase::NotStarted);
        session.start("Nova").unwrap();
        assert_eq!(session.start("Nova"), Err(QuizError::AlreadyStarted));
    }

    #[test]
    fn all_correct_answers_score_full_marks() {
        let mut session = started();
        let mut emitted = None;
        for _ in 0..session.questions().len() {
            let answer = session.current_question().unwrap().correct_answer;
            session.select(answer).unwrap();
            emitted = session.advance(today()).unwrap();
        }
        let score = emitted.expect("last advance emits the score");
        assert_eq!(score.score, 5);
        assert_eq!(score.total, 5);
        assert_eq!(score.username, "Captain Nyx");
        assert_eq!(score.date, "2026-08-26");
        assert!(matches!(session.phase(), QuizPhase::Finished { .. }));
    }

    #[test]
    fn score_counts_exactly_the_correct_selections() {
        let mut session = started();
        let total = session.questions().len();
        // Answer the first two correctly, then always pick a wrong option.
        let mut emitted = None;
        for i in 0..total {
            let question = session.current_question().unwrap();
            let pick = if i < 2 {
                question.correct_answer
            } else {
                (question.correct_answer + 1) % question.options.len()
            };
            session.select(pick).unwrap();
            emitted = session.advance(today()).unwrap();
        }
        assert_eq!(emitted.unwrap().score, 2);
    }

    #[test]
    fn advance_without_selection_is_rejected_without_state_change() {
        let mut session = started();
        assert_eq!(session.advance(today()), Err(QuizError::NoSelection));
        match session.phase() {
            QuizPhase::InProgress {
                question_index,
                running_score,
                selected_option,
                ..
            } => {
                assert_eq!(*question_index, 0);
                assert_eq!(*running_score, 0);
                assert_eq!(*selected_option, None);
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn selection_is_overwritable_and_cleared_on_advance() {
        let mut session = started();
        session.select(0).unwrap();
        session.select(3).unwrap();
        match session.phase() {
            QuizPhase::InProgress {
                selected_option, ..
            } => assert_eq!(*selected_option, Some(3)),
            other => panic!("unexpected phase: {other:?}"),
        }
        session.advance(today()).unwrap();
        match session.phase() {
            QuizPhase::InProgress {
                question_index,
                selected_option,
                ..
            } => {
                assert_eq!(*question_index, 1);
                assert_eq!(*selected_option, None);
            }
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = started();
        assert_eq!(
            session.select(4),
            Err(QuizError::InvalidOption {
                index: 4,
                options: 4
            })
        );
    }

    #[test]
    fn finished_is_terminal_until_reset() {
        let mut session = started();
        for _ in 0..session.questions().len() {
            let answer = session.current_question().unwrap().correct_answer;
            session.select(answer).unwrap();
            session.advance(today()).unwrap();
        }
        assert_eq!(session.select(0), Err(QuizError::NotInProgress));
        assert_eq!(session.advance(today()), Err(QuizError::NotInProgress));

        session.reset();
        assert_eq!(session.phase(), &QuizPhase::NotStarted);
        session.start("Second Run").unwrap();
    }

    #[test]
    fn malformed_question_sets_are_refused() {
        assert!(QuizSession::new(vec![]).is_err());
        let mut questions = quiz_questions();
        questions[0].correct_answer = 4;
        assert!(QuizSession::new(questions).is_err());
    }
}

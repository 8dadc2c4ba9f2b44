//! Sequential assessment engine.
//!
//! States: `AwaitingSelection -> Selected -> AwaitingSelection (next) | Complete`.
//! Answers are appended in question order and never changed afterwards;
//! there is no skipping and no going back.

use crate::errors::AppError;
use crate::feedback::get_individual_feedback;
use crate::models::{AnswerDetail, Question};
use crate::question_bank::QuestionBank;
use serde::Serialize;

/// Observable engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingSelection,
    Selected,
    Complete,
}

/// Result of a successful [`AssessmentEngine::advance`].
#[derive(Debug, Clone)]
pub enum Advance {
    /// Moved on to the next question.
    Next(&'static Question),
    /// The last question was answered; carries every answer in order.
    Complete(Vec<AnswerDetail>),
}

#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    bank: QuestionBank,
    index: usize,
    answers: Vec<AnswerDetail>,
    selected: Option<u8>,
    current_feedback: Option<&'static str>,
}

impl AssessmentEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            index: 0,
            answers: Vec::with_capacity(bank.count()),
            selected: None,
            current_feedback: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.selected.is_some() {
            Phase::Selected
        } else {
            Phase::AwaitingSelection
        }
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.bank.count()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.bank.count()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.bank.get_question(self.index)
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn current_feedback(&self) -> Option<&'static str> {
        self.current_feedback
    }

    pub fn answers(&self) -> &[AnswerDetail] {
        &self.answers
    }

    /// Percentage of questions already answered.
    pub fn progress_percent(&self) -> f64 {
        let total = self.bank.count();
        if total == 0 {
            return 100.0;
        }
        (self.index.min(total) as f64 / total as f64) * 100.0
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.bank.count()
    }

    /// Label of the button that advances past the current question.
    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "Finish Assessment"
        } else {
            "Next Question"
        }
    }

    /// Selects an option of the current question and returns its feedback.
    /// Selecting again overwrites the previous choice.
    pub fn select_option(&mut self, score: u8) -> Result<&'static str, AppError> {
        let question = self.current_question().ok_or_else(|| {
            AppError::InvalidTransition("Assessment is already complete".to_string())
        })?;

        if !question.offers_score(score) {
            return Err(AppError::BadRequest(format!(
                "Question {} has no option with score {}",
                question.id, score
            )));
        }

        let feedback = get_individual_feedback(question.r#trait, score)?;
        self.selected = Some(score);
        self.current_feedback = Some(feedback);
        tracing::debug!("Question {} answered with score {}", question.id, score);
        Ok(feedback)
    }

    /// Records the current selection and moves to the next question.
    ///
    /// Fails with [`AppError::NoSelection`] and leaves the state untouched
    /// when nothing has been selected.
    pub fn advance(&mut self) -> Result<Advance, AppError> {
        let question = self.current_question().ok_or_else(|| {
            AppError::InvalidTransition("Assessment is already complete".to_string())
        })?;

        let (Some(score), Some(feedback)) = (self.selected, self.current_feedback) else {
            return Err(AppError::NoSelection);
        };

        self.answers.push(AnswerDetail {
            id: question.id,
            r#trait: question.r#trait,
            score,
            feedback: feedback.to_string(),
        });
        self.index += 1;
        self.selected = None;
        self.current_feedback = None;

        match self.current_question() {
            Some(next) => Ok(Advance::Next(next)),
            None => {
                tracing::info!(
                    "Assessment complete: {} answers recorded",
                    self.answers.len()
                );
                Ok(Advance::Complete(self.answers.clone()))
            }
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(QuestionBank::standard())
    }
}

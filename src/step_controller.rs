//! Three-step flow: `info -> assessment -> results`, forward only.
//!
//! Each state carries the snapshots accumulated so far. User info and the
//! finished answers are shared immutably with everything downstream.

use crate::assessment::{Advance, AssessmentEngine};
use crate::certificate::assemble_certificate_data;
use crate::errors::AppError;
use crate::feedback::get_final_feedback;
use crate::models::{total_score, AnswerDetail, CertificateData, Question, UserInfo};
use crate::question_bank::QuestionBank;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Info,
    Assessment,
    Results,
}

#[derive(Debug, Clone)]
pub enum StepController {
    Info {
        bank: QuestionBank,
    },
    Assessment {
        user: Arc<UserInfo>,
        engine: AssessmentEngine,
    },
    Results {
        user: Arc<UserInfo>,
        answers: Arc<[AnswerDetail]>,
        certificate: Arc<CertificateData>,
    },
}

/// What an [`StepController::advance`] call led to.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    NextQuestion(&'static Question),
    /// Entered the results step; the certificate was materialized.
    Completed(Arc<CertificateData>),
}

impl StepController {
    pub fn new(bank: QuestionBank) -> Self {
        StepController::Info { bank }
    }

    pub fn step(&self) -> Step {
        match self {
            StepController::Info { .. } => Step::Info,
            StepController::Assessment { .. } => Step::Assessment,
            StepController::Results { .. } => Step::Results,
        }
    }

    pub fn engine(&self) -> Option<&AssessmentEngine> {
        match self {
            StepController::Assessment { engine, .. } => Some(engine),
            _ => None,
        }
    }

    pub fn certificate(&self) -> Option<&Arc<CertificateData>> {
        match self {
            StepController::Results { certificate, .. } => Some(certificate),
            _ => None,
        }
    }

    pub fn answers(&self) -> Option<&Arc<[AnswerDetail]>> {
        match self {
            StepController::Results { answers, .. } => Some(answers),
            _ => None,
        }
    }

    /// info → assessment.
    pub fn submit_info(&mut self, user: UserInfo) -> Result<&'static Question, AppError> {
        let StepController::Info { bank } = self else {
            return Err(AppError::InvalidTransition(format!(
                "Personal information was already submitted (current step: {:?})",
                self.step()
            )));
        };

        let engine = AssessmentEngine::new(*bank);
        let first = engine.current_question().ok_or_else(|| {
            AppError::InternalError("Question bank is empty".to_string())
        })?;

        tracing::info!("Starting assessment for '{}'", user.name);
        *self = StepController::Assessment {
            user: Arc::new(user),
            engine,
        };
        Ok(first)
    }

    pub fn select_option(&mut self, score: u8) -> Result<&'static str, AppError> {
        match self {
            StepController::Assessment { engine, .. } => engine.select_option(score),
            other => Err(AppError::InvalidTransition(format!(
                "No assessment in progress (current step: {:?})",
                other.step()
            ))),
        }
    }

    /// Advances the assessment; on the last answer, moves to results and
    /// materializes the certificate dated `issued_on`.
    pub fn advance(&mut self, issued_on: NaiveDate) -> Result<StepOutcome, AppError> {
        let StepController::Assessment { user, engine } = self else {
            return Err(AppError::InvalidTransition(format!(
                "No assessment in progress (current step: {:?})",
                self.step()
            )));
        };

        match engine.advance()? {
            Advance::Next(question) => Ok(StepOutcome::NextQuestion(question)),
            Advance::Complete(answers) => {
                let user = Arc::clone(user);
                let certificate = Arc::new(assemble_certificate_data(&user, &answers, issued_on)?);
                *self = StepController::Results {
                    user,
                    answers: answers.into(),
                    certificate: Arc::clone(&certificate),
                };
                Ok(StepOutcome::Completed(certificate))
            }
        }
    }

    /// Total score and short feedback, once in the results step.
    pub fn results_summary(&self) -> Option<(u32, &'static str)> {
        self.answers().map(|answers| {
            let total = total_score(answers);
            (total, get_final_feedback(total))
        })
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new(QuestionBank::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn user() -> UserInfo {
        UserInfo {
            name: "Asha".to_string(),
            name_hi: "आशा".to_string(),
            age: 30,
            gender: Gender::Female,
            state: "Madhya Pradesh".to_string(),
            district: "Bhopal".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_forward_only_progression() {
        let mut controller = StepController::default();
        assert_eq!(controller.step(), Step::Info);
        assert!(matches!(
            controller.select_option(1),
            Err(AppError::InvalidTransition(_))
        ));

        let first = controller.submit_info(user()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(controller.step(), Step::Assessment);
        assert!(matches!(
            controller.submit_info(user()),
            Err(AppError::InvalidTransition(_))
        ));

        let mut completed = None;
        for _ in 0..10 {
            controller.select_option(2).unwrap();
            if let StepOutcome::Completed(cert) = controller.advance(today()).unwrap() {
                completed = Some(cert);
            }
        }

        let cert = completed.expect("assessment completes after ten answers");
        assert_eq!(controller.step(), Step::Results);
        assert_eq!(cert.date, "2024-03-15");
        assert_eq!(controller.results_summary().map(|(t, _)| t), Some(20));
        assert!(matches!(
            controller.advance(today()),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_no_selection_keeps_step() {
        let mut controller = StepController::default();
        controller.submit_info(user()).unwrap();
        assert!(matches!(
            controller.advance(today()),
            Err(AppError::NoSelection)
        ));
        assert_eq!(controller.engine().map(|e| e.index()), Some(0));
    }
}

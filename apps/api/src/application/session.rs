//! Form interaction state machine.
//!
//! ```text
//!   Idle ──blur──▶ Touched ──submit (valid)──▶ Submitting ──settle──▶ Success
//!    ▲               │  ▲                                               │
//!    │               └──┘ submit (invalid): all errors shown            │
//!    └──────────────────────────── success_ack (form reset) ────────────┘
//! ```
//!
//! Errors become visible per field only once that field is touched. A submit
//! attempt touches every field. While a submission is in flight, and until its
//! success is acknowledged, the form is locked.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::form::{
    validate, validate_field, ApplicationForm, ApplicationFormErrors, FormField,
};
use crate::jobs::models::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Touched,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Blur { field: FormField },
    Edit { field: FormField, value: String },
    Submit,
    SuccessAck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("An application is already being submitted.")]
    SubmissionInFlight,

    #[error("The application was submitted; acknowledge it before editing again.")]
    AwaitingAcknowledgement,

    #[error("There is no submitted application to acknowledge.")]
    NothingToAcknowledge,

    #[error("No submission is in flight.")]
    NotSubmitting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationReceipt {
    pub session_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub submitted_at: DateTime<Utc>,
}

/// One user's pass at applying for one job.
#[derive(Debug, Clone)]
pub struct ApplicationSession {
    id: Uuid,
    job_id: Uuid,
    job_title: String,
    company_name: String,
    form: ApplicationForm,
    visible_errors: ApplicationFormErrors,
    touched: BTreeMap<FormField, bool>,
    phase: FormPhase,
    receipt: Option<ApplicationReceipt>,
    last_active: Instant,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub phase: FormPhase,
    pub form: ApplicationForm,
    pub errors: ApplicationFormErrors,
    pub touched: BTreeMap<FormField, bool>,
    /// True whenever the form would fail validation, touched or not.
    pub has_errors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ApplicationReceipt>,
}

impl ApplicationSession {
    pub fn new(job: &Job) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id: job.id,
            job_title: job.title.clone(),
            company_name: job.company_name.clone(),
            form: ApplicationForm::default(),
            visible_errors: ApplicationFormErrors::default(),
            touched: untouched(),
            phase: FormPhase::Idle,
            receipt: None,
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn visible_errors(&self) -> &ApplicationFormErrors {
        &self.visible_errors
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.get(&field).copied().unwrap_or(false)
    }

    pub fn has_errors(&self) -> bool {
        !validate(&self.form).is_empty()
    }

    pub fn receipt(&self) -> Option<&ApplicationReceipt> {
        self.receipt.as_ref()
    }

    /// When the session last accepted an event or settled.
    pub fn last_active(&self) -> Instant {
        self.last_active
    }

    /// Applies one user event and returns the resulting phase.
    ///
    /// A `Submit` over an invalid form is not an error: it returns
    /// `FormPhase::Touched` with every failing field made visible.
    pub fn apply(&mut self, event: FormEvent) -> Result<FormPhase, SessionError> {
        match self.phase {
            FormPhase::Submitting => return Err(SessionError::SubmissionInFlight),
            FormPhase::Success if event != FormEvent::SuccessAck => {
                return Err(SessionError::AwaitingAcknowledgement)
            }
            _ => {}
        }

        match event {
            FormEvent::Blur { field } => {
                debug!("Application {} touched {field}", self.id);
                self.touched.insert(field, true);
                self.visible_errors
                    .put(field, validate_field(&self.form, field));
                self.phase = FormPhase::Touched;
            }
            FormEvent::Edit { field, value } => {
                self.form.set(field, value);
                if self.is_touched(field) {
                    self.visible_errors
                        .put(field, validate_field(&self.form, field));
                }
            }
            FormEvent::Submit => {
                for field in FormField::ALL {
                    self.touched.insert(field, true);
                }
                self.visible_errors = validate(&self.form);
                if self.visible_errors.is_empty() {
                    self.phase = FormPhase::Submitting;
                    info!("Application {} for job {} submitting", self.id, self.job_id);
                } else {
                    self.phase = FormPhase::Touched;
                    debug!(
                        "Application {} rejected with {} field errors",
                        self.id,
                        self.visible_errors.len()
                    );
                }
            }
            FormEvent::SuccessAck => {
                if self.phase != FormPhase::Success {
                    return Err(SessionError::NothingToAcknowledge);
                }
                self.reset();
            }
        }

        self.last_active = Instant::now();
        debug!("Application {} now {:?}", self.id, self.phase);
        Ok(self.phase)
    }

    /// Completes an in-flight submission after its simulated latency.
    pub fn settle(&mut self) -> Result<&ApplicationReceipt, SessionError> {
        if self.phase != FormPhase::Submitting {
            return Err(SessionError::NotSubmitting);
        }

        self.phase = FormPhase::Success;
        self.last_active = Instant::now();
        info!("Application {} for job {} submitted", self.id, self.job_id);
        Ok(self.receipt.insert(ApplicationReceipt {
            session_id: self.id,
            job_id: self.job_id,
            job_title: self.job_title.clone(),
            company_name: self.company_name.clone(),
            submitted_at: Utc::now(),
        }))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            job_id: self.job_id,
            job_title: self.job_title.clone(),
            company_name: self.company_name.clone(),
            phase: self.phase,
            form: self.form.clone(),
            errors: self.visible_errors.clone(),
            touched: self.touched.clone(),
            has_errors: self.has_errors(),
            receipt: self.receipt.clone(),
        }
    }

    fn reset(&mut self) {
        self.form = ApplicationForm::default();
        self.visible_errors.clear();
        self.touched = untouched();
        self.receipt = None;
        self.phase = FormPhase::Idle;
    }
}

fn untouched() -> BTreeMap<FormField, bool> {
    FormField::ALL.into_iter().map(|f| (f, false)).collect()
}

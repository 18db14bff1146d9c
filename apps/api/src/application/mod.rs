// Job application form: field rules plus the interaction state machine.
// Submission is simulated locally; nothing leaves the process.

pub mod form;
pub mod handlers;
pub mod session;
pub mod store;

pub use form::{validate, validate_field, ApplicationForm, ApplicationFormErrors, FormField};
pub use session::{ApplicationSession, FormEvent, FormPhase, SessionError};
pub use store::SessionStore;

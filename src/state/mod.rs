pub mod form;
pub mod navigation;
pub mod ui;

pub use form::{ContactForm, FormSubmission};
pub use navigation::{HistoryEntry, NavigationState};
pub use ui::{FeedbackNotice, UiState};

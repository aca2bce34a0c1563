// Contact form state - field buffers and local submission handling

/// The three contact form fields, bound to the text widgets.
#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A completed submission extracted from the form.
///
/// There is no backend; a submission only feeds the acknowledgment
/// notice and the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Take the current field values and reset the form to empty.
    pub fn submit(&mut self) -> FormSubmission {
        FormSubmission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

//! Submission Status

pub const SUCCESS_MESSAGE: &str = "Payment successful!";

/// Lifecycle of one checkout attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    /// Loading indicator; also disables the submit control
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// User-facing result line, if there is one to show
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded => Some(SUCCESS_MESSAGE),
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}

use std::fmt;

/// A single violation found while validating a document model.
///
/// `path` is the dotted location of the parent object (e.g. `e_referral.context`), `field` the
/// name of the offending field within it (e.g. `referee`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationMessage {
    pub path: String,
    pub field: String,
    pub message: String,
}

impl ValidationMessage {
    /// Full dotted location of the field, e.g. `e_referral.context.referee`.
    pub fn location(&self) -> String {
        if self.path.is_empty() {
            self.field.clone()
        } else {
            format!("{}.{}", self.path, self.field)
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Every violation found in a single validation pass.
///
/// Never empty when returned inside [`GenerationError::Validation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    messages: Vec<ValidationMessage>,
}

impl ValidationFailure {
    pub(crate) fn new(messages: Vec<ValidationMessage>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ValidationMessage> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns `true` if any violation's location contains `fragment`.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.messages
            .iter()
            .any(|message| message.location().contains(fragment))
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The model is malformed. Carries every violation found; nothing was assembled.
    #[error("document failed validation with {} violation(s):\n{0}", .0.len())]
    Validation(ValidationFailure),

    /// The serializer rejected an assembled document.
    #[error("failed to serialise document: {0}")]
    Serialization(#[from] cda::CdaError),

    /// Startup configuration could not be resolved.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenerationError {
    /// The validation failure, if this error is one.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            GenerationError::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn message(path: &str, field: &str, text: &str) -> ValidationMessage {
        ValidationMessage {
            path: path.into(),
            field: field.into(),
            message: text.into(),
        }
    }

    #[test]
    fn failure_lists_every_message() {
        let failure = ValidationFailure::new(vec![
            message("e_referral.context", "referee", "is required"),
            message("e_referral.metadata", "document_id", "is required"),
        ]);
        let err = GenerationError::Validation(failure);
        let text = err.to_string();
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("e_referral.context.referee: is required"));
        assert!(text.contains("e_referral.metadata.document_id: is required"));
    }

    #[test]
    fn mentions_matches_location_fragments() {
        let failure =
            ValidationFailure::new(vec![message("e_referral.context", "referee", "is required")]);
        assert!(failure.mentions("context.referee"));
        assert!(!failure.mentions("author"));
    }
}

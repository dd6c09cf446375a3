//! Error types for the mutation layer.

use devexchange_store::StoreError;
use devexchange_types::{AnswerId, QuestionId};
use thiserror::Error;

/// Result type for mutator operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while applying a mutation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Store-level failure: missing record or unreachable provider.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation failure: the answer belongs to a different question.
    #[error("answer {answer} does not belong to question {question}")]
    AnswerMismatch {
        answer: AnswerId,
        question: QuestionId,
    },
}

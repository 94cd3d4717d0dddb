/// Errors raised by catalog sources and other outbound ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.malformed")]
    Malformed,
}

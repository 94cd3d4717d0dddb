/// Logging port used by every use case.
///
/// Adapters decide where the messages end up; the domain only emits plain text.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

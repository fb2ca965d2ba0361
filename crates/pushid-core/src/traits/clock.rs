/// Source of the current time for push id generation.
pub trait Clock: Send + Sync + 'static {
    /// Milliseconds since the Unix epoch (UTC).
    fn now_millis(&self) -> u64;
}

/// Eager validation hook for anything loaded from configuration. A config
/// that fails here is rejected at startup, before any universe exists.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

use crate::domain::AppError;

/// Port for a read-only store of named secrets.
pub trait SecretStore {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Look up a secret by key. `Ok(None)` means the store has no value for it.
    fn lookup(&self, key: &str) -> Result<Option<String>, AppError>;
}

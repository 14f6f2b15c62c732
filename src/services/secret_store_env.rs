use crate::domain::AppError;
use crate::ports::SecretStore;

/// Secrets read from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, AppError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(AppError::config_error(format!("Environment variable {} is not valid UTF-8", key)))
            }
        }
    }
}

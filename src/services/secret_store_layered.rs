use crate::domain::AppError;
use crate::ports::SecretStore;

/// Consults stores in order and returns the first non-blank value.
#[derive(Default)]
pub struct LayeredSecretStore {
    layers: Vec<Box<dyn SecretStore>>,
}

impl LayeredSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, store: impl SecretStore + 'static) -> Self {
        self.layers.push(Box::new(store));
        self
    }
}

impl SecretStore for LayeredSecretStore {
    fn name(&self) -> &str {
        "layered"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, AppError> {
        for layer in &self.layers {
            if let Some(value) = layer.lookup(key)?
                && !value.trim().is_empty()
            {
                tracing::debug!(key, store = layer.name(), "secret resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticSecretStore;

    #[test]
    fn first_non_blank_layer_wins() {
        let store = LayeredSecretStore::new()
            .with_layer(StaticSecretStore::new().with("KEY", "  "))
            .with_layer(StaticSecretStore::new().with("KEY", "second"))
            .with_layer(StaticSecretStore::new().with("KEY", "third"));

        assert_eq!(store.lookup("KEY").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn no_layers_means_no_value() {
        assert!(LayeredSecretStore::new().lookup("KEY").unwrap().is_none());
    }
}

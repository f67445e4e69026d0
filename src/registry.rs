//! Provider registry: one initialized provider per (provider, model) pair.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::LlmError;
use crate::providers::{DeepSeekProvider, LlmProvider};
use crate::types::{LlmConfig, ProviderId};

/// Caches initialized providers keyed by `provider:model`.
///
/// Cloning is cheap and clones share the same cache. Entries never expire;
/// they are evicted explicitly with [`ProviderRegistry::remove`] or
/// [`ProviderRegistry::clear`].
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Arc<Mutex<HashMap<String, Arc<dyn LlmProvider>>>>,
    in_flight: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn cache_key(config: &LlmConfig) -> String {
        format!("{}:{}", config.provider, config.model)
    }

    /// Whether a factory exists for the given provider.
    pub fn is_supported(provider: ProviderId) -> bool {
        matches!(provider, ProviderId::DeepSeek)
    }

    fn create_provider(provider: ProviderId) -> Result<Box<dyn LlmProvider>, LlmError> {
        match provider {
            ProviderId::DeepSeek => Ok(Box::new(DeepSeekProvider::new())),
            other => Err(LlmError::UnsupportedOperation(format!(
                "Unsupported LLM provider: {other}"
            ))),
        }
    }

    /// Return the cached provider for the config's (provider, model) pair,
    /// creating and initializing it exactly once per distinct pair.
    pub async fn get_or_create(
        &self,
        config: &LlmConfig,
    ) -> Result<Arc<dyn LlmProvider>, LlmError> {
        let key = Self::cache_key(config);

        if let Some(provider) = self.lookup(&key)? {
            return Ok(provider);
        }

        // Per-key build lock: concurrent calls for the same pair wait here
        // instead of initializing twice. Calls for other keys proceed
        // independently.
        let build_lock = {
            let mut map = self
                .in_flight
                .lock()
                .map_err(|e| LlmError::InternalError(format!("In-flight lock poisoned: {e}")))?;
            Arc::clone(
                map.entry(key.clone())
                    .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
            )
        };
        let _guard = build_lock.lock().await;

        // Double-check after acquiring the lock.
        if let Some(provider) = self.lookup(&key)? {
            return Ok(provider);
        }

        let mut provider = Self::create_provider(config.provider)?;
        provider.initialize(config.clone()).await?;
        let provider: Arc<dyn LlmProvider> = Arc::from(provider);

        self.providers
            .lock()
            .map_err(|e| LlmError::InternalError(format!("Provider cache lock poisoned: {e}")))?
            .insert(key, provider.clone());
        Ok(provider)
    }

    fn lookup(&self, key: &str) -> Result<Option<Arc<dyn LlmProvider>>, LlmError> {
        Ok(self
            .providers
            .lock()
            .map_err(|e| LlmError::InternalError(format!("Provider cache lock poisoned: {e}")))?
            .get(key)
            .cloned())
    }

    /// Evict the provider for the config's (provider, model) pair.
    pub fn remove(&self, config: &LlmConfig) {
        if let Ok(mut map) = self.providers.lock() {
            map.remove(&Self::cache_key(config));
        }
    }

    /// Evict all providers.
    pub fn clear(&self) {
        if let Ok(mut map) = self.providers.lock() {
            map.clear();
        }
    }

    /// Number of cached providers.
    pub fn len(&self) -> usize {
        self.providers.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

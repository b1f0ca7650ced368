pub mod openai_provider;
pub mod types;

use crate::shared::config::LlmConfig;
use once_cell::sync::OnceCell;
use openai_provider::OpenAiProvider;

static PROVIDER: OnceCell<OpenAiProvider> = OnceCell::new();

/// Инициализировать провайдера из конфигурации (однократно, при старте)
pub fn initialize_provider(config: &LlmConfig) {
    let provider = OpenAiProvider::new_with_endpoint(
        config.api_endpoint.clone(),
        config.api_key.clone(),
        config.model.clone(),
    );
    if PROVIDER.set(provider).is_err() {
        tracing::warn!("LLM provider already initialized");
    }
}

/// Получить провайдера; паникует только при ошибке порядка инициализации
pub fn provider() -> &'static OpenAiProvider {
    PROVIDER
        .get()
        .expect("LLM provider not initialized; call initialize_provider() first")
}

use axum::Json;
use contracts::shared::assistant::{CompletionRequest, CompletionResponse};

use crate::shared::llm::{self, types::LlmProvider};

/// POST /api/assistant/completions
///
/// Проксирует запрос к настроенному OpenAI-совместимому сервису. Ошибка
/// провайдера возвращается как 502: клиент переключается на локальный
/// fallback, пользователю ошибка не показывается.
pub async fn create_completion(
    Json(request): Json<CompletionRequest>,
) -> Result<Json<CompletionResponse>, axum::http::StatusCode> {
    match llm::provider().chat_completion(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Completion request failed: {}", e);
            Err(axum::http::StatusCode::BAD_GATEWAY)
        }
    }
}

//! Assistant Panel - Model (API functions)

use contracts::shared::assistant::{CompletionOutcome, CompletionRequest, InsightContext};
use gloo_net::http::Request;

const API_BASE: &str = "/api/assistant";

/// Отправить запрос completion-сервису.
///
/// Любая неуспешная ветка приходит обратно как `CompletionOutcome` и
/// схлопывается в локальный fallback на стороне вызывающего; эта функция
/// никогда не возвращает ошибку наружу.
pub async fn request_completion(ctx: &InsightContext, query: &str) -> CompletionOutcome {
    let request = CompletionRequest::new(ctx.system_prompt(), query);

    let builder = match Request::post(&format!("{}/completions", API_BASE)).json(&request) {
        Ok(builder) => builder,
        Err(e) => return CompletionOutcome::Failed(format!("Bad request body: {e}")),
    };

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => return CompletionOutcome::Failed(format!("Request failed: {e}")),
    };

    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    CompletionOutcome::from_body(ok, status, &body)
}

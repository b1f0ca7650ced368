use serde::{Deserialize, Serialize};

/// Температура по умолчанию для запросов ассистента
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Лимит токенов ответа
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Сообщение чата
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Запрос на completion (system, затем user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Собрать стандартный запрос: системная инструкция + текст пользователя
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Ответ completion-сервиса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Результат разбора удалённого ответа на границе.
///
/// Всё, что не `Answer`, схлопывается в локальный fallback; причина дальше
/// границы не распространяется.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// Успешный статус и хотя бы один choice
    Answer(String),
    /// Успешный статус, но тело без ожидаемого поля
    Malformed,
    /// Неуспешный статус или сетевая ошибка
    Failed(String),
}

impl CompletionOutcome {
    /// Разобрать тело ответа с учётом HTTP-статуса
    pub fn from_body(ok: bool, status: u16, body: &str) -> Self {
        if !ok {
            return CompletionOutcome::Failed(format!("HTTP {status}"));
        }
        match serde_json::from_str::<CompletionResponse>(body) {
            Ok(response) => match response.choices.into_iter().next() {
                Some(choice) => CompletionOutcome::Answer(choice.message.content),
                None => CompletionOutcome::Malformed,
            },
            Err(_) => CompletionOutcome::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_answer() {
        let body = r#"{"choices":[{"message":{"content":"Peak hours are stable."}}]}"#;
        assert_eq!(
            CompletionOutcome::from_body(true, 200, body),
            CompletionOutcome::Answer("Peak hours are stable.".to_string())
        );
    }

    #[test]
    fn test_outcome_empty_choices_is_malformed() {
        let body = r#"{"choices":[]}"#;
        assert_eq!(
            CompletionOutcome::from_body(true, 200, body),
            CompletionOutcome::Malformed
        );
    }

    #[test]
    fn test_outcome_unexpected_shape_is_malformed() {
        let body = r#"{"error":"overloaded"}"#;
        assert_eq!(
            CompletionOutcome::from_body(true, 200, body),
            CompletionOutcome::Malformed
        );
    }

    #[test]
    fn test_outcome_non_success_status() {
        let body = r#"{"choices":[{"message":{"content":"ignored"}}]}"#;
        assert_eq!(
            CompletionOutcome::from_body(false, 502, body),
            CompletionOutcome::Failed("HTTP 502".to_string())
        );
    }

    #[test]
    fn test_request_message_order() {
        let request = CompletionRequest::new("system prompt", "user question");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 300);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::user("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"user""#));
    }
}

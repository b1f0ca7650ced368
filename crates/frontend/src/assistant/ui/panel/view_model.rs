//! Assistant Panel - View Model

use leptos::prelude::*;

/// Одно обращение к ассистенту; следующее обращение замещает предыдущее.
/// `is_sending` одновременно служит reentrancy guard.
#[derive(Clone, Copy)]
pub struct AssistantPanelVm {
    pub query: RwSignal<String>,
    pub response: RwSignal<Option<String>>,
    pub is_sending: RwSignal<bool>,
    pub is_expanded: RwSignal<bool>,
}

impl AssistantPanelVm {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            response: RwSignal::new(None),
            is_sending: RwSignal::new(false),
            is_expanded: RwSignal::new(true),
        }
    }
}

/// Гейт перед отправкой: пустой (после trim) запрос или уже идущее
/// обращение тихо отбрасываются, без ошибки.
pub fn accept_query(raw: &str, is_sending: bool) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_sending {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_rejected() {
        assert_eq!(accept_query("", false), None);
        assert_eq!(accept_query("   \n", false), None);
    }

    #[test]
    fn test_pending_invocation_blocks_resubmit() {
        assert_eq!(accept_query("peak hours?", true), None);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(
            accept_query("  peak hours?  ", false),
            Some("peak hours?".to_string())
        );
    }
}

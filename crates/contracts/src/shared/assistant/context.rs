use crate::enums::DashboardSection;
use serde::{Deserialize, Serialize};

/// Доли покупательских черт в процентах
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CustomerTraits {
    pub price_sensitive: u8,
    pub brand_loyal: u8,
    pub impulse_buyer: u8,
}

/// Контекст раздела для ассистента.
///
/// Собирается заново на каждый запрос; только чтение. Содержит агрегаты,
/// на которые опираются и системный промпт, и локальный fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightContext {
    pub total_transactions: u64,
    pub total_revenue: f64,
    pub average_basket_size: f64,
    pub top_products: Vec<String>,
    pub peak_hours: Vec<String>,
    pub customer_traits: CustomerTraits,
    pub focus: String,
}

impl InsightContext {
    /// Построить контекст для раздела дашборда
    pub fn for_section(section: DashboardSection) -> Self {
        Self {
            total_transactions: 15_847,
            total_revenue: 234_567.0,
            average_basket_size: 14.82,
            top_products: vec![
                "Marlboro Red".to_string(),
                "Lucky Me Pancit Canton".to_string(),
                "Tide Detergent".to_string(),
                "Coca-Cola".to_string(),
            ],
            peak_hours: vec![
                "7-9 AM".to_string(),
                "12-1 PM".to_string(),
                "5-7 PM".to_string(),
            ],
            customer_traits: CustomerTraits {
                price_sensitive: 45,
                brand_loyal: 38,
                impulse_buyer: 32,
            },
            focus: section.focus().to_string(),
        }
    }

    /// Системная инструкция для удалённого completion-сервиса
    pub fn system_prompt(&self) -> String {
        let data = serde_json::to_string_pretty(self).unwrap_or_default();
        format!(
            "You are Suqi, the retail intelligence assistant. You analyze retail data \
             with expertise in the Philippine retail market.\n\n\
             Current Context: {}\n\
             Available Data: {}\n\n\
             Guidelines:\n\
             - Provide actionable insights based on the data\n\
             - Reference specific numbers from the context\n\
             - Keep responses concise but insightful\n\
             - Focus on business implications",
            self.focus, data
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_deterministic() {
        let a = InsightContext::for_section(DashboardSection::ProductMix);
        let b = InsightContext::for_section(DashboardSection::ProductMix);
        assert_eq!(a.total_transactions, b.total_transactions);
        assert_eq!(a.focus, b.focus);
        assert_eq!(a.top_products, b.top_products);
    }

    #[test]
    fn test_focus_follows_section() {
        let ctx = InsightContext::for_section(DashboardSection::TransactionTrends);
        assert_eq!(ctx.focus, "transaction patterns and timing");
    }

    #[test]
    fn test_system_prompt_carries_context() {
        let ctx = InsightContext::for_section(DashboardSection::ConsumerBehavior);
        let prompt = ctx.system_prompt();
        assert!(prompt.contains("customer behavior and purchasing patterns"));
        assert!(prompt.contains("15847"));
        assert!(prompt.contains("7-9 AM"));
    }
}

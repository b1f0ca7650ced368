use serde::{Deserialize, Serialize};

/// Разделы дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardSection {
    TransactionTrends,
    ProductMix,
    ConsumerBehavior,
    ConsumerProfiling,
}

impl DashboardSection {
    /// Получить код раздела
    pub fn code(&self) -> &'static str {
        match self {
            DashboardSection::TransactionTrends => "transaction-trends",
            DashboardSection::ProductMix => "product-mix",
            DashboardSection::ConsumerBehavior => "consumer-behavior",
            DashboardSection::ConsumerProfiling => "consumer-profiling",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardSection::TransactionTrends => "Transaction Trends",
            DashboardSection::ProductMix => "Product Mix",
            DashboardSection::ConsumerBehavior => "Consumer Behavior",
            DashboardSection::ConsumerProfiling => "Consumer Profiling",
        }
    }

    /// Фокус раздела для контекста ассистента
    pub fn focus(&self) -> &'static str {
        match self {
            DashboardSection::TransactionTrends => "transaction patterns and timing",
            DashboardSection::ProductMix => "product categories and combinations",
            DashboardSection::ConsumerBehavior => "customer behavior and purchasing patterns",
            DashboardSection::ConsumerProfiling => "customer demographics and traits",
        }
    }

    /// Получить все разделы
    pub fn all() -> Vec<DashboardSection> {
        vec![
            DashboardSection::TransactionTrends,
            DashboardSection::ProductMix,
            DashboardSection::ConsumerBehavior,
            DashboardSection::ConsumerProfiling,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "transaction-trends" => Some(DashboardSection::TransactionTrends),
            "product-mix" => Some(DashboardSection::ProductMix),
            "consumer-behavior" => Some(DashboardSection::ConsumerBehavior),
            "consumer-profiling" => Some(DashboardSection::ConsumerProfiling),
            _ => None,
        }
    }
}

impl std::fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for section in DashboardSection::all() {
            assert_eq!(DashboardSection::from_code(section.code()), Some(section));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(DashboardSection::from_code("inventory"), None);
    }
}

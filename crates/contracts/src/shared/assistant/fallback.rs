use super::context::InsightContext;
use crate::shared::format::{format_count, format_money, format_number_with_decimals};

/// Insight category a free-text query resolves to when the remote service
/// is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTopic {
    Timing,
    Products,
    Customers,
    Revenue,
    Generic,
}

/// Keyword cascade, evaluated in fixed priority order; first match wins.
const TOPIC_RULES: &[(InsightTopic, &[&str])] = &[
    (InsightTopic::Timing, &["peak", "busy", "time"]),
    (InsightTopic::Products, &["product", "item", "sell"]),
    (InsightTopic::Customers, &["customer", "behavior", "trait"]),
    (InsightTopic::Revenue, &["revenue", "sales", "profit"]),
];

/// Classify a query into an insight topic.
///
/// Pure function of the lower-cased trimmed text; no keyword match means
/// `Generic`, never an error.
pub fn classify(query: &str) -> InsightTopic {
    let query = query.trim().to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(InsightTopic::Generic)
}

/// Fill the topic template from the section context
pub fn synthesize(topic: InsightTopic, ctx: &InsightContext) -> String {
    match topic {
        InsightTopic::Timing => format!(
            "Based on our transaction data of {} transactions, peak hours are {}. \
             Morning rush (7-9 AM) and evening commute (5-7 PM) show 60% higher \
             traffic than average.",
            format_count(ctx.total_transactions),
            ctx.peak_hours.join(", ")
        ),
        InsightTopic::Products => {
            let leaders: Vec<&str> = ctx
                .top_products
                .iter()
                .take(3)
                .map(|p| p.as_str())
                .collect();
            format!(
                "Top performers include {}. Tobacco products drive 35% of transactions \
                 while bundled purchases (snacks + beverages) show 40% higher margins.",
                leaders.join(", ")
            )
        }
        InsightTopic::Customers => format!(
            "Customer analysis shows {}% are price-sensitive, {}% show brand loyalty. \
             Average basket size is ₱{} with 85% being repeat local customers.",
            ctx.customer_traits.price_sensitive,
            ctx.customer_traits.brand_loyal,
            format_number_with_decimals(ctx.average_basket_size, 2)
        ),
        InsightTopic::Revenue => format!(
            "Current revenue stands at ₱{} with an average basket size of ₱{}. \
             Bundle promotions and premium product positioning could increase \
             revenue by 15-20%.",
            format_money(ctx.total_revenue),
            format_number_with_decimals(ctx.average_basket_size, 2)
        ),
        InsightTopic::Generic => format!(
            "Based on our retail data analysis of {} transactions, I can provide \
             insights on transaction patterns, product performance, and customer \
             behavior. Could you be more specific about what aspect you'd like me \
             to analyze?",
            format_count(ctx.total_transactions)
        ),
    }
}

/// Deterministic local answer for a query the remote service could not take
pub fn fallback_response(query: &str, ctx: &InsightContext) -> String {
    synthesize(classify(query), ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DashboardSection;

    fn ctx() -> InsightContext {
        InsightContext::for_section(DashboardSection::ProductMix)
    }

    #[test]
    fn test_classify_timing() {
        assert_eq!(classify("What are the peak hours?"), InsightTopic::Timing);
        assert_eq!(classify("  when is it BUSY  "), InsightTopic::Timing);
        assert_eq!(classify("best time to restock"), InsightTopic::Timing);
    }

    #[test]
    fn test_classify_products() {
        assert_eq!(classify("Which products sell best?"), InsightTopic::Products);
        assert_eq!(classify("slowest moving items"), InsightTopic::Products);
    }

    #[test]
    fn test_classify_customers() {
        assert_eq!(classify("Customer behavior insights"), InsightTopic::Customers);
        assert_eq!(classify("shopper traits"), InsightTopic::Customers);
    }

    #[test]
    fn test_classify_revenue() {
        assert_eq!(classify("Revenue optimization tips"), InsightTopic::Revenue);
        assert_eq!(classify("how is profit trending"), InsightTopic::Revenue);
    }

    #[test]
    fn test_classify_priority_order() {
        // "time" (timing) and "sales" (revenue) both present; timing is
        // earlier in the cascade and must win.
        assert_eq!(classify("sales by time of day"), InsightTopic::Timing);
        // "sell" (products) beats "customer" rules only by order of sets.
        assert_eq!(classify("what do customers sell back"), InsightTopic::Products);
    }

    #[test]
    fn test_classify_no_match_is_generic() {
        assert_eq!(classify("asdkjasd"), InsightTopic::Generic);
        assert_eq!(classify(""), InsightTopic::Generic);
    }

    #[test]
    fn test_timing_response_joins_peak_hours() {
        let response = fallback_response("What are the peak hours?", &ctx());
        assert!(response.contains("7-9 AM, 12-1 PM, 5-7 PM"));
        assert!(response.contains("15,847"));
    }

    #[test]
    fn test_product_response_lists_first_three() {
        let response = fallback_response("Which products sell best?", &ctx());
        assert!(response.contains("Marlboro Red, Lucky Me Pancit Canton, Tide Detergent"));
        // The fourth product is never mentioned.
        assert!(!response.contains("Coca-Cola"));
    }

    #[test]
    fn test_customer_response_uses_traits_and_basket() {
        let response = fallback_response("customer traits?", &ctx());
        assert!(response.contains("45%"));
        assert!(response.contains("38%"));
        assert!(response.contains("₱14.82"));
    }

    #[test]
    fn test_revenue_response_uses_revenue_and_basket() {
        let response = fallback_response("revenue this month", &ctx());
        assert!(response.contains("₱234,567"));
        assert!(response.contains("₱14.82"));
    }

    #[test]
    fn test_generic_response_mentions_transactions_only() {
        let response = fallback_response("asdkjasd", &ctx());
        assert!(response.contains("15,847"));
        assert!(!response.contains("₱"));
        assert!(!response.contains("7-9 AM"));
    }

    #[test]
    fn test_fallback_always_non_empty() {
        for query in ["", "   ", "peak", "???", "ничего похожего"] {
            assert!(!fallback_response(query, &ctx()).is_empty());
        }
    }
}

//! Static per-section insight content shown above the chat box

use contracts::enums::DashboardSection;

pub struct SectionInsights {
    pub title: &'static str,
    pub insights: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Curated talking points for a dashboard section
pub fn for_section(section: DashboardSection) -> SectionInsights {
    match section {
        DashboardSection::TransactionTrends => SectionInsights {
            title: "Transaction Trends Insights",
            insights: &[
                "🕐 Peak hours: 7-9 AM and 5-7 PM drive 60% of daily volume",
                "💰 Weekend transactions average 15% higher value",
                "📍 Metro Manila locations show 2x transaction velocity",
                "⏱️ Average transaction duration: 45 seconds",
            ],
            recommendations: &[
                "Staff high-traffic locations during peak hours",
                "Promote premium products during weekend rushes",
                "Optimize checkout process to reduce wait times",
            ],
        },
        DashboardSection::ProductMix => SectionInsights {
            title: "Product Mix Intelligence",
            insights: &[
                "🚬 Tobacco products account for 35% of transactions",
                "🧴 Personal care frequently bundled with snacks (67%)",
                "🔄 Marlboro → Fortune substitution rate: 23%",
                "📦 3+ item baskets have 40% higher profit margins",
            ],
            recommendations: &[
                "Place complementary products near tobacco displays",
                "Stock Fortune when Marlboro inventory is low",
                "Create bundle promotions for 3+ item purchases",
            ],
        },
        DashboardSection::ConsumerBehavior => SectionInsights {
            title: "Behavioral Pattern Analysis",
            insights: &[
                "🗣️ 78% of customers request specific brands",
                "👉 Pointing behavior increases with older demographics",
                "💡 Store suggestions accepted 43% of the time",
                "❓ Uncertainty signals: \"May available ba kayo ng...\"",
            ],
            recommendations: &[
                "Train staff on upselling during uncertainty moments",
                "Position popular brands at eye level",
                "Use visual cues for customers who point",
            ],
        },
        DashboardSection::ConsumerProfiling => SectionInsights {
            title: "Customer Profile Insights",
            insights: &[
                "👨 Male customers: 65% of tobacco purchases",
                "👩 Female customers: 75% of personal care",
                "🏠 Repeat customers from 500m radius: 85%",
                "⏰ Age 25-40 dominates evening transactions",
            ],
            recommendations: &[
                "Target male-oriented promos for tobacco",
                "Expand personal care selection for female customers",
                "Implement loyalty programs for nearby residents",
            ],
        },
    }
}

use chrono::Utc;
use contracts::dashboards::d410_product_mix::{
    BrandShare, CategoryShare, ProductMixResponse, SkuStats,
};

/// Продуктовый микс для дашборда.
///
/// Датасет статичный (подключение реальных источников вне рамок сервиса);
/// суммы долей — ориентировочные и сервисом не проверяются.
pub fn product_mix() -> ProductMixResponse {
    ProductMixResponse {
        categories: sample_categories(),
        sku_stats: SkuStats {
            total_skus: 369,
            active_skus: 342,
            new_skus: 12,
        },
        as_of: Utc::now(),
    }
}

fn brand(name: &str, value: f64, color_token: &str) -> BrandShare {
    BrandShare {
        name: name.to_string(),
        value,
        color_token: color_token.to_string(),
    }
}

fn sample_categories() -> Vec<CategoryShare> {
    vec![
        CategoryShare {
            name: "Snacks & Beverages".to_string(),
            value: 30.0,
            color_token: "#FFD700".to_string(),
            brands: vec![
                brand("Coca-Cola", 8.0, "#FFD700"),
                brand("Piattos", 6.0, "#FFC700"),
                brand("Nova", 5.0, "#FFB700"),
                brand("Royal", 4.0, "#FFA700"),
                brand("Pepsi", 3.0, "#FF9700"),
                brand("Others", 4.0, "#FF8700"),
            ],
        },
        CategoryShare {
            name: "Tobacco Products".to_string(),
            value: 45.0,
            color_token: "#FF6B35".to_string(),
            brands: vec![
                brand("Marlboro", 25.0, "#FF6B35"),
                brand("Lucky Strike", 12.0, "#FF5B25"),
                brand("Philip Morris", 5.0, "#FF4B15"),
                brand("Others", 3.0, "#FF3B05"),
            ],
        },
        CategoryShare {
            name: "Personal Care".to_string(),
            value: 18.0,
            color_token: "#4A90E2".to_string(),
            brands: vec![
                brand("Colgate", 6.0, "#4A90E2"),
                brand("Palmolive", 4.0, "#3A80D2"),
                brand("Head & Shoulders", 3.0, "#2A70C2"),
                brand("Sunsilk", 3.0, "#1A60B2"),
                brand("Others", 2.0, "#0A50A2"),
            ],
        },
        CategoryShare {
            name: "Household Items".to_string(),
            value: 7.0,
            color_token: "#7B68EE".to_string(),
            brands: vec![
                brand("Tide", 2.0, "#7B68EE"),
                brand("Ariel", 2.0, "#6B58DE"),
                brand("Downy", 1.0, "#5B48CE"),
                brand("Joy", 1.0, "#4B38BE"),
                brand("Others", 1.0, "#3B28AE"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_product_mix::build_tree;

    #[test]
    fn test_category_shares_cover_the_mix() {
        let categories = sample_categories();
        let total: f64 = categories.iter().map(|c| c.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_dataset_builds_a_two_level_tree() {
        let response = product_mix();
        let tree = build_tree(&response.categories, None);
        assert_eq!(tree.children.len(), 4);
        assert!(tree.children.iter().all(|c| !c.children.is_empty()));
    }
}

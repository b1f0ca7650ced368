use super::dto::{BrandShare, CategoryShare, MixTreeNode};

/// Name of the synthetic root node when no category is focused
const ROOT_NAME: &str = "Product Categories";

/// Build the display tree for the treemap renderer.
///
/// With no focus the root carries all categories in input order, each with its
/// brands pre-attached for drill-in. With a focused category the root carries
/// that category's brands only. The result is a pure function of the inputs
/// and every node is freshly constructed, so the renderer can rely on
/// reference inequality between successive calls.
pub fn build_tree(categories: &[CategoryShare], focus: Option<&CategoryShare>) -> MixTreeNode {
    match focus {
        Some(category) => MixTreeNode {
            name: category.name.clone(),
            size: category.value,
            color_token: category.color_token.clone(),
            children: category.brands.iter().map(brand_node).collect(),
        },
        None => MixTreeNode {
            name: ROOT_NAME.to_string(),
            size: categories.iter().map(|c| c.value).sum(),
            color_token: String::new(),
            children: categories.iter().map(category_node).collect(),
        },
    }
}

fn category_node(category: &CategoryShare) -> MixTreeNode {
    MixTreeNode {
        name: category.name.clone(),
        size: category.value,
        color_token: category.color_token.clone(),
        children: category.brands.iter().map(brand_node).collect(),
    }
}

fn brand_node(brand: &BrandShare) -> MixTreeNode {
    MixTreeNode {
        name: brand.name.clone(),
        size: brand.value,
        color_token: brand.color_token.clone(),
        children: vec![],
    }
}

/// Look up a category by exact name.
///
/// A miss is not an error: callers keep the current focus when `None` comes
/// back (e.g. a click event carrying a stale node name).
pub fn select_category<'a>(
    categories: &'a [CategoryShare],
    name: &str,
) -> Option<&'a CategoryShare> {
    categories.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, value: f64, brands: Vec<(&str, f64)>) -> CategoryShare {
        CategoryShare {
            name: name.to_string(),
            value,
            color_token: format!("cat-{name}"),
            brands: brands
                .into_iter()
                .map(|(brand, share)| BrandShare {
                    name: brand.to_string(),
                    value: share,
                    color_token: format!("brand-{brand}"),
                })
                .collect(),
        }
    }

    fn sample() -> Vec<CategoryShare> {
        vec![
            category("Snacks & Beverages", 30.0, vec![("Coca-Cola", 8.0), ("Piattos", 6.0)]),
            category("Tobacco Products", 45.0, vec![("Marlboro", 25.0)]),
            category("Household Items", 7.0, vec![]),
        ]
    }

    #[test]
    fn test_unfocused_tree_mirrors_input_order() {
        let categories = sample();
        let tree = build_tree(&categories, None);

        assert_eq!(tree.children.len(), categories.len());
        for (child, cat) in tree.children.iter().zip(&categories) {
            assert_eq!(child.name, cat.name);
            assert_eq!(child.size, cat.value);
            assert_eq!(child.children.len(), cat.brands.len());
        }
    }

    #[test]
    fn test_focused_tree_exposes_brands_only() {
        let categories = sample();
        let focus = select_category(&categories, "Snacks & Beverages").unwrap();
        let tree = build_tree(&categories, Some(focus));

        assert_eq!(tree.name, "Snacks & Beverages");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].name, "Coca-Cola");
        assert_eq!(tree.children[0].size, 8.0);
        assert_eq!(tree.children[1].name, "Piattos");
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn test_brandless_category_is_childless_leaf() {
        let categories = sample();
        let tree = build_tree(&categories, None);

        let leaf = &tree.children[2];
        assert_eq!(leaf.name, "Household Items");
        assert_eq!(leaf.size, 7.0);
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn test_zero_value_passes_through() {
        let categories = vec![category("Empty", 0.0, vec![])];
        let tree = build_tree(&categories, None);
        assert_eq!(tree.children[0].size, 0.0);
    }

    #[test]
    fn test_input_order_is_never_sorted() {
        // Deliberately not sorted by value; the renderer gets insertion order.
        let categories = vec![
            category("Small", 1.0, vec![]),
            category("Large", 90.0, vec![]),
            category("Medium", 9.0, vec![]),
        ];
        let tree = build_tree(&categories, None);
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Small", "Large", "Medium"]);
    }

    #[test]
    fn test_successive_calls_build_fresh_nodes() {
        let categories = sample();
        let first = build_tree(&categories, None);
        let second = build_tree(&categories, None);
        // Equal by value, but distinct allocations.
        assert_eq!(first, second);
        assert!(!std::ptr::eq(&first.children[0], &second.children[0]));
    }

    #[test]
    fn test_select_category_exact_match_only() {
        let categories = sample();
        assert!(select_category(&categories, "Tobacco Products").is_some());
        assert!(select_category(&categories, "Tobacco").is_none());
        assert!(select_category(&categories, "tobacco products").is_none());
        assert!(select_category(&categories, "").is_none());
    }

    #[test]
    fn test_clearing_focus_reproduces_root_tree() {
        let categories = sample();
        let unfocused = build_tree(&categories, None);

        let focus = select_category(&categories, "Tobacco Products");
        let _drilled = build_tree(&categories, focus);

        // Back action: focus drops to None and the unfocused tree comes back.
        let cleared = build_tree(&categories, None);
        assert_eq!(cleared, unfocused);
    }
}

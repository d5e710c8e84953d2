use serde::{Deserialize, Serialize};

use hcn_core::{BrandId, CategoryId};

use crate::product::Product;

/// Conjunctive product filter. `None` fields do not constrain.
///
/// Attribute fields match exactly; `text` is a case-insensitive substring match
/// over name, SKU and short description. There is no ranking: matches come back
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<CategoryId>,
    pub brand: Option<BrandId>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub featured: Option<bool>,
    #[serde(rename = "new")]
    pub is_new: Option<bool>,
    pub text: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.as_ref().is_some_and(|c| c != product.category_id()) {
            return false;
        }
        if self.brand.as_ref().is_some_and(|b| b != product.brand_id()) {
            return false;
        }
        if self.material.as_deref().is_some_and(|m| m != product.material()) {
            return false;
        }
        if self.size.as_deref().is_some_and(|s| s != product.size()) {
            return false;
        }
        if self.featured.is_some_and(|f| f != product.is_featured()) {
            return false;
        }
        if self.is_new.is_some_and(|n| n != product.is_new()) {
            return false;
        }
        match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                [product.name(), product.sku(), product.short_description()]
                    .iter()
                    .any(|haystack| haystack.to_lowercase().contains(&needle))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;
    use hcn_core::{ProductId, Slug};

    fn sample() -> Product {
        ProductDraft::new(
            ProductId::new("prod-077").unwrap(),
            Slug::new("tubo-cobre-tipo-l-cobre-1-2-077").unwrap(),
            "Tubo Cobre Tipo L",
            CategoryId::new("tuberias").unwrap(),
            BrandId::new("nibco").unwrap(),
            "HCN-0077",
        )
        .material("Cobre")
        .size("1/2\"")
        .short_description("Tubo Cobre Tipo L Cobre 1/2\"")
        .featured(true)
        .build()
        .unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&sample()));
    }

    #[test]
    fn attribute_fields_match_exactly() {
        let product = sample();
        let filter = ProductFilter {
            category: Some(CategoryId::new("tuberias").unwrap()),
            material: Some("Cobre".to_string()),
            size: Some("1/2\"".to_string()),
            featured: Some(true),
            ..Default::default()
        };
        assert!(filter.matches(&product));

        let wrong_material = ProductFilter {
            material: Some("cobre".to_string()),
            ..Default::default()
        };
        assert!(!wrong_material.matches(&product));

        let wrong_flag = ProductFilter {
            is_new: Some(true),
            ..Default::default()
        };
        assert!(!wrong_flag.matches(&product));
    }

    #[test]
    fn text_is_case_insensitive_substring() {
        let product = sample();
        for text in ["cobre", "TIPO L", "hcn-0077", "  tubo  "] {
            let filter = ProductFilter {
                text: Some(text.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&product), "expected match for {text:?}");
        }

        let miss = ProductFilter {
            text: Some("bronce".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&product));
    }

    #[test]
    fn new_flag_uses_the_product_wire_name() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"new": true, "material": "Bronce"}"#).unwrap();
        assert_eq!(filter.is_new, Some(true));
        assert_eq!(filter.material.as_deref(), Some("Bronce"));

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["new"], true);
        assert!(json.get("isNew").is_none());

        let product = serde_json::to_value(sample()).unwrap();
        assert!(product.get("new").is_some());
    }
}

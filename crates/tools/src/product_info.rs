//! Product information lookup.

use crate::catalog::{PRODUCTS, products_by_id};
use async_trait::async_trait;
use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolResult};

pub struct ProductInfoTool;

#[async_trait]
impl Tool for ProductInfoTool {
    fn tool_name(&self) -> ToolName {
        ToolName::GetProductInfo
    }

    fn description(&self) -> &str {
        "Get detailed information about the eco-friendly cleaning products used by BreatheEasy. Use this when customers ask about product ingredients, certifications, allergen-safety, or what products are used for specific cleaning tasks."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "product_category": {
                    "type": "string",
                    "description": "Category of products to retrieve: 'all' for all products, 'all_purpose', 'bathroom', 'floor', or 'glass' for specific categories",
                    "default": "all"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        let category = arguments
            .get("product_category")
            .map(String::as_str)
            .unwrap_or("all");
        Ok(ToolResult::json(product_info(category)))
    }
}

fn product_info(category: &str) -> serde_json::Value {
    let category = category.to_lowercase().replace(' ', "_");

    if category == "all" {
        return serde_json::Value::Object(products_by_id(PRODUCTS));
    }

    match PRODUCTS
        .iter()
        .find(|p| p.id.contains(&category) || p.name.to_lowercase().contains(&category))
    {
        Some(product) => serde_json::Value::Object(products_by_id([product])),
        None => serde_json::json!({
            "message": "Product category not found",
            "available_categories": PRODUCTS.iter().map(|p| p.id).collect::<Vec<_>>(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_all_products() {
        let result = ProductInfoTool.execute(&ToolArguments::new()).await.unwrap();
        let data = result.data.unwrap();
        assert_eq!(data.as_object().unwrap().len(), 4);
    }

    #[test]
    fn category_matches_id_or_name() {
        let data = product_info("Bathroom");
        assert!(data.get("bathroom_cleaner").is_some());

        let data = product_info("all purpose");
        assert!(data.get("all_purpose_cleaner").is_some());

        let data = product_info("crystalclear");
        assert!(data.get("glass_cleaner").is_some());
    }

    #[test]
    fn unknown_category_lists_available() {
        let data = product_info("oven");
        assert_eq!(data["message"], "Product category not found");
        assert_eq!(data["available_categories"].as_array().unwrap().len(), 4);
    }
}

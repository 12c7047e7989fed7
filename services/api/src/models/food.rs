//! Catalog models for food items

use serde::{Deserialize, Serialize};

/// Food item entity
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: i64,
    pub category: String,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub description: String,
}

/// Validated payload for a catalog insert
#[derive(Debug, Clone)]
pub struct NewFoodItem {
    pub category: String,
    pub name: String,
    pub short_description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub description: String,
}

/// Raw request body for catalog creation
///
/// All fields are optional at the deserialization layer so that a single
/// validation pass can report every missing required field at once.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub category: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl CreateFoodRequest {
    /// Check required fields and produce the insert payload
    ///
    /// Returns the names of every missing required field on failure, so the
    /// caller can report them all in one response.
    pub fn validate(self) -> Result<NewFoodItem, Vec<&'static str>> {
        let mut missing = Vec::new();

        if self.category.as_deref().is_none_or(|s| s.trim().is_empty()) {
            missing.push("category");
        }
        if self.name.as_deref().is_none_or(|s| s.trim().is_empty()) {
            missing.push("name");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self
            .description
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
        {
            missing.push("description");
        }

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(NewFoodItem {
            category: self.category.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            short_description: self.short_description,
            price: self.price.unwrap_or_default(),
            image: self.image,
            description: self.description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateFoodRequest {
        CreateFoodRequest {
            category: Some("pizza".to_string()),
            name: Some("Margherita".to_string()),
            short_description: Some("tomato and mozzarella".to_string()),
            price: Some(9.5),
            image: None,
            description: Some("Classic Neapolitan pizza".to_string()),
        }
    }

    #[test]
    fn complete_request_validates() {
        let item = full_request().validate().unwrap();
        assert_eq!(item.name, "Margherita");
        assert_eq!(item.price, 9.5);
        assert!(item.image.is_none());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut request = full_request();
        request.short_description = None;
        request.image = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn every_missing_required_field_is_reported() {
        let request = CreateFoodRequest {
            category: None,
            name: Some("   ".to_string()),
            short_description: None,
            price: None,
            image: None,
            description: None,
        };

        let missing = request.validate().unwrap_err();
        assert_eq!(missing, vec!["category", "name", "price", "description"]);
    }

    #[test]
    fn short_description_uses_camel_case_json_name() {
        let body = r#"{
            "category": "pizza",
            "name": "Margherita",
            "shortDescription": "small",
            "price": 9.5,
            "description": "Classic"
        }"#;
        let request: CreateFoodRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.short_description.as_deref(), Some("small"));
    }
}

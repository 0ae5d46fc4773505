// Schema validation for product payloads, independent of any store
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::models::product::{Category, NewProduct, ProductPatch};

/// Field-level validation failures, keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product validation failed")?;
        let mut sep = ": ";
        for (field, message) in &self.fields {
            write!(f, "{}{}: {}", sep, field, message)?;
            sep = ", ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const PRICE: &str = "price";
const IMAGE: &str = "image";
const CATEGORY: &str = "category";
const IN_STOCK: &str = "inStock";

impl NewProduct {
    /// Validate a creation payload. All required fields must be present.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let map = as_object(body)?;
        let mut errors = ValidationErrors::new();

        let name = required(map, NAME, &mut errors, cast_name);
        let description = required(map, DESCRIPTION, &mut errors, cast_description);
        let price = required(map, PRICE, &mut errors, cast_price);
        let image = required(map, IMAGE, &mut errors, cast_image);
        let category = required(map, CATEGORY, &mut errors, cast_category);
        let in_stock = optional(map, IN_STOCK, &mut errors, cast_bool).unwrap_or(true);

        match (name, description, price, image, category) {
            (Some(name), Some(description), Some(price), Some(image), Some(category)) => errors
                .into_result(NewProduct {
                    name,
                    description,
                    price,
                    image,
                    category,
                    in_stock,
                }),
            _ => Err(errors),
        }
    }
}

impl ProductPatch {
    /// Validate a partial update. Only carried fields are checked, against the creation rules.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let map = as_object(body)?;
        let mut errors = ValidationErrors::new();

        let patch = ProductPatch {
            name: optional(map, NAME, &mut errors, cast_name),
            description: optional(map, DESCRIPTION, &mut errors, cast_description),
            price: optional(map, PRICE, &mut errors, cast_price),
            image: optional(map, IMAGE, &mut errors, cast_image),
            category: optional(map, CATEGORY, &mut errors, cast_category),
            in_stock: optional(map, IN_STOCK, &mut errors, cast_bool),
        };

        errors.into_result(patch)
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object()
        .ok_or_else(|| ValidationErrors::single("body", "Expected a JSON object"))
}

fn required<T>(
    map: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
    cast: fn(&Value) -> Result<T, String>,
) -> Option<T> {
    match map.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, format!("Path `{}` is required.", field));
            None
        }
        Some(value) => run(field, value, errors, cast),
    }
}

// A present `null` on an optional field still counts as clearing a required value
fn optional<T>(
    map: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
    cast: fn(&Value) -> Result<T, String>,
) -> Option<T> {
    match map.get(field) {
        None => None,
        Some(Value::Null) if field == IN_STOCK => None,
        Some(Value::Null) => {
            errors.add(field, format!("Path `{}` is required.", field));
            None
        }
        Some(value) => run(field, value, errors, cast),
    }
}

fn run<T>(
    field: &'static str,
    value: &Value,
    errors: &mut ValidationErrors,
    cast: fn(&Value) -> Result<T, String>,
) -> Option<T> {
    match cast(value) {
        Ok(v) => Some(v),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

fn cast_text(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("Cast to string failed for value {}", other)),
    }
}

fn cast_name(value: &Value) -> Result<String, String> {
    let name = cast_text(value)?.trim().to_string();
    if name.is_empty() {
        return Err("Path `name` is required.".to_string());
    }
    Ok(name)
}

// Required strings reject "" as well as a missing value
fn cast_required_text(value: &Value, field: &str) -> Result<String, String> {
    let text = cast_text(value)?;
    if text.is_empty() {
        return Err(format!("Path `{}` is required.", field));
    }
    Ok(text)
}

fn cast_description(value: &Value) -> Result<String, String> {
    cast_required_text(value, DESCRIPTION)
}

fn cast_image(value: &Value) -> Result<String, String> {
    cast_required_text(value, IMAGE)
}

fn cast_price(value: &Value) -> Result<f64, String> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite())
    .ok_or_else(|| format!("Cast to Number failed for value {}", value))?;

    if price < 0.0 {
        return Err(format!(
            "Path `price` ({}) is less than minimum allowed value (0).",
            price
        ));
    }
    Ok(price)
}

fn cast_category(value: &Value) -> Result<Category, String> {
    let raw = cast_text(value)?;
    raw.parse::<Category>()
        .map_err(|_| format!("`{}` is not a valid enum value for path `category`.", raw))
}

fn cast_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(format!("Cast to Boolean failed for value {}", value)),
        },
        Value::Number(n) if n.as_i64() == Some(1) => Ok(true),
        Value::Number(n) if n.as_i64() == Some(0) => Ok(false),
        _ => Err(format!("Cast to Boolean failed for value {}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "  Smart Fitness Watch ",
            "description": "Track your health and fitness goals",
            "price": 299.99,
            "image": "/placeholder-product.svg",
            "category": "Electronics"
        })
    }

    #[test]
    fn create_applies_defaults_and_trims() {
        let product = NewProduct::from_json(&valid_body()).unwrap();
        assert_eq!(product.name, "Smart Fitness Watch");
        assert!(product.in_stock);
        assert_eq!(product.category, Category::Electronics);
    }

    #[test]
    fn zero_price_is_accepted() {
        let mut body = valid_body();
        body["price"] = json!(0);
        assert_eq!(NewProduct::from_json(&body).unwrap().price, 0.0);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut body = valid_body();
        body["price"] = json!(-0.01);
        let errors = NewProduct::from_json(&body).unwrap_err();
        assert!(errors.get("price").unwrap().contains("minimum"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut body = valid_body();
        body["category"] = json!("Toys");
        let errors = NewProduct::from_json(&body).unwrap_err();
        assert!(errors.get("category").is_some());
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = NewProduct::from_json(&json!({ "name": "   " })).unwrap_err();
        for field in ["name", "description", "price", "image", "category"] {
            assert!(errors.get(field).is_some(), "expected error for {}", field);
        }
    }

    #[test]
    fn empty_description_and_image_fail_on_create() {
        let mut body = valid_body();
        body["description"] = json!("");
        body["image"] = json!("");
        let errors = NewProduct::from_json(&body).unwrap_err();
        assert_eq!(errors.get("description"), Some("Path `description` is required."));
        assert_eq!(errors.get("image"), Some("Path `image` is required."));
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn empty_strings_fail_on_patch() {
        let errors = ProductPatch::from_json(&json!({
            "description": "",
            "image": "",
            "name": ""
        }))
        .unwrap_err();
        for field in ["description", "image", "name"] {
            assert_eq!(
                errors.get(field),
                Some(format!("Path `{}` is required.", field).as_str())
            );
        }
    }

    #[test]
    fn lenient_casts_follow_schema_types() {
        let mut body = valid_body();
        body["price"] = json!("19.50");
        body["inStock"] = json!("false");
        let product = NewProduct::from_json(&body).unwrap();
        assert_eq!(product.price, 19.5);
        assert!(!product.in_stock);

        body["price"] = json!("cheap");
        assert!(NewProduct::from_json(&body).unwrap_err().get("price").is_some());
    }

    #[test]
    fn patch_carries_only_present_fields() {
        let patch = ProductPatch::from_json(&json!({ "inStock": false })).unwrap();
        assert_eq!(
            patch,
            ProductPatch {
                in_stock: Some(false),
                ..Default::default()
            }
        );
    }

    #[test]
    fn patch_ignores_system_fields() {
        let patch = ProductPatch::from_json(&json!({
            "_id": "00000000-0000-0000-0000-000000000000",
            "createdAt": "2020-01-01T00:00:00Z",
            "price": 5
        }))
        .unwrap();
        assert_eq!(patch.price, Some(5.0));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn patch_reruns_creation_rules() {
        let errors = ProductPatch::from_json(&json!({
            "price": -1,
            "category": "Groceries",
            "name": null
        }))
        .unwrap_err();
        assert!(errors.get("price").is_some());
        assert!(errors.get("category").is_some());
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(ProductPatch::from_json(&json!([1, 2, 3])).is_err());
        assert!(NewProduct::from_json(&json!("text")).is_err());
    }

    #[test]
    fn display_lists_fields() {
        let errors = ValidationErrors::single("price", "too low");
        assert_eq!(errors.to_string(), "Product validation failed: price: too low");
    }
}

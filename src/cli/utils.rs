use serde_json::{json, Value};
use std::io::Read;

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": false,
                "error": message
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// One product as a JSON document or a short text block
pub fn output_product(output_format: &OutputFormat, product: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(product)?),
        OutputFormat::Text => {
            println!("{}", field(product, "name"));
            println!("  id:       {}", field(product, "_id"));
            println!("  price:    ${}", field(product, "price"));
            println!("  category: {}", field(product, "category"));
            println!("  in stock: {}", field(product, "inStock"));
            println!("  updated:  {}", field(product, "updatedAt"));
        }
    }
    Ok(())
}

/// A product listing; one line per product in text mode
pub fn output_products(output_format: &OutputFormat, products: &[Value]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(products)?),
        OutputFormat::Text if products.is_empty() => println!("No products found"),
        OutputFormat::Text => {
            for product in products {
                println!(
                    "{:<36}  {:<12}  {:>10}  {:<5}  {}",
                    field(product, "_id"),
                    field(product, "category"),
                    format!("${}", field(product, "price")),
                    field(product, "inStock"),
                    field(product, "name"),
                );
            }
        }
    }
    Ok(())
}

fn field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read a JSON document from stdin
pub fn read_json_stdin() -> anyhow::Result<Value> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    if input.trim().is_empty() {
        anyhow::bail!("expected a JSON object on stdin");
    }
    Ok(serde_json::from_str(&input)?)
}

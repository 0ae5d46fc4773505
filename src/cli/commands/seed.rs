use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::cli::{utils, OutputFormat};
use crate::config::{self, StoreBackend};
use crate::database::store;
use crate::pages::home::FEATURED;
use crate::services::{ProductError, ProductService};

#[derive(Args)]
pub struct SeedArgs {
    #[arg(long, help = "JSON file holding an array of products (defaults to the storefront samples)")]
    pub file: Option<PathBuf>,
}

pub async fn handle(args: SeedArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let documents = match &args.file {
        Some(path) => load_file(path)?,
        None => sample_products(),
    };

    let config = config::config();
    config.validate()?;
    ensure_persistent(config.database.backend)?;
    let store = store::connect(&config.database).await?;
    let service = ProductService::new(store.clone());

    let mut created = Vec::new();
    let mut failed = 0usize;
    for (index, document) in documents.iter().enumerate() {
        match service.create(document).await {
            Ok(product) => {
                tracing::debug!("Seeded product {}", product.id);
                created.push(product.id.to_string());
            }
            Err(ProductError::Validation(errors)) => {
                failed += 1;
                utils::output_error(&output_format, &format!("product #{}: {}", index, errors))?;
            }
            Err(e) => {
                store.close().await;
                return Err(e.into());
            }
        }
    }
    store.close().await;

    utils::output_success(
        &output_format,
        &format!(
            "Seeded {} product(s) into the {} store",
            created.len(),
            store.backend()
        ),
        Some(json!({ "created": created, "failed": failed })),
    )
}

// The memory store lives only as long as this process
fn ensure_persistent(backend: StoreBackend) -> anyhow::Result<()> {
    if backend == StoreBackend::Memory {
        anyhow::bail!(
            "vault seed needs a persistent store; STORE_BACKEND=memory would discard the products on exit. \
             Set DATABASE_URL or STORE_BACKEND=postgres"
        );
    }
    Ok(())
}

fn load_file(path: &PathBuf) -> anyhow::Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content)? {
        Value::Array(items) => Ok(items),
        single @ Value::Object(_) => Ok(vec![single]),
        _ => anyhow::bail!("{} must contain a product object or an array of them", path.display()),
    }
}

/// The landing page samples as creation payloads
pub fn sample_products() -> Vec<Value> {
    FEATURED
        .iter()
        .map(|product| {
            json!({
                "name": product.name,
                "description": product.description,
                "price": product.price,
                "image": crate::pages::PLACEHOLDER_PRODUCT_IMAGE,
                "category": product.category,
                "inStock": true,
            })
        })
        .collect()
}

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::{utils, OutputFormat};

#[derive(Args, Clone)]
pub struct RemoteArgs {
    #[arg(long, env = "SHOPVAULT_URL", default_value = "http://localhost:3000", help = "Server base URL")]
    pub server: String,

    #[arg(long, env = "SHOPVAULT_TOKEN", hide_env_values = true, help = "Session token for mutations")]
    pub token: Option<String>,
}

impl RemoteArgs {
    fn client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(&self.server, self.token.clone())
    }
}

#[derive(Subcommand)]
pub enum ProductCommands {
    #[command(about = "List products, newest first")]
    List {
        #[arg(long, help = "Only this category")]
        category: Option<String>,
        #[arg(long, help = "Only products with this stock flag")]
        in_stock: Option<bool>,
    },

    #[command(about = "Show one product")]
    Get {
        #[arg(help = "Product ID")]
        id: String,
    },

    #[command(about = "Create product from stdin")]
    Create,

    #[command(about = "Update product fields from stdin")]
    Update {
        #[arg(help = "Product ID to update")]
        id: String,
    },

    #[command(about = "Delete product")]
    Delete {
        #[arg(help = "Product ID to delete")]
        id: String,
    },
}

pub async fn handle(
    remote: RemoteArgs,
    cmd: ProductCommands,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let client = remote.client()?;

    match cmd {
        ProductCommands::List { category, in_stock } => {
            let path = list_path(category.as_deref(), in_stock);
            let products = match client.get(&path).await? {
                Value::Array(items) => items,
                other => anyhow::bail!("unexpected listing response: {}", other),
            };
            utils::output_products(&output_format, &products)
        }
        ProductCommands::Get { id } => {
            let product = client.get(&format!("/api/products/{}", id)).await?;
            utils::output_product(&output_format, &product)
        }
        ProductCommands::Create => {
            require_token(&remote)?;
            let body = utils::read_json_stdin()?;
            let product = client.post("/api/products", &body).await?;
            utils::output_product(&output_format, &product)
        }
        ProductCommands::Update { id } => {
            require_token(&remote)?;
            let body = utils::read_json_stdin()?;
            let product = client.put(&format!("/api/products/{}", id), &body).await?;
            utils::output_product(&output_format, &product)
        }
        ProductCommands::Delete { id } => {
            require_token(&remote)?;
            let response = client.delete(&format!("/api/products/{}", id)).await?;
            let message = response
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Product deleted");
            utils::output_success(&output_format, message, Some(json!({ "_id": id })))
        }
    }
}

pub async fn ping(remote: RemoteArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = remote.client()?;
    if client.ping().await {
        utils::output_success(
            &output_format,
            &format!("{} is healthy", remote.server),
            Some(json!({ "status": "up" })),
        )
    } else {
        anyhow::bail!("{} is not responding", remote.server)
    }
}

fn require_token(remote: &RemoteArgs) -> anyhow::Result<()> {
    if remote.token.is_none() {
        anyhow::bail!("a session token is required; pass --token or set SHOPVAULT_TOKEN (see `vault token`)");
    }
    Ok(())
}

fn list_path(category: Option<&str>, in_stock: Option<bool>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(category) = category {
        query.append_pair("category", category);
    }
    if let Some(in_stock) = in_stock {
        query.append_pair("inStock", if in_stock { "true" } else { "false" });
    }
    let query = query.finish();
    if query.is_empty() {
        "/api/products".to_string()
    } else {
        format!("/api/products?{}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_encodes_filters() {
        assert_eq!(list_path(None, None), "/api/products");
        assert_eq!(
            list_path(Some("Home"), Some(false)),
            "/api/products?category=Home&inStock=false"
        );
    }
}

use serde::Deserialize;
use serde_json::{json, Value};

use super::{escape, PLACEHOLDER_PRODUCT_IMAGE};
use crate::database::{Category, ValidationErrors};

const INPUT: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Raw add-product form submission; values are echoed back on failure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    // Checkboxes are only submitted when ticked
    pub in_stock: Option<String>,
}

impl ProductForm {
    /// Blank form for a first visit; new products start in stock
    pub fn blank() -> Self {
        Self {
            category: Category::Electronics.to_string(),
            in_stock: Some("on".to_string()),
            ..Self::default()
        }
    }

    /// Same shape the JSON API accepts, so both paths share validation.
    /// A blank image field falls back to the bundled placeholder.
    pub fn to_json(&self) -> Value {
        let image = match self.image.trim() {
            "" => PLACEHOLDER_PRODUCT_IMAGE,
            image => image,
        };
        json!({
            "name": self.name,
            "description": self.description,
            "price": self.price,
            "image": image,
            "category": self.category,
            "inStock": self.in_stock.is_some(),
        })
    }
}

pub fn render(form: &ProductForm, errors: &ValidationErrors, failure: Option<&str>) -> String {
    let banner = failure
        .map(|message| {
            format!(
                r#"<div class="mb-6 p-3 rounded-md bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200 text-sm" role="alert">{}</div>"#,
                escape(message)
            )
        })
        .unwrap_or_default();

    let options: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = c,
                selected = if form.category == c.as_str() {
                    " selected"
                } else {
                    ""
                },
            )
        })
        .collect();

    format!(
        r#"<div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-8">
<div class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8">
<h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-6">Add Product</h1>
{banner}
<form method="post" action="/dashboard/add-product" class="bg-white dark:bg-gray-800 rounded-lg shadow-md p-6 space-y-5">
{name}
<div>
<label for="description" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">Description</label>
<textarea id="description" name="description" rows="4" required class="{input}">{description}</textarea>
{description_error}
</div>
{price}
{image}
<div>
<label for="category" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">Category</label>
<select id="category" name="category" class="{input}">{options}</select>
{category_error}
</div>
<div class="flex items-center">
<input id="inStock" name="inStock" type="checkbox"{checked} class="h-4 w-4 text-blue-600 border-gray-300 rounded">
<label for="inStock" class="ml-2 text-sm text-gray-700 dark:text-gray-300">In Stock</label>
</div>
<div class="flex justify-end gap-3">
<a href="/products" class="px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md text-gray-700 dark:text-gray-300">Cancel</a>
<button type="submit" class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md font-medium">Add Product</button>
</div>
</form>
</div>
</div>"#,
        banner = banner,
        name = text_field("name", "Name", "text", &form.name, errors),
        description = escape(&form.description),
        description_error = field_error(errors, "description"),
        price = text_field("price", "Price", "number\" step=\"0.01\" min=\"0", &form.price, errors),
        image = text_field("image", "Image URL", "text", &form.image, errors),
        options = options,
        category_error = field_error(errors, "category"),
        checked = if form.in_stock.is_some() { " checked" } else { "" },
        input = INPUT,
    )
}

fn text_field(
    field: &str,
    label: &str,
    kind: &str,
    value: &str,
    errors: &ValidationErrors,
) -> String {
    format!(
        r#"<div>
<label for="{field}" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{label}</label>
<input id="{field}" name="{field}" type="{kind}" value="{value}" class="{input}">
{error}
</div>"#,
        field = field,
        label = label,
        kind = kind,
        value = escape(value),
        input = INPUT,
        error = field_error(errors, field),
    )
}

fn field_error(errors: &ValidationErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| {
            format!(
                r#"<p class="mt-1 text-sm text-red-600 dark:text-red-400">{}</p>"#,
                escape(message)
            )
        })
        .unwrap_or_default()
}

use super::{escape, format_price, not_found_block, product_card, stock_badge};
use crate::database::{Category, Product, ProductFilter};

/// `/products` listing with a category filter bar
pub fn listing(products: &[Product], filter: &ProductFilter) -> String {
    let filters: String = std::iter::once(category_pill("All", "/products", filter.category.is_none()))
        .chain(Category::ALL.iter().map(|c| {
            category_pill(
                c.as_str(),
                &format!("/products?category={}", c),
                filter.category == Some(*c),
            )
        }))
        .collect();

    let grid = if products.is_empty() {
        r#"<div class="text-center py-16">
<h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">No products found</h3>
<p class="text-gray-600 dark:text-gray-400">Check back soon for new arrivals.</p>
</div>"#
            .to_string()
    } else {
        let cards: String = products.iter().map(product_card::render).collect();
        format!(
            r#"<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">{}</div>"#,
            cards
        )
    };

    format!(
        r#"<div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-8">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<div class="mb-8">
<h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">Our Products</h1>
<p class="text-gray-600 dark:text-gray-400">{count} product{plural} available</p>
</div>
<div class="flex flex-wrap gap-2 mb-8">{filters}</div>
{grid}
</div>
</div>"#,
        count = products.len(),
        plural = if products.len() == 1 { "" } else { "s" },
        filters = filters,
        grid = grid,
    )
}

fn category_pill(label: &str, href: &str, active: bool) -> String {
    let class = if active {
        "bg-blue-600 text-white"
    } else {
        "bg-white text-gray-700 dark:bg-gray-800 dark:text-gray-300 hover:bg-gray-100"
    };
    format!(
        r#"<a href="{}" class="px-4 py-2 rounded-full text-sm font-medium {}">{}</a>"#,
        escape(href),
        class,
        escape(label)
    )
}

/// `/products/{id}` detail page
pub fn detail(product: &Product) -> String {
    let (badge_class, badge_label) = stock_badge(product.in_stock);
    format!(
        r#"<div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-8">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<nav class="mb-8">
<ol class="flex items-center space-x-2 text-sm text-gray-600 dark:text-gray-400">
<li><a href="/" class="hover:text-blue-600 dark:hover:text-blue-400">Home</a></li>
<li><span class="mx-2">/</span></li>
<li><a href="/products" class="hover:text-blue-600 dark:hover:text-blue-400">Products</a></li>
<li><span class="mx-2">/</span></li>
<li class="text-gray-900 dark:text-white font-medium">{name}</li>
</ol>
</nav>
<div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
<div class="relative h-96 w-full bg-gray-200 dark:bg-gray-700 rounded-lg overflow-hidden">
<img src="{image}" alt="{name}" class="object-cover w-full h-full">
</div>
<div class="space-y-6">
<div>
<h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">{name}</h1>
<p class="text-lg text-gray-600 dark:text-gray-400">{description}</p>
</div>
<div class="flex items-center space-x-4">
<span class="text-4xl font-bold text-blue-600 dark:text-blue-400">{price}</span>
<span class="px-3 py-1 text-sm font-medium rounded-full {badge_class}">{badge_label}</span>
</div>
<div class="border-t border-gray-200 dark:border-gray-700 pt-6">
<dl class="space-y-4">
<div><dt class="text-sm font-medium text-gray-500 dark:text-gray-400">Category</dt><dd class="text-sm text-gray-900 dark:text-white capitalize">{category}</dd></div>
<div><dt class="text-sm font-medium text-gray-500 dark:text-gray-400">Added</dt><dd class="text-sm text-gray-900 dark:text-white">{added}</dd></div>
</dl>
</div>
<div class="pt-6">{cart}</div>
</div>
</div>
<div class="mt-16">
<h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">Product Details</h2>
<div class="bg-white dark:bg-gray-800 rounded-lg p-6"><p class="text-gray-600 dark:text-gray-300 leading-relaxed">{description}</p></div>
</div>
<div class="mt-12 text-center">
<a href="/products" class="inline-flex items-center px-6 py-3 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700">Back to Products</a>
</div>
</div>
</div>"#,
        name = escape(&product.name),
        image = escape(if product.image.is_empty() {
            super::PLACEHOLDER_PRODUCT_IMAGE
        } else {
            &product.image
        }),
        description = escape(&product.description),
        price = escape(&format_price(product.price)),
        badge_class = badge_class,
        badge_label = badge_label,
        category = product.category,
        added = product.created_at.format("%-m/%-d/%Y"),
        cart = add_to_cart_button(product.in_stock),
    )
}

/// Presentational only; disabled when the item is out of stock
pub fn add_to_cart_button(in_stock: bool) -> String {
    if in_stock {
        r#"<button type="button" class="w-full py-3 px-6 rounded-lg font-medium text-lg bg-blue-600 hover:bg-blue-700 text-white">Add to Cart</button>"#.to_string()
    } else {
        r#"<button type="button" disabled class="w-full py-3 px-6 rounded-lg font-medium text-lg bg-gray-300 text-gray-500 cursor-not-allowed">Out of Stock</button>"#.to_string()
    }
}

pub fn detail_not_found() -> String {
    not_found_block(
        "Product Not Found",
        "The product you are looking for does not exist.",
    )
}

pub fn detail_error() -> String {
    not_found_block("Product Not Found", "Failed to fetch product")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::NewProduct;
    use chrono::{TimeZone, Utc};

    fn product(in_stock: bool) -> Product {
        NewProduct {
            name: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: 45.0,
            image: String::new(),
            category: Category::Home,
            in_stock,
        }
        .into_product(Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap())
    }

    #[test]
    fn detail_enables_cart_when_in_stock() {
        let html = detail(&product(true));
        assert!(html.contains("Add to Cart"));
        assert!(!html.contains("disabled"));
        assert!(html.contains("3/7/2024"));
        assert!(html.contains("$45"));
    }

    #[test]
    fn detail_disables_cart_when_out_of_stock() {
        let html = detail(&product(false));
        assert!(html.contains("disabled"));
        assert!(!html.contains("Add to Cart"));
        assert!(html.contains("bg-red-100"));
    }

    #[test]
    fn empty_listing_has_message() {
        let html = listing(&[], &ProductFilter::default());
        assert!(html.contains("No products found"));
        assert!(html.contains("0 products available"));
    }

    #[test]
    fn listing_marks_active_category() {
        let filter = ProductFilter {
            category: Some(Category::Home),
            in_stock: None,
        };
        let html = listing(&[product(true)], &filter);
        assert!(html.contains(r#"<a href="/products?category=Home" class="px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white">Home</a>"#));
        assert!(html.contains("1 product available"));
    }

    #[test]
    fn missing_product_block_links_back() {
        let html = detail_not_found();
        assert!(html.contains("Product Not Found"));
        assert!(html.contains(r#"href="/products""#));
    }
}

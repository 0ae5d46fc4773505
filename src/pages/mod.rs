//! Server-rendered markup.
//!
//! Every function here is a pure mapping from data to an HTML string; the
//! only conditional logic is display state (session presence, stock badge,
//! disabled controls). Interpolated values always go through [`escape`].

pub mod dashboard;
pub mod home;
pub mod login;
pub mod navbar;
pub mod product_card;
pub mod products;

use crate::auth::Session;

pub const PLACEHOLDER_PRODUCT_IMAGE: &str = "/placeholder-product.svg";
pub const DEFAULT_AVATAR_IMAGE: &str = "/default-avatar.svg";

/// HTML-escape text for element content and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prices render the way the storefront always has: `$29.99`, `$30`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Badge classes and label for the stock flag
pub fn stock_badge(in_stock: bool) -> (&'static str, &'static str) {
    if in_stock {
        (
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
            "In Stock",
        )
    } else {
        (
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
            "Out of Stock",
        )
    }
}

/// Document shell shared by every page
pub fn layout(title: &str, session: Option<&Session>, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="scroll-smooth">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="Discover, shop, and manage your inventory with ease on ShopVault.">
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="antialiased bg-gray-50 dark:bg-gray-900">
<div class="min-h-screen flex flex-col">
{navbar}
<div class="flex-1">
{content}
</div>
{footer}
</div>
</body>
</html>
"#,
        title = escape(title),
        navbar = navbar::render(session),
        content = content,
        footer = footer(),
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="bg-gray-800 text-gray-300 py-8">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row justify-between gap-4">
<span class="font-bold text-white">ShopVault</span>
<nav class="flex gap-6 text-sm"><a href="/" class="hover:text-white">Home</a><a href="/products" class="hover:text-white">Products</a></nav>
<span class="text-sm">&copy; {} ShopVault. All rights reserved.</span>
</div>
</footer>"#,
        chrono::Utc::now().format("%Y")
    )
}

/// Inline "not found"/error block with a way back to the listing
pub fn not_found_block(heading: &str, message: &str) -> String {
    format!(
        r#"<div class="min-h-screen flex items-center justify-center">
<div class="text-center">
<h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">{heading}</h2>
<p class="text-gray-600 dark:text-gray-400 mb-4">{message}</p>
<a href="/products" class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md">Back to Products</a>
</div>
</div>"#,
        heading = escape(heading),
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn prices_drop_trailing_zeros() {
        assert_eq!(format_price(29.99), "$29.99");
        assert_eq!(format_price(30.0), "$30");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn stock_badge_colors() {
        assert!(stock_badge(true).0.contains("green"));
        assert_eq!(stock_badge(true).1, "In Stock");
        assert!(stock_badge(false).0.contains("red"));
        assert_eq!(stock_badge(false).1, "Out of Stock");
    }

    #[test]
    fn layout_escapes_title() {
        let html = layout("<b>Shop</b>", None, "<p>body</p>");
        assert!(html.contains("<title>&lt;b&gt;Shop&lt;/b&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn not_found_links_back() {
        let html = not_found_block("Product Not Found", "gone");
        assert!(html.contains(r#"href="/products""#));
        assert!(html.contains("Back to Products"));
    }
}

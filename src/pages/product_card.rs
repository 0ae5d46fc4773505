use super::{escape, format_price, stock_badge, PLACEHOLDER_PRODUCT_IMAGE};
use crate::database::Product;

pub fn render(product: &Product) -> String {
    let image = if product.image.is_empty() {
        PLACEHOLDER_PRODUCT_IMAGE
    } else {
        product.image.as_str()
    };
    let (badge_class, badge_label) = stock_badge(product.in_stock);

    format!(
        r#"<div class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow duration-300">
<div class="relative h-48 w-full"><img src="{image}" alt="{name}" class="object-cover w-full h-full"></div>
<div class="p-4">
<h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">{name}</h3>
<p class="text-gray-600 dark:text-gray-300 text-sm mb-3 line-clamp-2">{description}</p>
<div class="flex items-center justify-between mb-4">
<span class="text-2xl font-bold text-blue-600 dark:text-blue-400">{price}</span>
<span class="px-2 py-1 text-xs font-medium rounded-full {badge_class}">{badge_label}</span>
</div>
<div class="flex items-center justify-between">
<span class="text-sm text-gray-500 dark:text-gray-400 capitalize">{category}</span>
<a href="/products/{id}" class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors duration-200">View Details</a>
</div>
</div>
</div>"#,
        image = escape(image),
        name = escape(&product.name),
        description = escape(&product.description),
        price = escape(&format_price(product.price)),
        badge_class = badge_class,
        badge_label = badge_label,
        category = product.category,
        id = product.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Category, NewProduct};
    use chrono::Utc;

    fn product(in_stock: bool, image: &str) -> Product {
        NewProduct {
            name: "Trail Shoes".to_string(),
            description: "Grip & comfort".to_string(),
            price: 89.5,
            image: image.to_string(),
            category: Category::Sports,
            in_stock,
        }
        .into_product(Utc::now())
    }

    #[test]
    fn card_links_to_detail_page() {
        let p = product(true, "https://img.example/shoe.jpg");
        let html = render(&p);
        assert!(html.contains(&format!(r#"href="/products/{}""#, p.id)));
        assert!(html.contains("$89.5"));
        assert!(html.contains("Grip &amp; comfort"));
        assert!(html.contains("In Stock"));
        assert!(html.contains("Sports"));
    }

    #[test]
    fn out_of_stock_badge_is_red() {
        let html = render(&product(false, ""));
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("bg-red-100"));
        assert!(html.contains(PLACEHOLDER_PRODUCT_IMAGE));
    }
}

use super::{escape, format_price};
use crate::database::Category;

/// Static sample content shown on the landing page
pub struct FeaturedProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub category: Category,
}

pub const FEATURED: [FeaturedProduct; 3] = [
    FeaturedProduct {
        name: "Premium Wireless Headphones",
        description: "High-quality sound with noise cancellation",
        price: 199.99,
        category: Category::Electronics,
    },
    FeaturedProduct {
        name: "Smart Fitness Watch",
        description: "Track your health and fitness goals",
        price: 299.99,
        category: Category::Electronics,
    },
    FeaturedProduct {
        name: "Organic Cotton T-Shirt",
        description: "Comfortable and eco-friendly clothing",
        price: 29.99,
        category: Category::Clothing,
    },
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "blue",
        "Quality Products",
        "Curated selection of premium products from trusted brands and sellers.",
    ),
    (
        "green",
        "Secure Shopping",
        "Safe and secure transactions with multiple payment options and buyer protection.",
    ),
    (
        "purple",
        "Fast Delivery",
        "Quick and reliable shipping to get your products to you as soon as possible.",
    ),
];

const IMAGE_ICON: &str = r#"<svg class="w-16 h-16" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M4 3a2 2 0 00-2 2v10a2 2 0 002 2h12a2 2 0 002-2V5a2 2 0 00-2-2H4zm12 12H4l4-8 3 6 2-4 3 6z" clip-rule="evenodd"/></svg>"#;

pub fn render() -> String {
    let featured: String = FEATURED.iter().map(featured_card).collect();
    let features: String = FEATURES
        .iter()
        .map(|(color, title, text)| {
            format!(
                r#"<div class="text-center">
<div class="bg-{color}-100 dark:bg-{color}-900 w-16 h-16 rounded-full mx-auto mb-4"></div>
<h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{title}</h3>
<p class="text-gray-600 dark:text-gray-300">{text}</p>
</div>"#,
                color = color,
                title = title,
                text = text,
            )
        })
        .collect();

    format!(
        r#"<div class="min-h-screen">
<section class="bg-gradient-to-r from-blue-600 to-purple-700 text-white py-20">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
<h1 class="text-4xl md:text-6xl font-bold mb-6">Welcome to <span class="text-yellow-300">ShopVault</span></h1>
<p class="text-xl md:text-2xl mb-8 text-blue-100 max-w-3xl mx-auto">Your trusted destination for quality products. Discover, shop, and manage your inventory with ease.</p>
<div class="flex flex-col sm:flex-row gap-4 justify-center">
<a href="/products" class="bg-white text-blue-600 hover:bg-gray-100 px-8 py-3 rounded-lg font-semibold text-lg">Browse Products</a>
<a href="/login" class="border-2 border-white text-white hover:bg-white hover:text-blue-600 px-8 py-3 rounded-lg font-semibold text-lg">Get Started</a>
</div>
</div>
</section>
<section class="py-16 bg-gray-50 dark:bg-gray-800">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<div class="text-center mb-12">
<h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">Featured Products</h2>
<p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">Discover our handpicked selection of premium products that combine quality, style, and value.</p>
</div>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
{featured}
</div>
<div class="text-center mt-12"><a href="/products" class="inline-block bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg font-semibold text-lg">View All Products</a></div>
</div>
</section>
<section class="py-16 bg-white dark:bg-gray-900">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<div class="text-center mb-12">
<h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">Why Choose ShopVault?</h2>
<p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">We provide everything you need for a seamless shopping and inventory management experience.</p>
</div>
<div class="grid grid-cols-1 md:grid-cols-3 gap-8">
{features}
</div>
</div>
</section>
<section class="py-16 bg-gray-800 dark:bg-gray-700 text-white">
<div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
<h2 class="text-3xl md:text-4xl font-bold mb-4">Ready to Get Started?</h2>
<p class="text-xl text-gray-300 mb-8">Join thousands of satisfied customers who trust ShopVault for their shopping needs.</p>
<div class="flex flex-col sm:flex-row gap-4 justify-center">
<a href="/products" class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg font-semibold text-lg">Start Shopping</a>
<a href="/login" class="border-2 border-white text-white hover:bg-white hover:text-gray-800 px-8 py-3 rounded-lg font-semibold text-lg">Create Account</a>
</div>
</div>
</section>
</div>"#,
        featured = featured,
        features = features,
    )
}

fn featured_card(product: &FeaturedProduct) -> String {
    format!(
        r#"<div class="bg-white dark:bg-gray-700 rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow duration-300">
<div class="relative h-48 w-full bg-gray-200 dark:bg-gray-600 flex items-center justify-center text-gray-500 dark:text-gray-400">{icon}</div>
<div class="p-6">
<h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{name}</h3>
<p class="text-gray-600 dark:text-gray-300 mb-4">{description}</p>
<div class="flex items-center justify-between">
<span class="text-2xl font-bold text-blue-600 dark:text-blue-400">{price}</span>
<span class="text-sm text-gray-500 dark:text-gray-400 capitalize">{category}</span>
</div>
</div>
</div>"#,
        icon = IMAGE_ICON,
        name = escape(product.name),
        description = escape(product.description),
        price = format_price(product.price),
        category = product.category,
    )
}

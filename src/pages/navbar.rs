use super::{escape, DEFAULT_AVATAR_IMAGE};
use crate::auth::Session;

const LINK: &str = "text-gray-700 hover:text-blue-600 dark:text-gray-300 dark:hover:text-blue-400 px-3 py-2 rounded-md text-sm font-medium";
const MOBILE_LINK: &str = "text-gray-700 hover:text-blue-600 dark:text-gray-300 dark:hover:text-blue-400 block px-3 py-2 rounded-md text-base font-medium";

/// Navigation bar: a pure function of session presence
pub fn render(session: Option<&Session>) -> String {
    format!(
        r#"<nav class="bg-white shadow-lg dark:bg-gray-800">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<div class="flex justify-between h-16">
<div class="flex items-center">
<a href="/" class="flex-shrink-0 flex items-center"><span class="text-2xl font-bold text-blue-600 dark:text-blue-400">ShopVault</span></a>
</div>
<div class="hidden md:flex items-center space-x-8">
<a href="/products" class="{link}">Products</a>
{desktop}
</div>
<details class="md:hidden flex items-center">
<summary aria-label="Toggle menu" class="list-none cursor-pointer text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 pt-5">
<svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/></svg>
</summary>
<div class="absolute left-0 right-0 bg-white dark:bg-gray-800 px-2 pt-2 pb-3 space-y-1 sm:px-3">
<a href="/products" class="{mobile_link}">Products</a>
{mobile}
</div>
</details>
</div>
</div>
</nav>"#,
        link = LINK,
        mobile_link = MOBILE_LINK,
        desktop = desktop_entries(session),
        mobile = mobile_entries(session),
    )
}

fn avatar(session: &Session) -> String {
    let image = session
        .user
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_AVATAR_IMAGE);
    format!(
        r#"<div class="flex items-center space-x-2"><img src="{}" alt="Profile" width="32" height="32" class="w-8 h-8 rounded-full"><span class="text-gray-700 dark:text-gray-300 text-sm">{}</span></div>"#,
        escape(image),
        escape(&session.user.name)
    )
}

fn sign_out_form(button_class: &str) -> String {
    format!(
        r#"<form method="post" action="/logout"><button type="submit" class="{}">Sign Out</button></form>"#,
        button_class
    )
}

fn desktop_entries(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!(
            r#"<div class="flex items-center space-x-4">
<a href="/dashboard/add-product" class="{link}">Add Product</a>
{avatar}
{sign_out}
</div>"#,
            link = LINK,
            avatar = avatar(session),
            sign_out = sign_out_form(
                "bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-md text-sm font-medium"
            ),
        ),
        None => r#"<a href="/login" class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md text-sm font-medium">Sign In</a>"#.to_string(),
    }
}

fn mobile_entries(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!(
            r#"<a href="/dashboard/add-product" class="{link}">Add Product</a>
<div class="px-3 py-2">{avatar}</div>
{sign_out}"#,
            link = MOBILE_LINK,
            avatar = avatar(session),
            sign_out = sign_out_form(
                "w-full text-left bg-red-600 hover:bg-red-700 text-white px-3 py-2 rounded-md text-base font-medium"
            ),
        ),
        None => r#"<a href="/login" class="bg-blue-600 hover:bg-blue-700 text-white block px-3 py-2 rounded-md text-base font-medium">Sign In</a>"#.to_string(),
    }
}

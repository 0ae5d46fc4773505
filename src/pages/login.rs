use super::escape;

const INPUT: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Sign-in form. `callback_url` is carried through a hidden field so the
/// form handler can send the user back where they came from.
pub fn render(callback_url: &str, username: &str, error: Option<&str>) -> String {
    let error = error
        .map(|message| {
            format!(
                r#"<div class="mb-4 p-3 rounded-md bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200 text-sm" role="alert">{}</div>"#,
                escape(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 py-12 px-4">
<div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow-md p-8">
<h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-2 text-center">Sign in to ShopVault</h1>
<p class="text-gray-600 dark:text-gray-400 text-center mb-6">Manage your products and inventory</p>
{error}
<form method="post" action="/login" class="space-y-4">
<input type="hidden" name="callbackUrl" value="{callback}">
<div>
<label for="username" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">Username</label>
<input id="username" name="username" type="text" autocomplete="username" required value="{username}" class="{input}">
</div>
<div>
<label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password" required class="{input}">
</div>
<button type="submit" class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 px-4 rounded-md font-medium">Sign In</button>
</form>
</div>
</div>"#,
        error = error,
        callback = escape(callback_url),
        username = escape(username),
        input = INPUT,
    )
}

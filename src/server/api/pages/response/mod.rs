//! HTML for the home and admin pages.
use crate::db::models::post::Post;
use crate::posts::policy::Requester;
use crate::server::api::utils::{escape_html, page};

/// Number of characters of each post shown in the admin listing.
const EXCERPT_CHARS: usize = 5;

/// Renders the public home page.
#[must_use]
pub fn home_page() -> String {
    page(
        "Home",
        "<h1>Perch</h1>\n<p>Short posts, delivered from a perch.</p>",
    )
}

/// Renders the admin page: a greeting and the post listing.
#[must_use]
pub fn admin_page(requester: &Requester, posts: &[Post]) -> String {
    let greeting = greeting_template(requester);
    let listing = listing_template(posts);
    page("Admin", &format!("{greeting}\n{listing}"))
}

/// Formats the signed-in greeting.
fn greeting_template(requester: &Requester) -> String {
    let name = requester
        .display_name
        .as_deref()
        .map_or_else(String::new, escape_html);
    if requester.is_superuser() {
        format!("<p>Signed in as {name} (superuser).</p>")
    } else {
        format!("<p>Signed in as {name}.</p>")
    }
}

/// Formats the post listing, one excerpt and edit link per post.
fn listing_template(posts: &[Post]) -> String {
    if posts.is_empty() {
        return String::from("<p>No posts yet.</p>");
    }
    let items: String = posts
        .iter()
        .map(|post| {
            format!(
                "<li>{excerpt} <a href=\"/posts/{id}/edit\">edit</a></li>\n",
                excerpt = escape_html(&post.excerpt(EXCERPT_CHARS)),
                id = post.id
            )
        })
        .collect();
    format!("<ul>\n{items}</ul>")
}

//! HTML for the post edit form.
use crate::db::models::post::Post;
use crate::posts::form::ValidationError;
use crate::server::api::utils::{escape_html, page};

/// Renders the edit form, pre-filled with the current body.
///
/// With an error present the form re-renders exactly as submitted
/// forms do: same markup, plus the field-level error message.
#[must_use]
pub fn edit_page(post: &Post, error: Option<&ValidationError>) -> String {
    let error_html = error.map_or_else(String::new, |found_error| {
        format!(
            "<p class=\"error\">{message}</p>\n",
            message = escape_html(&found_error.to_string())
        )
    });
    let main = format!(
        "<h1>Edit post</h1>\n\
         {error_html}\
         <form method=\"post\" action=\"/posts/{id}/edit\">\n\
         <textarea name=\"body\">{body}</textarea>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        id = post.id,
        body = escape_html(&post.body)
    );
    page("Edit post", &main)
}

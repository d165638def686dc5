//! Handlers for the home and admin pages.
#![allow(clippy::unused_async)]
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use url::form_urlencoded;

use crate::db::models::post;
use crate::server::api::utils;
use crate::server::errors::HTTPError;

use super::state::{App as AppState, Global as _};

/// Module that renders the HTML for these pages.
pub mod response;

/// Where anonymous visitors of guarded pages are sent.
const LOGIN_URL: &str = "/login";

/// Handler for the home page. Public.
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(response::home_page())
}

/// Handler for the admin page.
///
/// Requires an authenticated requester; anonymous visitors are
/// redirected to the login URL with the admin page as the `next`
/// destination. Lists every post as a short excerpt.
#[tracing::instrument(skip(req, data))]
pub async fn admin(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let requester = utils::requester_from(&req);
    if !requester.is_authenticated() {
        return HttpResponse::Found()
            .insert_header((LOCATION, login_redirect("/admin")))
            .finish();
    }
    let posts = match post::Manager::find_all(data.db()).await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::error!("Error listing posts: {err}");
            return HttpResponse::InternalServerError()
                .body(HTTPError::InternalServerError.to_string());
        }
    };
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(response::admin_page(&requester, &posts))
}

/// Builds the login URL carrying the page to come back to.
fn login_redirect(next: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    format!("{LOGIN_URL}?{query}")
}

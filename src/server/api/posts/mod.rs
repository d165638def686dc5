//! Handlers for rendering and submitting the post edit form.
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::db::models::post;
use crate::posts::form;
use crate::posts::policy::Decision;
use crate::server::api::utils;
use crate::server::errors::HTTPError;

use super::state::{App as AppState, Global as _};

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Module that renders the HTML for the edit form.
pub mod response;

/// Where a successful update redirects.
const SUCCESS_URL: &str = "/";

/// Handler for the edit form. Anyone may view it, so there is no
/// authorization check on this path.
#[tracing::instrument(name = "Rendering the edit form", skip(data))]
pub async fn edit(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let post_id = path.into_inner();
    let found = match post::Manager::find_by_id(data.db(), post_id).await {
        Ok(found) => found,
        Err(err) => {
            tracing::error!("Error retrieving post {post_id}: {err}");
            return internal_error();
        }
    };
    let Some(target) = found else {
        return not_found();
    };
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(response::edit_page(&target, None))
}

/// Handler for a form submission:
/// retrieve, authorize, validate, persist, redirect.
///
/// A denied requester receives the same Not Found response as a request
/// for a missing post. A rejected body re-renders the form with the
/// field error and persists nothing.
#[tracing::instrument(name = "Updating a post", skip(req, data, payload))]
pub async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Form<request::PostPayload>,
) -> impl Responder {
    let post_id = path.into_inner();
    let found = match post::Manager::find_by_id(data.db(), post_id).await {
        Ok(found) => found,
        Err(err) => {
            tracing::error!("Error retrieving post {post_id}: {err}");
            return internal_error();
        }
    };
    let Some(target) = found else {
        return not_found();
    };

    let requester = utils::requester_from(&req);
    match data.policy().authorize(&requester, &target) {
        Decision::Deny => {
            tracing::debug!("Denied update of post {post_id}");
            return not_found();
        }
        Decision::Allow => {}
    }

    let body = match form::validate(&payload.body) {
        Ok(body) => body,
        Err(error) => {
            return HttpResponse::Ok()
                .insert_header(ContentType::html())
                .body(response::edit_page(&target, Some(&error)));
        }
    };

    if let Err(err) = post::Manager::update_body(data.db(), target.id, body).await {
        tracing::error!("Error updating post {post_id}: {err}");
        return internal_error();
    }
    HttpResponse::Found()
        .insert_header((LOCATION, SUCCESS_URL))
        .finish()
}

/// The opaque response for missing posts and denied updates alike.
fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body(HTTPError::NotFound.to_string())
}

/// The opaque response for persistence failures.
fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().body(HTTPError::InternalServerError.to_string())
}

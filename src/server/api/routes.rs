//! A central place to register App routes.
use crate::server::api::state::App as AppState;
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::{pages, payments, posts};

#[expect(
    clippy::literal_string_with_formatting_args,
    reason = "Actix Web resource path uses `{param}` syntax which is not formatting but route pattern matching"
)]
/// Central place to register all the App routing.
///
/// Every route is known at start-up, so this is plain static routing:
/// the two pages, the post edit form, and the payment endpoint.
pub fn register_app<
    T: MessageBody,
    U: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<T>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<U>,
    state: &AppState,
) -> App<U> {
    app = app
        .app_data(web::Data::new(state.clone()))
        .service(web::resource("/").route(web::get().to(pages::home)))
        .service(web::resource("/admin").route(web::get().to(pages::admin)))
        .service(
            web::scope("/posts").service(
                web::resource("/{id}/edit")
                    .route(web::get().to(posts::edit))
                    .route(web::post().to(posts::update)),
            ),
        )
        .service(web::resource("/payments").route(web::post().to(payments::create)));
    app
}

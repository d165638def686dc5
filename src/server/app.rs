//! Serve the Perch web application.
#![allow(
    clippy::exit,
    clippy::unused_async,
    clippy::module_name_repetitions
)]
use crate::db;
use crate::mail::smtp::SmtpMailer;
use crate::payments::stripe::StripeCharges;
use crate::posts::policy::Policy;
use crate::server::api::state::App as AppState;
use crate::server::tracing::PerchRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::{io, process, sync::Arc};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

use crate::server::api::routes;

/// Serve the Perch web application.
#[actix_web::main]
pub async fn serve(port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";
    tracing::info!("Running Perch server on http://{bind}:{port}.");

    let db = match db::init::connect().await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let charges = match StripeCharges::from_env() {
        Ok(charges) => charges,
        Err(err) => {
            tracing::error!("error: could not configure the payment provider.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let mailer = match SmtpMailer::from_env() {
        Ok(mailer) => mailer,
        Err(err) => {
            tracing::error!("error: could not configure the SMTP relay.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState {
        db,
        charges: Arc::new(charges),
        mailer: Arc::new(mailer),
        policy: Policy::from_env(),
    };

    HttpServer::new(move || init_app(&state))
        .bind((bind, port))?
        .run()
        .await
}

/// Initialize the application and all routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new().wrap(TracingLogger::<PerchRootSpanBuilder>::new());
    routes::register_app(app, state)
}

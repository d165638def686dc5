//! Handler for charging a submitted card token.
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse, Responder};

use crate::mail;
use crate::payments::ChargeRequest;
use crate::server::errors::HTTPError;

use super::state::{App as AppState, Global as _};

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Where a successful payment redirects.
const SUCCESS_URL: &str = "/";

/// Handler for a payment submission:
/// charge the token, email the receipt notification, redirect.
///
/// One successful request creates exactly one charge and one
/// notification email. There is no idempotency key, so resubmitting
/// the form charges the card again and sends another email. A charge
/// or email failure surfaces as an opaque server error; a charge that
/// succeeded before the email failed is not reversed.
#[tracing::instrument(name = "Creating a charge", skip(data, payload))]
pub async fn create(
    data: web::Data<AppState>,
    payload: web::Form<request::PaymentPayload>,
) -> impl Responder {
    let charge_request = ChargeRequest::new(payload.into_inner().token);
    let charge = match data.charges().create(&charge_request).await {
        Ok(charge) => charge,
        Err(err) => {
            tracing::error!("Error creating charge: {err}");
            return HttpResponse::InternalServerError()
                .body(HTTPError::InternalServerError.to_string());
        }
    };

    let email = mail::payment_received(&charge.id);
    if let Err(err) = data.mailer().send(&email).await {
        tracing::error!(
            "Error sending the notification for charge {}: {err}",
            charge.id
        );
        return HttpResponse::InternalServerError()
            .body(HTTPError::InternalServerError.to_string());
    }

    HttpResponse::Found()
        .insert_header((LOCATION, SUCCESS_URL))
        .finish()
}

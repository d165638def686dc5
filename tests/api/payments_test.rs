use crate::common;
use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::test;
use std::sync::atomic::Ordering;

#[actix_web::test]
async fn test_payment_when_token_submitted_expect_redirect_and_one_email() {
    let ctx = common::initialize_state().await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_form([("token", "tok_visa")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.status(),
        StatusCode::FOUND,
        "Should redirect to success url"
    );
    let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, "/");

    let outbox = ctx.mailer.outbox.lock().unwrap();
    assert_eq!(outbox.len(), 1, "Should send exactly one email");
    assert_eq!(outbox[0].subject, "Payment received");
    assert!(
        outbox[0].body.contains(common::STUB_CHARGE_ID),
        "Email should carry the charge id"
    );
    assert_eq!(outbox[0].from, "server@example.com");
    assert_eq!(outbox[0].to, vec![String::from("admin@example.com")]);
}

#[actix_web::test]
async fn test_payment_when_token_submitted_expect_fixed_charge_parameters() {
    let ctx = common::initialize_state().await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_form([("token", "tok_visa")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);

    let requests = ctx.charges.requests.lock().unwrap();
    assert_eq!(requests.len(), 1, "Should create exactly one charge");
    assert_eq!(requests[0].amount, 100);
    assert_eq!(requests[0].currency, "sgd");
    assert_eq!(requests[0].description, "");
    assert_eq!(requests[0].token, "tok_visa");
}

#[actix_web::test]
async fn test_payment_when_charge_fails_expect_server_error_and_no_email() {
    let ctx = common::initialize_state().await;
    ctx.charges.fail.store(true, Ordering::Relaxed);
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_form([("token", "tok_visa")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(ctx.mailer.outbox.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_payment_when_email_fails_expect_server_error_after_charge() {
    let ctx = common::initialize_state().await;
    ctx.mailer.fail.store(true, Ordering::Relaxed);
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_form([("token", "tok_visa")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The charge went through before the email failed; nothing reverses it.
    assert_eq!(ctx.charges.requests.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_payment_when_resubmitted_expect_duplicate_charge_and_email() {
    let ctx = common::initialize_state().await;
    let app = common::initialize_app(&ctx.state).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/payments")
            .set_form([("token", "tok_visa")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    assert_eq!(ctx.charges.requests.lock().unwrap().len(), 2);
    assert_eq!(ctx.mailer.outbox.lock().unwrap().len(), 2);
}

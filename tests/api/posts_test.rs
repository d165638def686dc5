use crate::common;
use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::test;

#[actix_web::test]
async fn test_edit_form_when_post_exists_expect_prefilled_form() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}/edit"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Should be viewable by anyone");
    let html = common::body_to_string(test::read_body(resp).await);
    assert!(html.contains("Hello World!"), "Should pre-fill current body");
}

#[actix_web::test]
async fn test_edit_form_when_post_missing_expect_not_found() {
    let ctx = common::initialize_state().await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::get().uri("/posts/999/edit").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_when_valid_body_expect_redirect_and_persisted() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/edit"))
        .set_form([("body", "New Body Text!")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.status(),
        StatusCode::FOUND,
        "Should redirect to success url"
    );
    let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, "/");

    let updated = common::find_post(&ctx.state, post_id).await.unwrap();
    assert_eq!(updated.body, "New Body Text!", "Should update the post");
}

#[actix_web::test]
async fn test_update_when_short_body_expect_rerendered_form_and_unchanged() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/edit"))
        .set_form([("body", "Hello")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Should re-render, not redirect");
    let html = common::body_to_string(test::read_body(resp).await);
    assert!(html.contains("Message is too short"), "Should show field error");

    let unchanged = common::find_post(&ctx.state, post_id).await.unwrap();
    assert_eq!(unchanged.body, "Hello World!", "Should persist nothing");
}

#[actix_web::test]
async fn test_update_when_missing_body_field_expect_rerendered_form() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/edit"))
        .set_form([("unrelated", "x")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = common::body_to_string(test::read_body(resp).await);
    assert!(html.contains("Message is too short"));
}

#[actix_web::test]
async fn test_update_when_denied_name_expect_not_found_and_unchanged() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/edit"))
        .insert_header(("X-Forwarded-User", "Martin"))
        .set_form([("body", "New Body Text!")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.status(),
        StatusCode::NOT_FOUND,
        "Denied update should look like a missing post"
    );

    let unchanged = common::find_post(&ctx.state, post_id).await.unwrap();
    assert_eq!(unchanged.body, "Hello World!", "Should persist nothing");
}

#[actix_web::test]
async fn test_update_when_other_name_expect_redirect_and_persisted() {
    let ctx = common::initialize_state().await;
    let post_id = common::seed_post(&ctx.state, "Hello World!").await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/edit"))
        .insert_header(("X-Forwarded-User", "Ada"))
        .set_form([("body", "New Body Text!")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);

    let updated = common::find_post(&ctx.state, post_id).await.unwrap();
    assert_eq!(updated.body, "New Body Text!");
}

#[actix_web::test]
async fn test_update_when_post_missing_expect_not_found() {
    let ctx = common::initialize_state().await;
    let app = common::initialize_app(&ctx.state).await;

    let req = test::TestRequest::post()
        .uri("/posts/999/edit")
        .set_form([("body", "New Body Text!")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

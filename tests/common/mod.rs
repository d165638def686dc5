use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_service::Service;
use actix_web::{
    dev::ServiceResponse,
    test::{self},
    Error,
};
use anyhow::Result;
use async_trait::async_trait;
use tempfile::{Builder, TempDir};

use actix_http::body::MessageBody;

use perch::db::models::post::{Manager as _, Post};
use perch::db::{self, Db as _, DatabaseConnection};
use perch::mail::{Email, Mailer};
use perch::payments::{Charge, ChargeRequest, ChargeService};
use perch::posts::policy::Policy;
use perch::server::api::state::App as AppState;
use perch::server::app::init_app;

/// Charge id returned by the stub payment provider.
pub const STUB_CHARGE_ID: &str = "ch_234";

/// Payment provider double that records every charge request.
/// Flip `fail` to make the next call error.
#[derive(Default)]
pub struct StubCharges {
    pub requests: Mutex<Vec<ChargeRequest>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl ChargeService for StubCharges {
    async fn create(&self, request: &ChargeRequest) -> Result<Charge> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail.load(Ordering::Relaxed) {
            anyhow::bail!("stub charge failure");
        }
        Ok(Charge {
            id: STUB_CHARGE_ID.to_owned(),
        })
    }
}

/// Mailer double that keeps sent email in an outbox.
/// Flip `fail` to make the next call error.
#[derive(Default)]
pub struct RecordingMailer {
    pub outbox: Mutex<Vec<Email>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        if self.fail.load(Ordering::Relaxed) {
            anyhow::bail!("stub mailer failure");
        }
        self.outbox.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Everything a test needs to drive the app and inspect its side effects.
pub struct TestContext {
    pub state: AppState,
    pub charges: Arc<StubCharges>,
    pub mailer: Arc<RecordingMailer>,
    // Keeps the database file alive for the duration of the test.
    _db_dir: TempDir,
}

/// Builds app state around a fresh temporary database, stub payment
/// provider, recording mailer, and the default denylist policy.
pub async fn initialize_state() -> TestContext {
    let db_dir = Builder::new().prefix("perch-test").tempdir().unwrap();
    let db_path = db_dir.path().join("db.sqlite3");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.to_string_lossy());
    let db = DatabaseConnection::connect(&db_url).await.unwrap();
    db::init::migrate(&db).await.unwrap();

    let charges = Arc::new(StubCharges::default());
    let mailer = Arc::new(RecordingMailer::default());
    let charges_dyn: Arc<dyn ChargeService> = charges.clone();
    let mailer_dyn: Arc<dyn Mailer> = mailer.clone();
    let state = AppState {
        db,
        charges: charges_dyn,
        mailer: mailer_dyn,
        policy: Policy::new(vec![String::from("Martin")]),
    };
    TestContext {
        state,
        charges,
        mailer,
        _db_dir: db_dir,
    }
}

pub async fn initialize_app(
    state: &AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(init_app(state)).await
}

pub async fn seed_post(state: &AppState, body: &str) -> i64 {
    state.db.create(body).await.unwrap()
}

pub async fn find_post(state: &AppState, id: i64) -> Option<Post> {
    state.db.find_by_id(id).await.unwrap()
}

pub fn body_to_string(body: actix_web::web::Bytes) -> String {
    core::str::from_utf8(body.as_ref()).unwrap().into()
}

//! Test server helpers
//!
//! Wraps the real router in `axum_test::TestServer`; requests never touch
//! the network.

use axum_test::TestServer;
use eventhub::backend::routes::create_router;

use crate::common::database::TestDatabase;

/// Test server bundled with the database behind it
pub struct TestApp {
    pub server: TestServer,
    pub db: TestDatabase,
}

/// Create a test server over a fresh database
pub async fn create_test_app() -> TestApp {
    let db = TestDatabase::new().await;
    let server = TestServer::new(create_router(db.state())).expect("Failed to create test server");
    TestApp { server, db }
}

//! Shared setup for the API integration tests

#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use serde_json::{json, Value};

use sc_api::AppState;
use sc_core::domain::entities::Product;
use sc_core::repositories::MockStore;
use sc_shared::AppConfig;

pub type TestState = AppState<MockStore, MockStore, MockStore>;

pub const PASSWORD: &str = "password1!";

/// Default config with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.password.bcrypt_cost = 4;
    config
}

pub fn catalogue() -> Vec<Product> {
    vec![
        Product::new(1, "Apple", 1_000, 5),
        Product::new(2, "Banana", 2_000, 10).with_image_url("https://img.example/banana.png"),
        Product::new(3, "Cherry", 3_000, 0),
    ]
}

pub fn test_state(store: &MockStore, config: &AppConfig) -> web::Data<TestState> {
    web::Data::new(AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        &config.auth,
    ))
}

/// Sends a request and returns status plus JSON body.
///
/// Errors raised by middleware come back as `Err` from the service, so both
/// paths are rendered into a response here.
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let body = test::read_body(resp).await;
            (status, parse(&body))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
            (status, parse(&body))
        }
    }
}

/// JSON body, `Null` when empty, plain text otherwise
fn parse(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn sign_up_request(email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/members")
        .set_json(json!({ "email": email, "nickname": "shopper", "password": PASSWORD }))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/members/login")
        .set_json(json!({ "email": email, "password": password }))
}

/// Registers `$email` on `$app` and evaluates to a fresh access token

macro_rules! sign_up_and_login {
    ($app:expr, $email:expr) => {{
        let (status, _) =
            $crate::common::send($app, $crate::common::sign_up_request($email).to_request()).await;
        assert_eq!(status, actix_web::http::StatusCode::CREATED);

        let (status, body) = $crate::common::send(
            $app,
            $crate::common::login_request($email, $crate::common::PASSWORD).to_request(),
        )
        .await;
        assert_eq!(status, actix_web::http::StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }};
}

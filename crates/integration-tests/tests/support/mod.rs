#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock remote API with canned responses per route
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Answer `POST route` with the given status and body
    pub async fn respond(&self, route: &str, status: u16, body: impl Into<String>) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.into()))
            .mount(&self.server)
            .await;
    }

    /// Answer `POST route` with a JSON body
    pub async fn respond_json(&self, route: &str, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn post(&self, route: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{route}", self.server.uri()))
            .body("{}")
            .send()
            .await
            .unwrap()
    }
}

/// Google-style error envelope, optionally carrying an FCM error code
pub fn error_envelope(code: u16, status: &str, message: &str, fcm_code: Option<&str>) -> serde_json::Value {
    let details = fcm_code.map_or_else(Vec::new, |fcm_code| {
        vec![serde_json::json!({
            "@type": "type.googleapis.com/google.firebase.fcm.v1.FcmError",
            "errorCode": fcm_code,
        })]
    });

    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "status": status,
            "details": details,
        }
    })
}

//! Admin credential verification over HTTP
//!
//! `POST <endpoint>` with `{"email": "...", "password": "..."}`; the service
//! answers `{"success": true}` only for valid credentials.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::storage::traits::CredentialVerifier;

#[derive(Serialize)]
struct VerifyRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
}

/// Credential verifier backed by an external HTTP service.
/// Without an endpoint every attempt is denied.
#[derive(Debug, Clone)]
pub struct HttpCredentialVerifier {
    client: Client,
    endpoint: Option<String>,
}

impl HttpCredentialVerifier {
    pub fn new(endpoint: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
        })
    }
}

#[async_trait]
impl CredentialVerifier for HttpCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("No credential service configured; denying admin sign-in");
            return false;
        };

        let response = match self
            .client
            .post(endpoint)
            .json(&VerifyRequest { email, password })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Credential service unreachable: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            debug!("Credential service answered {}", response.status());
            return false;
        }

        match response.json::<VerifyResponse>().await {
            Ok(result) => result.success,
            Err(e) => {
                warn!("Credential service sent an invalid response: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn check(Json(body): Json<Value>) -> Json<Value> {
        let ok = body["email"] == "owner@happyville.co.za" && body["password"] == "correct horse";
        Json(json!({ "success": ok }))
    }

    async fn spawn_stub() -> String {
        let app = Router::new().route("/verify", post(check));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/verify", addr)
    }

    #[tokio::test]
    async fn test_verifies_against_service() {
        let endpoint = spawn_stub().await;
        let verifier = HttpCredentialVerifier::new(Some(endpoint), None).unwrap();

        assert!(verifier.verify("owner@happyville.co.za", "correct horse").await);
        assert!(!verifier.verify("owner@happyville.co.za", "wrong").await);
    }

    #[tokio::test]
    async fn test_unconfigured_denies_everything() {
        let verifier = HttpCredentialVerifier::new(None, None).unwrap();
        assert!(!verifier.verify("owner@happyville.co.za", "correct horse").await);
    }

    #[tokio::test]
    async fn test_unreachable_service_denies() {
        let verifier = HttpCredentialVerifier::new(
            Some("http://127.0.0.1:1/verify".to_string()),
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        assert!(!verifier.verify("owner@happyville.co.za", "correct horse").await);
    }
}

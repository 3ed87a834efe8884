use anyhow::Context;
use axum::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use super::google_auth_token::GoogleAuthToken;
use crate::{config::ServiceAccount, constants::*, models::PushNotification, utils::error_body};

/// Outbound side of the dispatcher, one call per notification
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, notification: &PushNotification) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
struct PushMessageNotification {
    title: String,
    body: String,
}

#[derive(Debug, Serialize)]
struct PushMessage {
    token: String,
    notification: PushMessageNotification,
}

#[derive(Debug, Serialize)]
struct PushPayload {
    message: PushMessage,
}

impl PushPayload {
    fn new(notification: &PushNotification) -> Self {
        let push_message_notification = PushMessageNotification {
            title: notification.title.to_owned(),
            body: notification.body.to_owned(),
        };
        let message = PushMessage {
            token: notification.token.to_owned(),
            notification: push_message_notification,
        };
        Self { message }
    }
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// FCM HTTP v1 client for a single firebase project
pub struct FcmClient {
    client: reqwest::Client,
    endpoint: String,
    google_auth_token: GoogleAuthToken,
}

impl FcmClient {
    pub fn new(service_account: &ServiceAccount, client: reqwest::Client) -> anyhow::Result<Self> {
        let endpoint = format!(
            "{}/{}/messages:send",
            FCM_PROJECTS_URL, service_account.project_id
        );
        let google_auth_token = GoogleAuthToken::new(service_account)?;
        Ok(Self {
            client,
            endpoint,
            google_auth_token,
        })
    }
}

#[async_trait]
impl PushGateway for FcmClient {
    async fn send(&self, notification: &PushNotification) -> anyhow::Result<()> {
        let access_token = self
            .google_auth_token
            .new_access_token(&self.client)
            .await
            .context("not able to get FCM access token")?;
        let bearer_token = format!("Bearer {}", access_token);
        let payload = PushPayload::new(notification);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_token.as_str().parse()?);
        headers.insert(CONTENT_TYPE, "application/json".parse()?);
        let res = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            let body = error_body(res).await;
            anyhow::bail!("FCM request failed: {body}");
        }
        match res.json::<PushResponse>().await {
            Ok(response) => tracing::debug!("FCM accepted message {}", response.name),
            Err(e) => tracing::debug!("FCM accepted message, unreadable response: {:?}", e),
        }
        Ok(())
    }
}

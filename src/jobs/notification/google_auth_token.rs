use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{config::ServiceAccount, constants::*, utils::{error_body, get_epoch_ts}};

#[derive(Debug, Serialize, Deserialize)]
struct GoogleTokenClaims {
    iss: String,
    iat: u64,
    exp: u64,
    aud: String,
    scope: String,
}

impl GoogleTokenClaims {
    fn new(client_email: &str, token_uri: &str) -> Self {
        let ts = get_epoch_ts();
        Self {
            iss: client_email.to_owned(),
            iat: ts,
            exp: ts + GOOGLE_JWT_VALIDITY_SECS,
            aud: token_uri.to_owned(),
            scope: FIREBASE_MESSAGE_SCOPE.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Exchanges a signed service account JWT for an OAuth2 access token.
/// No token is kept around, every call goes to the token endpoint.
pub struct GoogleAuthToken {
    client_email: String,
    token_uri: String,
    signing_key: EncodingKey,
}

impl GoogleAuthToken {
    pub fn new(service_account: &ServiceAccount) -> anyhow::Result<Self> {
        Ok(Self {
            client_email: service_account.client_email.to_owned(),
            token_uri: service_account.token_uri.to_owned(),
            signing_key: service_account.signing_key()?,
        })
    }

    pub async fn new_access_token(&self, client: &reqwest::Client) -> anyhow::Result<String> {
        let signed_jwt = self.new_jwt()?;
        let params = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", signed_jwt.as_str()),
        ];
        let res = client.post(&self.token_uri).form(&params).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = error_body(res).await;
            anyhow::bail!("Google token request failed with status {status}: {body}");
        }
        let response = res.json::<GoogleTokenResponse>().await?;
        tracing::debug!("access token acquired, expires in {}s", response.expires_in);
        Ok(response.access_token)
    }

    fn new_jwt(&self) -> anyhow::Result<String> {
        let claims = GoogleTokenClaims::new(&self.client_email, &self.token_uri);
        let header = Header::new(Algorithm::RS256);
        let jwt = encode(&header, &claims, &self.signing_key)?;
        Ok(jwt)
    }
}

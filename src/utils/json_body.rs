use axum::{async_trait, body::Bytes, extract::FromRequest, http::Request};
use serde::de::DeserializeOwned;

use super::AppError;
use crate::constants::*;

/// Json extractor whose rejection uses the same body shape as the rest of the API.
/// The body is parsed whatever the `Content-Type` header says.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: DeserializeOwned,
    Bytes: FromRequest<S, B>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| {
            AppError::BadRequestErr(INVALID_JSON_BODY_MSG.to_owned())
        })?;
        let data = serde_json::from_slice::<T>(&bytes).map_err(|err| {
            tracing::debug!("not able to parse request body: {err}");
            AppError::BadRequestErr(INVALID_JSON_BODY_MSG.to_owned())
        })?;
        Ok(Self(data))
    }
}

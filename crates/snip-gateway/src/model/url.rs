use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    pub original_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

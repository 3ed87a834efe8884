use std::time::{SystemTime, UNIX_EPOCH};

/// Get EPOCH timestamp in seconds
pub fn get_epoch_ts() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Body of a failed upstream response, kept for the error message even when it cannot be read
pub async fn error_body(res: reqwest::Response) -> String {
    res.text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

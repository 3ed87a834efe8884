use crate::constants::*;

/// A push notification built for one device and thrown away after sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNotification {
    pub token: String,
    pub title: String,
    pub body: String,
}

impl PushNotification {
    /// The daily diary reminder addressed to `token`
    pub fn diary_reminder(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            title: PUSH_MESSAGE_TITLE.to_owned(),
            body: PUSH_MESSAGE_BODY.to_owned(),
        }
    }
}

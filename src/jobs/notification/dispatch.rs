use super::push_message::PushGateway;
use crate::{
    database::MemberStore,
    models::{Member, PushNotification},
};

/// Outcome counts of one dispatch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub candidates: usize,
    pub sent: usize,
    pub without_token: usize,
    pub failed: usize,
}

/// Send the diary reminder to the first device of every candidate, one after another.
/// A failing token lookup or send only skips that candidate.
pub async fn dispatch_reminders(
    store: &dyn MemberStore,
    gateway: &dyn PushGateway,
    candidates: &[Member],
) -> DispatchSummary {
    let mut summary = DispatchSummary {
        candidates: candidates.len(),
        ..Default::default()
    };
    for member in candidates {
        let tokens = match store.find_fcm_tokens(&member.member_id).await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::error!("Error fetching FCM token for {}: {:?}", member.member_id, e);
                summary.failed += 1;
                continue;
            }
        };
        let Some(token) = tokens.first() else {
            tracing::info!("No FCM token found for member_id: {}", member.member_id);
            summary.without_token += 1;
            continue;
        };
        let notification = PushNotification::diary_reminder(&token.token);
        match gateway.send(&notification).await {
            Ok(()) => {
                tracing::info!(
                    "Notification sent successfully to member_id: {}",
                    member.member_id
                );
                summary.sent += 1;
            }
            Err(e) => {
                tracing::error!("Error sending FCM message to {}: {:?}", member.member_id, e);
                summary.failed += 1;
            }
        }
    }
    summary
}

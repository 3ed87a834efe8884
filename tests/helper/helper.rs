use axum::{async_trait, body::Body, http::Request, Router};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use reminder_push_dispatcher::{
    app::{build_app, AppState},
    database::MemberStore,
    jobs::notification::{candidates::AlarmTimeRange, push_message::PushGateway},
    models::{FcmToken, Member, MemberId, PushNotification},
};

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn build_get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn member(id: i64, alarm_time: &str) -> Member {
    Member {
        member_id: MemberId::Int(id),
        alarm_time: alarm_time.to_owned(),
    }
}

/// `member` and `fcm_tokens` tables kept in memory.
/// `alarm_time` is compared as a string, like a PostgREST filter on a text column.
#[derive(Default)]
pub struct InMemoryStore {
    pub members: Vec<(Member, bool)>,
    pub tokens: HashMap<MemberId, Vec<String>>,
    pub broken_token_lookups: HashSet<MemberId>,
    pub member_query_broken: bool,
    pub token_lookups: Mutex<Vec<MemberId>>,
}

impl InMemoryStore {
    pub fn with_member(mut self, member: Member, alarm_enabled: bool, tokens: &[&str]) -> Self {
        let tokens = tokens.iter().map(|t| t.to_string()).collect();
        self.tokens.insert(member.member_id.clone(), tokens);
        self.members.push((member, alarm_enabled));
        self
    }

    pub fn looked_up(&self) -> Vec<MemberId> {
        self.token_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberStore for InMemoryStore {
    async fn find_alarm_members(&self, range: &AlarmTimeRange) -> anyhow::Result<Vec<Member>> {
        if self.member_query_broken {
            anyhow::bail!("query on `member` failed with status 503: upstream unavailable");
        }
        let members = self
            .members
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(member, _)| member)
            .filter(|member| {
                member.alarm_time.as_str() >= range.lower.as_str()
                    && member.alarm_time.as_str() <= range.upper.as_str()
            })
            .cloned()
            .collect();
        Ok(members)
    }

    async fn find_fcm_tokens(&self, member_id: &MemberId) -> anyhow::Result<Vec<FcmToken>> {
        self.token_lookups.lock().unwrap().push(member_id.clone());
        if self.broken_token_lookups.contains(member_id) {
            anyhow::bail!("query on `fcm_tokens` failed with status 500");
        }
        let tokens = self
            .tokens
            .get(member_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|token| FcmToken { token })
            .collect();
        Ok(tokens)
    }
}

/// Records every notification, rejecting the ones addressed to `rejected_tokens`
#[derive(Default)]
pub struct RecordingGateway {
    pub rejected_tokens: HashSet<String>,
    pub attempts: Mutex<Vec<PushNotification>>,
}

impl RecordingGateway {
    pub fn attempted_tokens(&self) -> Vec<String> {
        let attempts = self.attempts.lock().unwrap();
        attempts.iter().map(|n| n.token.to_owned()).collect()
    }
}

#[async_trait]
impl PushGateway for RecordingGateway {
    async fn send(&self, notification: &PushNotification) -> anyhow::Result<()> {
        self.attempts.lock().unwrap().push(notification.clone());
        if self.rejected_tokens.contains(&notification.token) {
            anyhow::bail!("FCM request failed: {{\"error\": {{\"status\": \"NOT_FOUND\"}}}}");
        }
        Ok(())
    }
}

pub fn build_app_with(store: Arc<InMemoryStore>, gateway: Arc<RecordingGateway>) -> Router {
    let state = AppState {
        store,
        gateway,
        reminder_window_mins: 1,
    };
    build_app(Arc::new(state))
}

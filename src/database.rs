use anyhow::Context;
use axum::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::AppConfig,
    constants::*,
    jobs::notification::candidates::AlarmTimeRange,
    models::{FcmToken, Member, MemberId},
    utils::error_body,
};

/// Read access to the member and device token tables
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Members with `alarm_enabled` whose `alarm_time` falls inside `range`
    async fn find_alarm_members(&self, range: &AlarmTimeRange) -> anyhow::Result<Vec<Member>>;

    async fn find_fcm_tokens(&self, member_id: &MemberId) -> anyhow::Result<Vec<FcmToken>>;
}

/// Thin client over the Supabase PostgREST endpoint
pub struct AppDatabase {
    client: reqwest::Client,
    rest_url: String,
    headers: HeaderMap,
}

impl AppDatabase {
    pub fn new(config: &AppConfig, client: reqwest::Client) -> anyhow::Result<Self> {
        let key = &config.supabase_service_role_key;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(key)?);
        headers.insert(AUTHORIZATION, format!("Bearer {key}").parse()?);
        let rest_url = format!("{}/rest/v1", config.supabase_url);
        Ok(Self {
            client,
            rest_url,
            headers,
        })
    }

    /// Select `columns` from `table`. Filters are PostgREST query pairs, eg. `("member_id", "eq.1")`
    pub async fn find<T>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
    ) -> anyhow::Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.rest_url, table);
        let mut query = vec![("select", columns.to_owned())];
        query.extend(filters.iter().map(|(col, val)| (*col, val.to_owned())));
        let res = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(&query)
            .send()
            .await
            .with_context(|| format!("not able to query `{table}`"))?;
        let status = res.status();
        if !status.is_success() {
            let body = error_body(res).await;
            anyhow::bail!("query on `{table}` failed with status {status}: {body}");
        }
        let rows = res
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("not able to parse `{table}` rows"))?;
        Ok(rows)
    }
}

#[async_trait]
impl MemberStore for AppDatabase {
    async fn find_alarm_members(&self, range: &AlarmTimeRange) -> anyhow::Result<Vec<Member>> {
        let filters = alarm_member_filters(range);
        self.find::<Member>(TABLE_MEMBER, "member_id,alarm_time", &filters)
            .await
    }

    async fn find_fcm_tokens(&self, member_id: &MemberId) -> anyhow::Result<Vec<FcmToken>> {
        let filters = [("member_id", format!("eq.{member_id}"))];
        self.find::<FcmToken>(TABLE_FCM_TOKENS, "token", &filters)
            .await
    }
}

fn alarm_member_filters(range: &AlarmTimeRange) -> Vec<(&'static str, String)> {
    vec![
        ("alarm_enabled", "eq.true".to_owned()),
        ("alarm_time", format!("gte.{}", range.lower)),
        ("alarm_time", format!("lte.{}", range.upper)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_member_filters() {
        let range = AlarmTimeRange {
            lower: "08:59".to_owned(),
            upper: "09:01".to_owned(),
        };
        let filters = alarm_member_filters(&range);
        assert_eq!(
            filters,
            vec![
                ("alarm_enabled", "eq.true".to_owned()),
                ("alarm_time", "gte.08:59".to_owned()),
                ("alarm_time", "lte.09:01".to_owned()),
            ]
        );
    }
}

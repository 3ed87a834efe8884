use anyhow::Context;
use jsonwebtoken::EncodingKey;
use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::constants::*;

/// Google service account credential used to sign FCM access token requests.
/// Parsed from the `FCM_SERVER_KEY` environment variable.
#[derive(Clone, Deserialize, Validate)]
pub struct ServiceAccount {
    #[validate(email)]
    pub client_email: String,
    #[validate(length(min = 1))]
    pub private_key: String,
    #[validate(length(min = 1))]
    pub project_id: String,
    #[serde(default = "default_token_uri")]
    #[validate(url)]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URL.to_owned()
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccount {
    /// Parse the RS256 signing key out of the PEM encoded private key.
    /// Keys pasted into a single-line env value often carry literal `\n`
    pub fn signing_key(&self) -> anyhow::Result<EncodingKey> {
        let pem = self.private_key.replace("\\n", "\n");
        let key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .context("service account private_key is not a valid RSA PEM")?;
        Ok(key)
    }
}

/// Application configuration, read once from the environment at startup
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    #[validate(url)]
    pub supabase_url: String,
    #[validate(length(min = 1))]
    pub supabase_service_role_key: String,
    #[validate]
    pub service_account: ServiceAccount,
    pub port: u16,
    #[validate(range(max = 60))]
    pub reminder_window_mins: u32,
    pub reminder_job_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, the process env in production
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = required(&lookup, "SUPABASE_URL")?;
        let supabase_service_role_key = required(&lookup, "SUPABASE_SERVICE_ROLE_KEY")?;
        let service_account = required(&lookup, "FCM_SERVER_KEY")?;
        let service_account = serde_json::from_str::<ServiceAccount>(&service_account)
            .context("FCM_SERVER_KEY is not a valid service account JSON")?;
        let port = optional(&lookup, "PORT", |val| val.parse::<u16>().ok())?;
        let port = port.unwrap_or(DEFAULT_PORT);
        let reminder_window_mins =
            optional(&lookup, "REMINDER_WINDOW_MINS", |val| val.parse::<u32>().ok())?;
        let reminder_window_mins = reminder_window_mins.unwrap_or(DEFAULT_REMINDER_WINDOW_MINS);
        let reminder_job_enabled = optional(&lookup, "REMINDER_JOB_ENABLED", parse_flag)?;
        let reminder_job_enabled = reminder_job_enabled.unwrap_or(false);
        let config = Self {
            supabase_url: supabase_url.trim_end_matches('/').to_owned(),
            supabase_service_role_key,
            service_account,
            port,
            reminder_window_mins,
            reminder_job_enabled,
        };
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|val| !val.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("{key} not found in environment"))
}

/// `None` when the key is absent, an error when it is set but does not parse
fn optional<F, T, P>(lookup: &F, key: &str, parse: P) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let Some(val) = lookup(key) else {
        return Ok(None);
    };
    let parsed = parse(val.trim()).with_context(|| format!("invalid value for {key}: {val:?}"))?;
    Ok(Some(parsed))
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::collections::HashMap;

    use super::*;

    const TEST_PRIVATE_KEY: &str = include_str!("../tests/fixtures/test_rsa_private.pem");

    fn service_account_json() -> String {
        json!({
            "type": "service_account",
            "project_id": "diary-app",
            "client_email": "push@diary-app.iam.gserviceaccount.com",
            "private_key": TEST_PRIVATE_KEY,
        })
        .to_string()
    }

    fn base_env() -> HashMap<&'static str, String> {
        let mut env = HashMap::new();
        env.insert("SUPABASE_URL", "https://abcd.supabase.co/".to_owned());
        env.insert("SUPABASE_SERVICE_ROLE_KEY", "service-role".to_owned());
        env.insert("FCM_SERVER_KEY", service_account_json());
        env
    }

    fn load(env: &HashMap<&'static str, String>) -> anyhow::Result<AppConfig> {
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.supabase_url, "https://abcd.supabase.co");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.reminder_window_mins, DEFAULT_REMINDER_WINDOW_MINS);
        assert_eq!(config.reminder_job_enabled, false);
        assert_eq!(config.service_account.project_id, "diary-app");
        assert_eq!(config.service_account.token_uri, GOOGLE_TOKEN_URL);
        assert!(config.service_account.signing_key().is_ok());
    }

    #[test]
    fn test_from_lookup_optional_values() {
        let mut env = base_env();
        env.insert("PORT", "8080".to_owned());
        env.insert("REMINDER_WINDOW_MINS", "5".to_owned());
        env.insert("REMINDER_JOB_ENABLED", "TRUE".to_owned());
        let config = load(&env).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.reminder_window_mins, 5);
        assert_eq!(config.reminder_job_enabled, true);
    }

    #[test]
    fn test_from_lookup_missing_required() {
        for key in ["SUPABASE_URL", "SUPABASE_SERVICE_ROLE_KEY", "FCM_SERVER_KEY"] {
            let mut env = base_env();
            env.remove(key);
            let err = load(&env).unwrap_err();
            assert!(err.to_string().contains(key));
        }
    }

    #[test]
    fn test_from_lookup_invalid_values() {
        let mut env = base_env();
        env.insert("FCM_SERVER_KEY", "not json".to_owned());
        assert!(load(&env).is_err());

        let mut env = base_env();
        env.insert("SUPABASE_URL", "not a url".to_owned());
        assert!(load(&env).is_err());

        let mut env = base_env();
        env.insert("REMINDER_WINDOW_MINS", "600".to_owned());
        assert!(load(&env).is_err());

        for (key, val) in [
            ("PORT", "eighty"),
            ("REMINDER_WINDOW_MINS", "-3"),
            ("REMINDER_JOB_ENABLED", "yes"),
        ] {
            let mut env = base_env();
            env.insert(key, val.to_owned());
            let err = load(&env).unwrap_err();
            assert!(format!("{err:#}").contains(key), "{key} should be rejected");
        }
    }

    #[test]
    fn test_signing_key_with_escaped_newlines() {
        let mut account: ServiceAccount = serde_json::from_str(&service_account_json()).unwrap();
        account.private_key = TEST_PRIVATE_KEY.replace('\n', "\\n");
        assert!(account.signing_key().is_ok());
        account.private_key = "garbage".to_owned();
        assert!(account.signing_key().is_err());
    }

    #[test]
    fn test_service_account_debug_hides_private_key() {
        let account: ServiceAccount = serde_json::from_str(&service_account_json()).unwrap();
        let debug = format!("{:?}", account);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("PRIVATE KEY"));
    }
}

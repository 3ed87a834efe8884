use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a `member` row.
/// Supabase projects use either a bigint or a uuid/text key, so both are accepted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Int(i64),
    Text(String),
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

/// A member whose alarm is enabled and due in the current reminder window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub alarm_time: String,
}

/// A row of the `fcm_tokens` table, only the token column is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcmToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_accepts_int_and_text() {
        let member: Member =
            serde_json::from_str(r#"{"member_id": 42, "alarm_time": "21:30:00"}"#).unwrap();
        assert_eq!(member.member_id, MemberId::Int(42));
        assert_eq!(member.member_id.to_string(), "42");

        let member: Member = serde_json::from_str(
            r#"{"member_id": "5f0c7f7e-3c4b-4b77-9b53-2f8f3a0e9c11", "alarm_time": "07:00"}"#,
        )
        .unwrap();
        assert_eq!(
            member.member_id.to_string(),
            "5f0c7f7e-3c4b-4b77-9b53-2f8f3a0e9c11"
        );
        assert_eq!(member.alarm_time, "07:00");
    }
}

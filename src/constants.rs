pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REMINDER_WINDOW_MINS: u32 = 1;
pub const REMINDER_JOB_INTERVAL: u64 = 60;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_JWT_VALIDITY_SECS: u64 = 3600;
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const FIREBASE_MESSAGE_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
pub const FCM_PROJECTS_URL: &str = "https://fcm.googleapis.com/v1/projects";

pub const PUSH_MESSAGE_TITLE: &str = "일기쓸 시간이에요";
pub const PUSH_MESSAGE_BODY: &str = "오늘 하루는 어땠나요? 일기를 작성해보세요.";

pub const TABLE_MEMBER: &str = "member";
pub const TABLE_FCM_TOKENS: &str = "fcm_tokens";

// upper bound of the late-evening half of a window that wraps past midnight
pub const START_OF_DAY: &str = "00:00";
pub const END_OF_DAY: &str = "23:59:59";

pub const INTERNAL_SERVER_ERROR_MSG: &str = "Internal server error";
pub const INVALID_JSON_BODY_MSG: &str = "Invalid JSON body";

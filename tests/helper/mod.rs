pub mod helper;

pub use helper::build_app_with;
pub use helper::build_get_request;
pub use helper::build_post_request;
pub use helper::member;
pub use helper::InMemoryStore;
pub use helper::RecordingGateway;

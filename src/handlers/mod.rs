pub mod default;
pub mod global_404;
pub mod ping;
pub mod trigger;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use ping::ping_handler;

pub use trigger::send_push_notification_handler;

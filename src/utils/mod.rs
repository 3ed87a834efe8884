pub mod error_handler;
pub mod json_body;
pub mod misc;

pub use error_handler::AppError;
pub use json_body::JsonBody;
pub use misc::*;

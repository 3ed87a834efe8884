pub mod member;
pub mod notification;
pub mod request_schema;
pub mod response_schema;

pub use member::*;
pub use notification::*;
pub use request_schema::*;
pub use response_schema::*;

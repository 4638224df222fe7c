mod classification;
mod record;
mod response;

pub use classification::Classification;
pub use record::{AttributeMap, CookieRecord};
pub use response::parse_response;

//! Items, the request/response envelope shared by both handlers, and the
//! write-request validation chain.

mod envelope;
mod error;
mod numbers;
mod request;
mod types;

pub use envelope::{CorsPolicy, HandlerResponse, Invocation, PREFLIGHT_CORS, READ_CORS, WRITE_CORS};
pub use error::WriteRequestError;
pub use numbers::normalize_number;
pub use request::{coerce_item_id, parse_write_request, WriteRequest};
pub use types::{Item, DATA_ATTRIBUTE, ITEM_ID_ATTRIBUTE};

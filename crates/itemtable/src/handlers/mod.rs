pub mod health;
pub mod items;
pub mod response;

pub use response::ApiResponse;

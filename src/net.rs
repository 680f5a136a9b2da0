mod fetch;
mod response;

pub use fetch::{HttpClient, ReqwestClient};
pub use response::Response;

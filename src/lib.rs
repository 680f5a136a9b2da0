pub mod cache;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod loading;
pub mod net;

pub use fetcher::*;

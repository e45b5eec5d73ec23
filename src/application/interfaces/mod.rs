mod generation_client;
mod host_api;

pub use generation_client::*;
pub use host_api::*;

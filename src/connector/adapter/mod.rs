mod mock_generation_client;
mod ollama_client;

pub use mock_generation_client::*;
pub use ollama_client::*;

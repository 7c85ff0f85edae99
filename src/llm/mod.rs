//! LLM-backed headline generation

pub mod client;
pub mod headlines;

pub use client::LlmClient;
pub use headlines::HeadlineProvider;

//! Core types shared across the library.

pub mod chat;
pub mod data;
pub mod llm;

pub use chat::*;
pub use data::*;
pub use llm::*;

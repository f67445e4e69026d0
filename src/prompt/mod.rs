//! Prompt composition: the persona system prompt and per-task templates.

pub mod system;
pub mod task;

pub use system::compose_system_prompt;
pub use task::TaskType;

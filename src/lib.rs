pub mod actions;
pub mod app;
pub mod config;
pub mod index;
pub mod llm;
pub mod privacy;
pub mod protocol;
pub mod repl;
pub mod router;
pub mod shared;

pub mod catalog;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod response;
pub mod server;
pub mod service;
pub mod shutdown;

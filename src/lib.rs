// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod views;

// Question answering pipeline
pub mod answer;
pub mod config;
pub mod context;

// Member messages API client
pub mod member_messages;

// LLM abstraction layer
pub mod llm;

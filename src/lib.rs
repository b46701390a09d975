// Sift: rule-based content moderation with dialable strictness.
//
// This is the library root. The engine is a pure function of the rule
// catalog, the dial table, and a per-request input — no cross-request
// state, safe to share across threads.

pub mod catalog;
pub mod config;
pub mod dial;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;

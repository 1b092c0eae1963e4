//! Namesmith: Business Name Generation
//!
//! A name generation pipeline that turns a business description, optional
//! keywords, and tone preferences into a list of candidate business names by
//! delegating to the Gemini text-completion endpoint and leniently parsing
//! its semi-structured reply.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod types;
pub mod validate;

//! Property-based tests for reply extraction and prompt construction

mod prompts;

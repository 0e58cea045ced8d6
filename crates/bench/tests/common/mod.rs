//! Shared fixtures and mocks for the orchestration tests.

pub mod mocks;

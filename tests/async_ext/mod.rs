//! Integration tests for async extensions.

mod from_async_tests;

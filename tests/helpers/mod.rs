// ABOUTME: Test helper module organization
// ABOUTME: Groups HTTP testing utilities shared across integration tests

#![allow(missing_docs)]

pub mod axum_test;

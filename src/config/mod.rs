// ABOUTME: Configuration module organization for the Shinehub server
// ABOUTME: Groups environment-driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! Configuration management for deployment-specific settings

/// Environment variable based server configuration
pub mod environment;

pub use environment::ServerConfig;

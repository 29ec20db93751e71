// ABOUTME: Middleware module organization for the Shinehub server
// ABOUTME: Groups cross-cutting HTTP layers applied to the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Shinehub

//! HTTP middleware layers

/// CORS configuration for web client access
pub mod cors;

// ABOUTME: Core types and constants for the Stride running plan generator
// ABOUTME: Foundation crate with error handling and physiological/planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! running plan generator. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `PlanError` for domain failures, `AppError`/`ErrorCode` for outer layers
//! - **constants**: VDOT regression coefficients, zone brackets, volume tables and templates

/// Unified error handling with domain errors and standard error codes
pub mod errors;

/// Physiological and planning constants organized by domain
pub mod constants;

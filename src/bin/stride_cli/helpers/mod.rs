// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for stride-cli
// ABOUTME: Provides argument parsers and display formatting utilities

pub mod args;
pub mod display;

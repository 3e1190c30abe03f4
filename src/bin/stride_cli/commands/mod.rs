// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for stride-cli
// ABOUTME: Provides the zones, generate and show commands

pub mod generate;
pub mod show;
pub mod zones;

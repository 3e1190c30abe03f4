// ABOUTME: Utility modules for common functionality across the planner
// ABOUTME: Contains time-string parsing, pace formatting and rounding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Race time parsing, pace/duration formatting and half-up rounding
pub mod time_format;

//! Shared types, constants, and errors
//!
//! This module contains common definitions used throughout the transfer core.

pub mod constants;
pub mod error;
pub mod types;

//! Core transfer flow
//!
//! Amount conversion, balance tracking, validation, and submission.

pub mod amount;
pub mod balance;
pub mod submitter;
pub mod validator;

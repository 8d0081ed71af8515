//! Validation engine module.
//!
//! Provides the requirements validator and result aggregation.

pub mod result;
pub mod validator;

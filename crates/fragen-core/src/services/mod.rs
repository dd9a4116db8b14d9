//! Core services.
//!
//! Services orchestrate domain types through ports and contain no
//! infrastructure code.

mod pre_request;
mod request_runner;

pub use pre_request::{
    FRANCHISE_NAME_KEY, FranchiseNameHook, RANDOM_NUMBER_KEY, generate_identifier,
};
pub use request_runner::{PreparedRequest, RequestRunner, RunOutcome, prepare_request};

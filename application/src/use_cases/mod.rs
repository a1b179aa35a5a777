//! Use cases
//!
//! The two handlers of the feedback page. Each owns its busy flag; they
//! share no state and may run at the same time.

pub mod generate_responses;
pub(crate) mod shared;
pub mod submit_upload;

#[cfg(test)]
pub(crate) mod test_support;

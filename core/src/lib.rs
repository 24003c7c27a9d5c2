//! Scanning and echo-service engines.
//!
//! [`scanner`] drives validated requests from `sweepr-common` through
//! single-connect [`probe`] attempts under a concurrency cap. [`echo`]
//! hosts the echo backend: one accept loop, one task per session.

pub mod echo;
pub mod probe;
pub mod scanner;

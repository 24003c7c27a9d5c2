//! Shared models and configuration for the sweepr workspace.

pub mod config;
pub mod policy;
pub mod report;

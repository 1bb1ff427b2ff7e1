//! A FlowSOM command line library: tabular input and output, JSON configuration and cluster
//! analysis on top of the `flowsom` crate.

#![warn(missing_docs)]

pub mod extensions;

pub use flowsom;

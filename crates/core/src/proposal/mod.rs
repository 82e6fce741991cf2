//! Proposal assembly and lifecycle
//!
//! Builds `ProposalData` from a client intake, re-derives every computed
//! field on demand, and defines the ports through which callers persist and
//! send proposals.

pub mod builder;
pub mod ports;
pub mod recalculate;
pub mod service;

//! Record Store data models
//!
//! This module defines the raw record shapes the aggregation engine
//! consumes: releases, pull requests, and issue-tracker items. Records
//! arrive pre-validated from the ingest pipeline's snapshot export.

pub mod issue;
pub mod pull_request;
pub mod release;

pub use issue::*;
pub use pull_request::*;
pub use release::*;

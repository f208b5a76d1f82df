//! Cragpanel - administrative backend for a climbing-gym management
//! platform.
//!
//! Covers the admin approval workflow for centers and lectors, the
//! center-owner fee lifecycle, review answers, and activity reporting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

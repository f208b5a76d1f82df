//! Adapters - concrete implementations of the ports, grouped by
//! technology.

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;

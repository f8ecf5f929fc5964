//! Integration tests
//!
//! Drive the full router end to end without binding a socket

pub mod api;

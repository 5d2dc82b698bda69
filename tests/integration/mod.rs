//! Integration tests
//!
//! Drive the real router and database.

mod api;

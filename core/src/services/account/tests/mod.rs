//! Tests for password hashing and account flows

mod service_tests;

//! Tests for authentication service

mod config_tests;

//! Unit tests for the credential and session component.

mod token_tests;

pub mod domain;
pub mod error;
pub mod pages;
pub mod protocol;

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod domain_tests;

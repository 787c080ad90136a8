// Shared fixtures for integration tests. Included by path from each test
// file, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

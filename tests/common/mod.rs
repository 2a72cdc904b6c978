//! Shared test fixtures (used by functional and proptest suites)

#![allow(dead_code)]

pub mod cluster;

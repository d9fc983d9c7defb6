//! Test vectors shared by the integration tests.

#![allow(dead_code)]

pub mod curves;
pub mod fips;

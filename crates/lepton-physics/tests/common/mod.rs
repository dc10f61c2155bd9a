#![allow(dead_code)]

pub mod capture_log;
pub mod mock_engine;
pub mod test_helpers;

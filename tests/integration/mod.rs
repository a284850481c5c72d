//! Integration tests for the gdash panel pipeline

mod config_integration;
mod panel_scenarios;
mod test_utils;

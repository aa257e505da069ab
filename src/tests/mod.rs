//! Integration-style tests exercising the full pipeline

mod property_tests;

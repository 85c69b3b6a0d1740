//! Integration test suite for end-to-end scenarios.

#[path = "common/mod.rs"]
mod common;

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
#[path = "integration/end_to_end.rs"]
mod end_to_end;
#[path = "integration/output_formats.rs"]
mod output_formats;

//! Test doubles for code that talks to the classification service.

pub mod mocks;

pub use mocks::{test_helpers, MockGateway, RecordedCall, ReleaseHandle};

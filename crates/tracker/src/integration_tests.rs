//! Integration tests for the tracker using the `TestSession` harness.
//!
//! Each test runs a headless Bevy App with `TrackerPlugin` and checks how the
//! action pipeline, progression, notifications and map projection behave
//! together.

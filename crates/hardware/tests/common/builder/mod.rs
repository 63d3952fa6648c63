//! Test-side encoders.

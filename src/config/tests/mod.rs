//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Board name, credential, and option resolution tests
//! - `loading`: End-to-end loading from arguments, environment, and files

mod field_resolution;
mod helpers;

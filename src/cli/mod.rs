//! Command-line front end.
//!
//! - [`arguments`]: positional board name handling and configuration loading
//! - [`export_board`]: the fetch, render and write pipeline

pub mod arguments;
pub mod export_board;

pub use arguments::{extract_positional_arguments, load_config_from_args};
pub use export_board::{run, run_with_gateway};

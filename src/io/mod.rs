//! I/O modules for option list loading.

pub mod option_loader;

pub use option_loader::load_options_from_file;

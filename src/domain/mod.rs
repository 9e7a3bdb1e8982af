//! Domain logic modules for the selection control.
//!
//! This module contains the core interaction logic as pure functions:
//! - Filtering (candidate list derivation from query and selection)
//! - Navigation (wraparound index stepping for keyboard highlight)

pub mod filtering;
pub mod navigation;

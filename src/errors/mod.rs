//! Diagnostics produced while scanning.
//!
//! This module defines the error types reported by the lexer. It includes:
//!
//! - Diagnostic structures with line and offset information
//! - The lexical error categories
//! - Sinks that collect or log diagnostics without stopping the scan

pub mod errors;
pub mod sink;

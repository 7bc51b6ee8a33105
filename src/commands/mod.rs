//! Command implementations for the dirdiff CLI.

/// Directory tree comparison command
pub mod compare;

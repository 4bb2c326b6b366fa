//! Adapters between print documents and the environment that displays them.

pub mod host;

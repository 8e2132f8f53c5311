//! Shared building blocks for the page sections.
pub mod glass;
pub mod section;
pub mod social;

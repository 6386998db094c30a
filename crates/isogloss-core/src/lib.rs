//! Isogloss Core Types
//!
//! This crate provides the foundational types for coordinate-annotated
//! language graphs. It includes:
//!
//! - **Graph**: the validated graph model ([`graph`] module)
//! - **Gazetteer**: the geographic lookup contract and its in-memory
//!   implementation ([`gazetteer`] module)
//! - **Colour**: the colour-with-alpha codec used for edge styling
//!   ([`colour`] module)

pub mod colour;
pub mod gazetteer;
pub mod graph;

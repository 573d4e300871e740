//! # Analyzer Module
//!
//! Kubernetes manifest analysis building blocks.

pub mod kubelint;

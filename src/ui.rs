//! UI module for the progress bar demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without app logic

pub mod primitives;
pub mod theme;
pub mod widgets;

//! Core library for bookgrid
//!
//! This crate implements the **Functional Core** of the bookgrid application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The bookgrid project uses a two-crate architecture to enforce separation of
//! concerns:
//!
//! - **`bookgrid_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bookgrid`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`books`]: Domain models for Open Library search results and the
//!   transformations that turn them into displayable page output
//! - [`pagination`]: Page math: totals, window bounds, the sliding set of
//!   page links, and the [`pagination::Pager`] page-state value
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use bookgrid_core::books::{build_page_output, BookDoc};
//!
//! // Create fixture data (no HTTP required)
//! let docs = vec![
//!     BookDoc {
//!         key: "/works/OL27448W".to_string(),
//!         title: Some("The Lord of the Rings".to_string()),
//!         // ... other fields
//!     }
//! ];
//!
//! // Transform using pure function
//! let output = build_page_output(&docs, 1);
//!
//! // Assert on results (no mocking needed)
//! assert_eq!(output.pagination.current_page, 1);
//! ```

pub mod books;
pub mod pagination;

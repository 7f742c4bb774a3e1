//! Core library for intellidocs
//!
//! This crate implements the **Functional Core** of the intellidocs client:
//! the request-scoped session state, the wire types for both backend
//! endpoints, input validation, and the description of the multipart
//! request body. Everything in here is pure and performs no I/O.
//!
//! The `intellidocs` binary is the Imperative Shell. It parses the command
//! line, reads files, drives the session through its lifecycle, performs
//! the actual HTTP requests, and presents results. Keeping the lifecycle
//! and body construction here means the interesting behavior (validation
//! short-circuits, loading transitions, pre-call resets, part ordering)
//! is testable with fixture data and no mocking.
//!
//! Module organization:
//!
//! - [`session`]: the state struct with explicit setters and the
//!   `begin`/`complete`/`fail` request lifecycle
//! - [`format`]: wire types for the `format-text` endpoint
//! - [`readme`]: upload types, multipart body description, and MIME
//!   inference for the `generate-readme` endpoint

pub mod format;
pub mod readme;
pub mod session;

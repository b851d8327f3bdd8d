//! # formwork-http
//!
//! A minimal HTTP request representation with the body codecs needed to
//! decode form submissions.
//!
//! This crate provides:
//! - `Request` and `Method` types with builder-style construction
//! - Ordered `application/x-www-form-urlencoded` body parsing
//! - A buffered `multipart/form-data` body parser
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_http::{multipart, urlencoded, Request};
//!
//! let req = Request::post("/submit")
//!     .header("Content-Type", "application/x-www-form-urlencoded")
//!     .body("name=Jane+Doe&email=jane%40example.com");
//!
//! let pairs = urlencoded::parse(&req.body).unwrap();
//! assert_eq!(pairs[0], ("name".to_string(), "Jane Doe".to_string()));
//!
//! let boundary = multipart::parse_boundary("multipart/form-data; boundary=abc").unwrap();
//! assert_eq!(boundary, "abc");
//! ```
//!
//! All parsing is synchronous over a fully buffered body; transport-level
//! concerns (reading sockets, streaming, timeouts) live outside this crate.

mod error;
pub mod multipart;
mod request;
pub mod urlencoded;

pub use error::{ParseError, Result};
pub use request::{Method, Request};

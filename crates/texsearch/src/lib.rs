//! texsearch: search for LaTeX tutorial collections.
//!
//! A tutorial site keeps its content as a flat directory of `.tex` files carrying labeled
//! metadata fields (`\title{}`, `\category{}`, `\keywords{}`, `\date{}`, an abstract) and
//! sectioned bodies. texsearch answers free-text queries over that directory by scanning
//! every file per query, scoring matches by where the query occurs, and pointing each
//! result at the best matching section.
//!
//! The binary exposes the engine two ways: CLI subcommands for humans, and an HTTP
//! endpoint (`texsearch serve`) returning the JSON the site's search box consumes.

#![warn(missing_docs)]

pub mod cli;
pub mod logging;
pub mod server;

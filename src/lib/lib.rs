#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Form submission relay: validates contact and partnership form posts and
//! forwards them by email.

pub mod domain;
pub mod infrastructure;

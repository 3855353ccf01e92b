#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # giphywall-entities
//!
//! Reusable, agnostic domain entities for giphywall.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod gif;
pub mod id;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

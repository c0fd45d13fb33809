//! Domain rules for the Castboard casting-call marketplace.
//!
//! Nothing in this crate touches the database or HTTP. It holds the
//! moderation vocabulary, validation helpers, listing pagination math, and
//! the client-side feed accumulator shared by the `db` and `api` crates.

pub mod admin_request;
pub mod casting;
pub mod error;
pub mod feed;
pub mod roles;
pub mod search;
pub mod types;

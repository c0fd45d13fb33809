//! Row structs and DTOs.
//!
//! Each submodule holds the `FromRow` entity for its table plus the input
//! DTOs its repository accepts.

pub mod casting_call;
pub mod favorite;
pub mod profile;
pub mod session;

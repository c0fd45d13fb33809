//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod casting_call_repo;
pub mod favorite_repo;
pub mod profile_repo;
pub mod session_repo;

pub use casting_call_repo::CastingCallRepo;
pub use favorite_repo::FavoriteRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;

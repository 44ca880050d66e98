//! Domain model for identity and session handling.
//!
//! Models user records with their one-way password hashes and the claims
//! embedded in signed session tokens, keeping all infrastructure concerns
//! outside of the domain boundary.

mod claims;
mod ids;
mod user;

pub use claims::{AuthenticatedUser, Claims};
pub use ids::{ParseUserIdError, UserId};
pub use user::User;

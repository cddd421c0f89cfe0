//! Identity domain module.
//!
//! - `model`: the signed-in profile and the identity exchange wire types
//! - `storage`: durable storage for the signed-in profile
//! - `provider`: the third-party sign-in capability

mod model;
mod provider;
mod storage;

pub use model::{AuthResponse, IdTokenRequest, SignedInProfile};
pub use provider::IdentityProvider;
pub use storage::SessionStorage;

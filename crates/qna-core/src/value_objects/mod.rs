//! Value objects - immutable domain values

mod provider;
mod reaction_target;
mod role;

pub use provider::{AuthProvider, UnknownProviderError};
pub use reaction_target::ReactionTarget;
pub use role::Role;

//! Authentication utilities - JWT tokens and OAuth2 profile normalization

mod jwt;
mod oauth;

pub use jwt::{Claims, JwtService, TokenPair};
pub use oauth::{normalize_profile, OAuth2UserProfile};

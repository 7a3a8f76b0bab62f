//! Client-side session state
//!
//! `SessionStore` is the only writer of the session; the HTTP interceptors,
//! the route guard and the views read it.

mod store;
mod token;

pub use store::{Authenticator, LogoutReason, Session, SessionStore};
pub use token::expiry_from_token;

#[cfg(test)]
pub(crate) use token::jwt_with_exp;

//! Authentication: session context, durable storage and auth forms

mod form;
mod session;
mod store;

pub use form::{AuthForm, AuthMode};
pub use session::Session;
pub use store::{Entries, SessionStore, TOKEN_KEY, USER_KEY};

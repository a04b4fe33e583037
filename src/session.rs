//! Who is talking to the backend

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A logged-in user, as required by every backend route.
///
/// How the token was obtained (the login flow) is none of this crate's
/// business: callers hand over a ready-made session record.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// The id of the logged-in user
    user_id: String,

    /// The bearer token every request will carry
    token: String,
}

impl Session {
    pub fn new(user_id: String, token: String) -> Self {
        Self {
            user_id,
            token,
        }
    }

    pub fn user_id(&self) -> &str   { &self.user_id }
    pub fn token(&self) -> &str     { &self.token }
}

/// The error every backend operation fails with when no session record is present.
///
/// This is the one error callers may want to match on (to redirect to a login
/// screen, say), hence its own type rather than a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAuthenticated;

impl Display for NotAuthenticated {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "No session record exists, log in first")
    }
}

impl Error for NotAuthenticated {}

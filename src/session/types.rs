/// Opaque session token of the caller, inserted into request extensions by
/// [`super::require_user`]. Nothing in this crate looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(String);

impl CurrentUser {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

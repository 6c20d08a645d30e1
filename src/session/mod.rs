// Current-user gate. Identity lives outside this service; the scoring API
// only needs to know that some caller presented a session token.

pub use middleware::require_user;
pub use types::CurrentUser;

mod middleware;
mod types;

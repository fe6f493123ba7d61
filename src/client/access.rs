/// An indicator for the privilege level a client was built with.
///
/// The library cannot verify the role a token actually carries; access is a
/// caller-side assertion. A full-listing call made with a token lacking the
/// superadmin role comes back as an API error from the server.
pub trait Access {}

/// Ordinary project-member access.
pub struct UserAccess;

/// Superadmin access, required by the `get_all_*` full listings.
pub struct AdminAccess;

impl Access for UserAccess {}
impl Access for AdminAccess {}

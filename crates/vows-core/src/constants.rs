/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const AUTH_ROUTE_COMPONENT: &str = "auth";
pub const AUTH_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", AUTH_ROUTE_COMPONENT);

/// Minimum accepted length for admin passwords.
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Upper bound on party size for a single RSVP.
pub const MAX_GUEST_COUNT: i32 = 20;

/// Upper bound on guest message length, in characters.
pub const MAX_MESSAGE_LENGTH: u64 = 2000;

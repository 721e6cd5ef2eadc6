//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod route_path;

pub use route_path::{RoutePath, RoutePathError};

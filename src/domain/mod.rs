//! Domain Layer
//!
//! The navigation model itself: pure logic without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RoutePath)
//! - `entities/` - Menu declaration/arena and expansion state
//! - `services/` - NavigationTree (active-route resolution and rendering)
//! - `ports/` - Interface definitions for infrastructure (MenuSource)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

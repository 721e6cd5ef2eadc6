//! Menu source port - abstracts where a menu declaration comes from.

use crate::domain::entities::MenuDeclaration;
use crate::error::NavResult;

/// Loads a menu declaration.
///
/// Implementations only parse; validation happens when the declaration is
/// turned into a `NavigationTree`.
pub trait MenuSource {
    /// Read and parse the declaration.
    fn load(&self) -> NavResult<MenuDeclaration>;

    /// Human-readable name used in logs and error reports.
    fn describe(&self) -> String;
}

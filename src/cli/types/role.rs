//! Squad roles and the groupings the engines care about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Goalkeeper role name.
pub const GOALKEEPER: &str = "Portero";
/// Designated central-defender role name.
pub const CENTRAL_DEFENDER: &str = "Central";

const STAFF_ROLES: &[&str] = &["Entrenador", "Asistente", "Delegado", "Cuerpo Técnico"];
const DEFENSIVE_MARKERS: &[&str] = &["Defensa", "Lateral"];

/// Free-text role as entered by roster management.
///
/// Roles are not a closed set, so classification works on the name:
///
/// - **Staff**: coach, assistant, delegate. Staff never play and are never rated.
/// - **Defensive**: goalkeeper, the central-defender role, or any role whose
///   name contains "Defensa" or "Lateral". These earn clean-sheet bonuses.
///
/// # Examples
///
/// ```rust
/// use matchday::Role;
///
/// assert!(Role::new("Lateral Izquierdo").is_defensive());
/// assert!(Role::new("Entrenador").is_staff());
/// assert!(!Role::new("Delantero").is_defensive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(pub String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_staff(&self) -> bool {
        let name = self.0.trim();
        STAFF_ROLES.iter().any(|r| name.eq_ignore_ascii_case(r))
    }

    /// Field roles are everything that is not staff.
    pub fn is_field_role(&self) -> bool {
        !self.is_staff()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case(GOALKEEPER)
    }

    pub fn is_defensive(&self) -> bool {
        let name = self.0.trim();
        self.is_goalkeeper()
            || name.eq_ignore_ascii_case(CENTRAL_DEFENDER)
            || DEFENSIVE_MARKERS.iter().any(|m| name.contains(m))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_roles() {
        assert!(Role::new("Entrenador").is_staff());
        assert!(Role::new("asistente").is_staff());
        assert!(Role::new("Delegado").is_staff());
        assert!(!Role::new("Portero").is_staff());
        assert!(!Role::new("").is_staff());
    }

    #[test]
    fn test_defensive_roles() {
        assert!(Role::new("Portero").is_defensive());
        assert!(Role::new("Central").is_defensive());
        assert!(Role::new("Defensa Central").is_defensive());
        assert!(Role::new("Lateral Derecho").is_defensive());
        assert!(!Role::new("Mediocentro").is_defensive());
        assert!(!Role::new("Delantero").is_defensive());
        assert!(!Role::new("Entrenador").is_defensive());
    }

    #[test]
    fn test_goalkeeper() {
        assert!(Role::new(" portero ").is_goalkeeper());
        assert!(!Role::new("Lateral Derecho").is_goalkeeper());
    }
}

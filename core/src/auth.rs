//! The login gate in front of the editing profiles.
//!
//! One shared credential pair for the whole desk. There are no accounts
//! and nothing is stored; passing the gate only flips the session flag.

use crate::model::ViewMode;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "seda2026";

/// Check the shared desk credentials.
pub fn verify(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

/// Gestor and Gerentes sit behind the gate; Consultores does not.
pub fn view_requires_login(view: ViewMode) -> bool {
    matches!(view, ViewMode::Gestor | ViewMode::Gerentes)
}

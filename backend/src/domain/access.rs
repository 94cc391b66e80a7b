//! Admin console roles and the permissions they grant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role assigned to an admin console account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full access, including account management.
    Admin,
    /// Manages catalogue and content.
    Editor,
    /// Read-only dashboard access.
    Viewer,
}

/// Action guarded by a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ManageCatalogue,
    ManageContent,
    ManageMedia,
    ManageSettings,
    ManageUsers,
    ReadMessages,
}

impl UserRole {
    /// Whether this role may perform `permission`.
    pub fn allows(self, permission: Permission) -> bool {
        match self {
            Self::Admin => true,
            Self::Editor => !matches!(
                permission,
                Permission::ManageSettings | Permission::ManageUsers
            ),
            Self::Viewer => permission == Permission::ViewDashboard,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Viewer => "VIEWER",
        }
    }
}

/// Error returned when a role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{name}' (expected ADMIN, EDITOR or VIEWER)")]
pub struct UserRoleParseError {
    name: String,
}

impl FromStr for UserRole {
    type Err = UserRoleParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "EDITOR" => Ok(Self::Editor),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(UserRoleParseError {
                name: name.to_owned(),
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for role permissions.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(UserRole::Admin, Permission::ManageUsers, true)]
    #[case(UserRole::Editor, Permission::ManageCatalogue, true)]
    #[case(UserRole::Editor, Permission::ManageMedia, true)]
    #[case(UserRole::Editor, Permission::ManageSettings, false)]
    #[case(UserRole::Editor, Permission::ManageUsers, false)]
    #[case(UserRole::Viewer, Permission::ViewDashboard, true)]
    #[case(UserRole::Viewer, Permission::ManageCatalogue, false)]
    fn grants_permissions_by_role(
        #[case] role: UserRole,
        #[case] permission: Permission,
        #[case] expected: bool,
    ) {
        assert_eq!(role.allows(permission), expected);
    }

    #[rstest]
    fn roles_round_trip_through_names() {
        for role in [UserRole::Admin, UserRole::Editor, UserRole::Viewer] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[rstest]
    fn roles_use_uppercase_on_the_wire() {
        let role: UserRole = serde_json::from_str("\"EDITOR\"").expect("valid role");
        assert_eq!(role, UserRole::Editor);
    }
}

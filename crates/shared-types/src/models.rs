use serde::{Deserialize, Deserializer, Serialize};

/// Marketplace role carried on the auth service's user record.
///
/// - `Admin` — manages users and promotes students to tutors.
/// - `Student` — browses tutors and may apply to become one.
/// - `Tutor` — maintains a tutor profile and sees teaching stats.
/// - `Unknown` — missing or unrecognized role; gets no navigation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Student,
    Tutor,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(UserRole::from_str_or_default(&raw))
    }
}

impl UserRole {
    /// Parse a role string case-insensitively. Unknown values map to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "student" => UserRole::Student,
            "tutor" => UserRole::Tutor,
            _ => UserRole::Unknown,
        }
    }

    /// Lowercase wire form, as the auth service stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Student => "student",
            UserRole::Tutor => "tutor",
            UserRole::Unknown => "unknown",
        }
    }

    /// Human-readable label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Student => "Student",
            UserRole::Tutor => "Tutor",
            UserRole::Unknown => "Member",
        }
    }
}

/// The normalized user record resolved from a valid session.
///
/// Owned by the auth service; this application only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role string from the auth service. Use [`SessionUser::role`] to
    /// get the parsed form.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SessionUser {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    /// Up to two uppercase initials from the display name, for avatars.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Outcome of resolving the current request's session.
///
/// `user` is only present (and only serialized) when `authenticated` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionState {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    /// Consume into the user when authenticated.
    pub fn into_user(self) -> Option<SessionUser> {
        if self.authenticated {
            self.user
        } else {
            None
        }
    }
}

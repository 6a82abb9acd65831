use fallible_core::{match_on, Maybe, MaybeArms, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,

    /// Users are not required to register an email.
    pub email: Option<String>,
}

/// In-memory user table.
#[derive(Debug, Clone)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Loads a table from a JSON array of users.
    pub fn from_json(raw: &str) -> Outcome<Self, serde_json::Error> {
        Outcome::from_throwable(|| serde_json::from_str::<Vec<User>>(raw)).map(Self::new)
    }

    /// Finds user by id.
    pub fn find(&self, id: u32) -> Maybe<&User> {
        Maybe::from_nullable(self.users.iter().find(|u| u.id == id))
    }

    /// Email of user `id`, `Absent` both for unknown users and users without email.
    pub fn email(&self, id: u32) -> Maybe<&str> {
        self.find(id)
            .flat_map(|u| Maybe::from_nullable(u.email.as_deref()))
    }

    /// One line description, e.g. `Alice <alice@example.com>`.
    pub fn describe(&self, id: u32) -> String {
        match_on(
            self.find(id),
            MaybeArms {
                present: |u: &User| {
                    match_on(
                        Maybe::from_nullable(u.email.as_deref()),
                        MaybeArms {
                            present: |email: &str| format!("{} <{}>", u.name, email),
                            absent: || format!("{} (no email)", u.name),
                        },
                    )
                },
                absent: || "User not found".to_string(),
            },
        )
    }
}

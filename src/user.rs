use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
}

impl User {
    fn numbered(n: u64) -> Self {
        Self {
            id: n,
            username: format!("user{}", n),
            email: format!("user{}@mail.com", n),
            image: None,
        }
    }
}

/// The seven users served by the development API and used throughout the tests.
pub fn fixture_users() -> Vec<User> {
    (1..=7).map(User::numbered).collect()
}

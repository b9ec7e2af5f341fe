use crate::models::User;

// Password: testpass123 (bcrypt, cost 4 so the demo login and the test suite
// stay fast; real records should come from hash_password).
const SEED_PASSWORD_HASH: &str = "$2b$04$Uv4IoT9Igt2WBg5BnyvC7u33l0JISAPhibOrWf.kr.DOSdezGXrp2";

/// Fixed username → credential lookup.
///
/// The record set is supplied at construction and never changes; account
/// management is out of scope for this service.
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The demo record set a fresh checkout runs with: one account,
    /// `testuser` / `testpass123`, id 1.
    pub fn seeded() -> Self {
        Self::new(vec![User {
            id: 1,
            username: "testuser".to_string(),
            password_hash: SEED_PASSWORD_HASH.to_string(),
        }])
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }
}

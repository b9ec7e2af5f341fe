use std::fmt;

/// A credential record: the username → password-hash entry the login path
/// checks against.
///
/// Internal only. Deliberately not `Serialize`, and `Debug` is written by
/// hand with the hash redacted, so the hash reaches neither a response body
/// nor a log line.
#[derive(Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// bcrypt hash, salt embedded.
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_debug_redacts_password_hash() {
        let user = User {
            id: 1,
            username: "testuser".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        };

        let rendered = format!("{:?}", user);
        assert!(rendered.contains("testuser"));
        assert!(
            !rendered.contains("$2b$04$"),
            "the stored hash must never show up in debug output"
        );
        assert!(rendered.contains("<redacted>"));
    }
}

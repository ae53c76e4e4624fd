use serde::{Deserialize, Serialize};

/// Sign-up input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpInput {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Sign-in input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// User row as handed to the store; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
    pub username: String,
}

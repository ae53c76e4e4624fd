use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Acknowledgement body returned by mutations that carry no payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Status {
    pub status: String,
}

impl Status {
    pub fn ok() -> Self { Self { status: "ok".into() } }
}

/// Identity of a freshly created row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Created {
    pub id: i32,
}

use serde::{Deserialize, Serialize};

/// A roster entry as the server returns it. The id is server-assigned and
/// always present on fetched records.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub breed: String,
    pub age: u32,
}

/// Creation payload for POST /players. The server assigns the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub age: u32,
}

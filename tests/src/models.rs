use rewind::Record;
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Identified by a UUID stored under a different property name.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(name = "Document")]
pub struct Doc {
    #[property(rename = "uuid")]
    pub key: Uuid,

    pub title: String,

    #[property(skip)]
    pub cached_len: usize,
}

/// Identifier that may be missing before the first save.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Draft {
    pub id: Option<i64>,
    pub body: String,
}

/// Identifier readable but not writable through the accessor registry.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Snapshot {
    #[property(read_only)]
    pub id: i64,
}

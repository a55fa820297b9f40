//! Item Entity
//!
//! One to-do entry. The wire shape is shared by localStorage and `GET /api`:
//! `{ "userId": int, "id": int, "title": string, "completed": bool }`.

use serde::{Deserialize, Serialize};

/// Owner tag stamped on items created on this page
pub const LOCAL_OWNER: i64 = 1;

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque provenance tag, not used for authorization
    #[serde(rename = "userId")]
    pub owner: i64,
    /// Unique key within a list
    pub id: i64,
    /// Display text
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a fresh, not yet completed item owned by this page
    pub fn new_local(id: i64, title: impl Into<String>) -> Self {
        Self {
            owner: LOCAL_OWNER,
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Same item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_item() {
        let item = Item::new_local(7, "Buy milk");
        assert_eq!(item.id, 7);
        assert_eq!(item.owner, LOCAL_OWNER);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_wire_field_names() {
        let item = Item { owner: 3, id: 9, title: "x".to_string(), completed: true };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["id"], 9);
        assert_eq!(json["completed"], true);
        assert!(json.get("owner").is_none());
    }

    #[test]
    fn test_toggled_only_flips_completed() {
        let item = Item::new_local(1, "A");
        let flipped = item.toggled();
        assert!(flipped.completed);
        assert_eq!(flipped.title, item.title);
        assert_eq!(flipped.owner, item.owner);
        assert_eq!(flipped.toggled(), item);
    }
}

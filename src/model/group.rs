//! Artist groups - one tab and one selection table each

use serde::{Deserialize, Serialize};

/// The two independent artist collections produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Artists that already have a folder in the library
    Existing,
    /// Artists seen for the first time
    New,
}

impl Group {
    /// Groups in export order
    pub fn all() -> [Group; 2] {
        [Group::Existing, Group::New]
    }

    pub fn name(&self) -> &str {
        match self {
            Group::Existing => "Existing",
            Group::New => "New",
        }
    }

    /// Key used in exported selection state
    pub fn key(&self) -> &'static str {
        match self {
            Group::Existing => "existing",
            Group::New => "new",
        }
    }

    pub fn other(&self) -> Group {
        match self {
            Group::Existing => Group::New,
            Group::New => Group::Existing,
        }
    }

    /// Whether freshly loaded rows of this group start checked
    pub fn checked_by_default(&self) -> bool {
        matches!(self, Group::Existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_keys_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Group::Existing).unwrap(), "\"existing\"");
        assert_eq!(serde_json::to_string(&Group::New).unwrap(), "\"new\"");
        assert_eq!(Group::Existing.key(), "existing");
    }

    #[test]
    fn test_group_order_and_other() {
        assert_eq!(Group::all(), [Group::Existing, Group::New]);
        assert_eq!(Group::Existing.other(), Group::New);
        assert_eq!(Group::New.other(), Group::Existing);
    }
}

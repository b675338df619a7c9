use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The identifier with underscores replaced by spaces, for narration.
            pub fn spoken(&self) -> String {
                self.0.replace('_', " ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Key of a location in the world map.
    LocationId
);
string_id!(
    /// Key of an item in the item catalog.
    ItemId
);
string_id!(
    /// Key of a non-player character.
    NpcId
);
string_id!(
    /// Key of an enemy template.
    EnemyId
);
string_id!(
    /// Key of a quest.
    QuestId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoken_replaces_underscores() {
        assert_eq!(ItemId::new("mine_key").spoken(), "mine key");
        assert_eq!(LocationId::new("village").spoken(), "village");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EnemyId::new("wolf");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"wolf\"");
        let back: EnemyId = serde_json::from_str("\"wolf\"").unwrap();
        assert_eq!(back, id);
    }
}

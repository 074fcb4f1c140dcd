use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier shared with the host process.
///
/// Handles are issued once per object by the coordinator and echoed back
/// verbatim by the host. They serialize as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(pub u64);

impl Handle {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Local instance identity of a model object.
///
/// Minted once at construction. Two objects with identical fields still
/// carry different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey(uuid::Uuid);

impl ObjectKey {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ObjectKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of object synchronized with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Dialog,
    Tab,
    Button,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Dialog => "dialog",
            ObjectKind::Tab => "tab",
            ObjectKind::Button => "button",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Handle(7)).unwrap();
        assert_eq!(json, "7");
        let back: Handle = serde_json::from_str("7").unwrap();
        assert_eq!(back, Handle(7));
    }

    #[test]
    fn handle_display() {
        assert_eq!(Handle(42).to_string(), "#42");
        assert_eq!(Handle(42).get(), 42);
    }

    #[test]
    fn handles_order_by_value() {
        assert!(Handle(1) < Handle(2));
    }

    #[test]
    fn object_key_is_v4_uuid() {
        let key = ObjectKey::new();
        assert_eq!(key.as_uuid().get_version_num(), 4);
        assert_eq!(key.to_string(), key.as_uuid().to_string());
    }

    #[test]
    fn object_keys_are_unique() {
        let a = ObjectKey::new();
        let b = ObjectKey::new();
        assert_ne!(a, b);
    }

    #[test]
    fn object_key_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let k = ObjectKey::new();
        set.insert(k);
        set.insert(k);
        set.insert(ObjectKey::default());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn object_kind_display() {
        assert_eq!(ObjectKind::Dialog.to_string(), "dialog");
        assert_eq!(ObjectKind::Tab.to_string(), "tab");
        assert_eq!(ObjectKind::Button.to_string(), "button");
    }
}

// Resource model
// A bookable room or piece of equipment shown as one grid column

use serde::{Deserialize, Serialize};

/// Static reference entry for a schedule column. Never created or
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: usize,
    pub name: String,
    /// Secondary label under the name, e.g. the room it sits in.
    pub sub_label: String,
}

impl Resource {
    pub fn new(id: usize, name: impl Into<String>, sub_label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sub_label: sub_label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource() {
        let resource = Resource::new(0, "Reformer 1", "Sala A");
        assert_eq!(resource.id, 0);
        assert_eq!(resource.name, "Reformer 1");
        assert_eq!(resource.sub_label, "Sala A");
    }
}

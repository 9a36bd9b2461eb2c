//! Core traits for modelgraph
//!
//! Small behavior traits shared by the schema layer and the derived model.

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for types identified by a declared name
///
/// Names are the join key of the derived model: definitions and relation
/// records are matched by declared name, never by identity.
pub trait Named {
    /// Get the declared name
    fn name(&self) -> &str;

    /// Check if the declared name matches exactly
    fn is_named(&self, other: &str) -> bool {
        self.name() == other
    }
}

/// Find an item by declared name, preserving the first match
pub fn find_named<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.is_named(name))
}

// ============================================================================
// Described Trait
// ============================================================================

/// Trait for types that may carry a free-text description
pub trait Described {
    /// Get the description, if any
    fn description(&self) -> Option<&str>;

    /// Check if a description is present
    fn has_description(&self) -> bool {
        self.description().is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNamed {
        name: String,
    }

    impl Named for TestNamed {
        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_named_trait() {
        let item = TestNamed {
            name: "User".to_string(),
        };
        assert_eq!(item.name(), "User");
        assert!(item.is_named("User"));
        assert!(!item.is_named("user"));
    }

    #[test]
    fn test_find_named() {
        let items = vec![
            TestNamed {
                name: "Company".to_string(),
            },
            TestNamed {
                name: "User".to_string(),
            },
        ];
        assert!(find_named(&items, "User").is_some());
        assert!(find_named(&items, "Missing").is_none());
    }
}

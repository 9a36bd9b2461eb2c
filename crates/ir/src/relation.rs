//! Relation records between entities
//!
//! This module contains the `EntityRelation` record derived for every
//! entity definition: the outgoing references it declares and the incoming
//! references discovered on every other entity. The edge set is one
//! multiset viewed from both endpoints: every outgoing edge on one record
//! appears as an incoming edge on the target's record.

use modelgraph_core::Named;
use serde::{Deserialize, Serialize};

// ============================================================================
// RelationEdge
// ============================================================================

/// One directed reference edge, seen from either endpoint
///
/// On a `refer_tos` list the entity name is the target; on a
/// `referred_bys` list it is the referrer. The property name is always the
/// referencing field on the referrer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// The entity at the other end of the edge
    pub entity_name: String,

    /// The referencing field's name
    pub property_name: String,

    /// The referencing field's uniqueness flag
    pub unique: bool,
}

impl RelationEdge {
    /// Create a new edge
    pub fn new(
        entity_name: impl Into<String>,
        property_name: impl Into<String>,
        unique: bool,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            property_name: property_name.into(),
            unique,
        }
    }
}

impl Named for RelationEdge {
    fn name(&self) -> &str {
        &self.entity_name
    }
}

// ============================================================================
// EntityRelation
// ============================================================================

/// Derived relation record for one entity definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRelation {
    /// Declared name of the entity this record describes
    pub entity_name: String,

    /// Outgoing references, in property declaration order
    pub refer_tos: Vec<RelationEdge>,

    /// Incoming references, in definition order then property order
    pub referred_bys: Vec<RelationEdge>,
}

impl EntityRelation {
    /// Create an empty relation record for an entity
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            refer_tos: Vec::new(),
            referred_bys: Vec::new(),
        }
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Check if this entity references the given entity
    pub fn refers_to(&self, entity_name: &str) -> bool {
        self.refer_tos.iter().any(|e| e.entity_name == entity_name)
    }

    /// Check if this entity is referenced by the given entity
    pub fn is_referred_by(&self, entity_name: &str) -> bool {
        self.referred_bys
            .iter()
            .any(|e| e.entity_name == entity_name)
    }

    /// Get the number of edges touching this entity
    pub fn edge_count(&self) -> usize {
        self.refer_tos.len() + self.referred_bys.len()
    }

    /// Check if the entity participates in no reference edge
    pub fn is_isolated(&self) -> bool {
        self.refer_tos.is_empty() && self.referred_bys.is_empty()
    }
}

impl Named for EntityRelation {
    fn name(&self) -> &str {
        &self.entity_name
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new() {
        let edge = RelationEdge::new("Company", "company_id", false);
        assert_eq!(edge.entity_name, "Company");
        assert_eq!(edge.property_name, "company_id");
        assert!(!edge.unique);
    }

    #[test]
    fn test_relation_queries() {
        let relation = EntityRelation {
            entity_name: "User".to_string(),
            refer_tos: vec![RelationEdge::new("Company", "company_id", false)],
            referred_bys: vec![RelationEdge::new("Post", "author_id", false)],
        };

        assert!(relation.refers_to("Company"));
        assert!(!relation.refers_to("Post"));
        assert!(relation.is_referred_by("Post"));
        assert!(!relation.is_referred_by("Company"));
        assert_eq!(relation.edge_count(), 2);
        assert!(!relation.is_isolated());
    }

    #[test]
    fn test_empty_relation_is_isolated() {
        let relation = EntityRelation::new("Tag");
        assert!(relation.is_isolated());
        assert_eq!(relation.edge_count(), 0);
    }

    #[test]
    fn test_relation_serde() {
        let relation = EntityRelation {
            entity_name: "User".to_string(),
            refer_tos: vec![RelationEdge::new("Company", "company_id", true)],
            referred_bys: Vec::new(),
        };
        let json = serde_json::to_string(&relation).unwrap();
        let back: EntityRelation = serde_json::from_str(&json).unwrap();
        assert_eq!(relation, back);
    }
}

//! Model generation pipeline
//!
//! The top-level entry points for model derivation. Generation is a pure
//! function of the input schema list: no state survives a call, and the
//! relation pass is read-only over the definitions produced by the
//! definition pass.
//!
//! ```text
//! tagged schemas
//!       │
//!       ▼
//! generate_definitions()   → Vec<EntityDefinition>
//!       │
//!       ▼
//! generate_relations()     → Vec<EntityRelation>
//! ```
//!
//! The first classification or structural failure aborts the whole batch;
//! there are no partial results and no per-field skips.

use crate::classify::classify_field;
use crate::definition::{EntityDefinition, ModelDocument, PropertyDefinition};
use crate::relation::{EntityRelation, RelationEdge};
use modelgraph_core::{ModelError, ModelResult, SchemaKind};
use modelgraph_schema::Schema;
use tracing::debug;

// ============================================================================
// Definition Generation
// ============================================================================

/// Derive entity definitions from an ordered collection of schemas
///
/// Schemas not tagged as entities are silently excluded; the remaining
/// schemas produce one definition each, in input order. Every entity must
/// carry a name and an object shape, and every declared field must
/// classify, or the call fails as a whole.
pub fn generate_definitions(schemas: &[Schema]) -> ModelResult<Vec<EntityDefinition>> {
    let mut definitions = Vec::new();

    for schema in schemas {
        if schema.kind() != Some(SchemaKind::Entity) {
            continue;
        }

        let name = schema
            .tag_name()
            .ok_or_else(|| ModelError::missing_name("entity schema"))?
            .to_string();

        let fields = schema
            .as_object()
            .ok_or_else(|| ModelError::invalid_shape(&name))?;

        let mut properties = Vec::with_capacity(fields.len());
        for (field_name, field_schema) in fields {
            properties.push(classify_field(&name, field_name, field_schema)?);
        }

        debug!(
            entity = %name,
            properties = properties.len(),
            "assembled entity definition"
        );

        definitions.push(EntityDefinition {
            name,
            description: schema.tag_description().map(str::to_string),
            properties,
        });
    }

    debug!(entities = definitions.len(), "definition pass complete");
    Ok(definitions)
}

// ============================================================================
// Relation Generation
// ============================================================================

/// Derive the bidirectional relation graph from entity definitions
///
/// Produces one relation record per definition, in input order. Outgoing
/// edges follow property declaration order; incoming edges follow the
/// definition order of the referring entities, then their property order.
/// Nothing is deduplicated: two fields referencing the same entity yield
/// two edges.
///
/// Incoming edges are only collected from *other* definitions (matched by
/// name), so a self-referencing field appears in its own entity's
/// `refer_tos` but not in its `referred_bys`.
pub fn generate_relations(definitions: &[EntityDefinition]) -> Vec<EntityRelation> {
    let relations: Vec<EntityRelation> = definitions
        .iter()
        .map(|definition| {
            let refer_tos = definition
                .properties
                .iter()
                .filter_map(|property| match property {
                    PropertyDefinition::Reference {
                        name,
                        target_entity,
                        unique,
                        ..
                    } => Some(RelationEdge::new(target_entity, name, *unique)),
                    _ => None,
                })
                .collect();

            let mut referred_bys = Vec::new();
            for other in definitions {
                if other.name == definition.name {
                    continue;
                }
                for property in &other.properties {
                    if let PropertyDefinition::Reference {
                        name,
                        target_entity,
                        unique,
                        ..
                    } = property
                        && target_entity == &definition.name
                    {
                        referred_bys.push(RelationEdge::new(&other.name, name, *unique));
                    }
                }
            }

            EntityRelation {
                entity_name: definition.name.clone(),
                refer_tos,
                referred_bys,
            }
        })
        .collect();

    let edges: usize = relations.iter().map(|r| r.refer_tos.len()).sum();
    debug!(entities = relations.len(), edges, "relation pass complete");
    relations
}

// ============================================================================
// Combined Generation
// ============================================================================

/// Derive definitions and relations in one call
pub fn generate_model(schemas: &[Schema]) -> ModelResult<ModelDocument> {
    let definitions = generate_definitions(schemas)?;
    let relations = generate_relations(&definitions);
    Ok(ModelDocument {
        definitions,
        relations,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use modelgraph_core::{Named, ScalarType};
    use pretty_assertions::assert_eq;

    fn company() -> Schema {
        Schema::entity(
            "Company",
            [
                ("id", Schema::string().primary_key()),
                ("name", Schema::string()),
            ],
        )
    }

    fn user(company: &Schema) -> Schema {
        Schema::entity(
            "User",
            [
                ("id", Schema::string().primary_key()),
                ("email", Schema::string().unique()),
                ("company_id", Schema::string().references(company)),
            ],
        )
    }

    #[test]
    fn test_company_user_scenario() {
        let company = company();
        let user = user(&company);

        let definitions = generate_definitions(&[company, user]).unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].name, "Company");
        assert_eq!(definitions[1].name, "User");

        let company_id = definitions[1].property("company_id").unwrap();
        assert_eq!(
            company_id,
            &PropertyDefinition::Reference {
                name: "company_id".to_string(),
                target_entity: "Company".to_string(),
                unique: false,
                nullable: false,
            }
        );

        let relations = generate_relations(&definitions);
        let user_relation = relations.iter().find(|r| r.is_named("User")).unwrap();
        assert_eq!(
            user_relation.refer_tos,
            vec![RelationEdge::new("Company", "company_id", false)]
        );
        assert!(user_relation.referred_bys.is_empty());

        let company_relation = relations.iter().find(|r| r.is_named("Company")).unwrap();
        assert!(company_relation.refer_tos.is_empty());
        assert_eq!(
            company_relation.referred_bys,
            vec![RelationEdge::new("User", "company_id", false)]
        );
    }

    #[test]
    fn test_non_entity_schemas_silently_excluded() {
        let company = company();
        let plain = Schema::object([("anything", Schema::string())]);
        let address = Schema::struct_type("Address", [("street", Schema::string())]);

        let definitions = generate_definitions(&[plain, company, address]).unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "Company");
    }

    #[test]
    fn test_definitions_preserve_input_order() {
        let a = Schema::entity("Alpha", [("id", Schema::string().primary_key())]);
        let b = Schema::entity("Beta", [("id", Schema::string().primary_key())]);
        let c = Schema::entity("Gamma", [("id", Schema::string().primary_key())]);

        let definitions = generate_definitions(&[c, a, b]).unwrap();
        let names: Vec<&str> = definitions.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_properties_preserve_declaration_order() {
        let entity = Schema::entity(
            "Event",
            [
                ("id", Schema::string().primary_key()),
                ("title", Schema::string()),
                ("starts_at", Schema::date()),
                ("all_day", Schema::boolean()),
            ],
        );
        let definitions = generate_definitions(&[entity]).unwrap();
        let names: Vec<&str> = definitions[0].properties.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["id", "title", "starts_at", "all_day"]);
    }

    #[test]
    fn test_description_carried_only_when_tagged() {
        let described = Schema::entity("A", [("id", Schema::string().primary_key())])
            .describe("The first letter");
        let plain = Schema::entity("B", [("id", Schema::string().primary_key())]);

        let definitions = generate_definitions(&[described, plain]).unwrap();
        assert_eq!(definitions[0].description.as_deref(), Some("The first letter"));
        assert_eq!(definitions[1].description, None);
    }

    #[test]
    fn test_nameless_entity_fails() {
        let mut nameless = Schema::object([("id", Schema::string())]);
        nameless.tags.kind = Some(SchemaKind::Entity);

        let err = generate_definitions(&[nameless]).unwrap_err();
        assert!(matches!(err, ModelError::MissingName { .. }));
        assert_eq!(err.to_string(), "entity schema must have a name");
    }

    #[test]
    fn test_non_object_entity_fails() {
        let mut bad = Schema::string();
        bad.tags.kind = Some(SchemaKind::Entity);
        bad.tags.name = Some("Broken".to_string());

        let err = generate_definitions(&[bad]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidShape { .. }));
        assert_eq!(err.to_string(), "entity 'Broken' must be an object schema");
    }

    #[test]
    fn test_one_bad_field_aborts_the_batch() {
        let good = company();
        let bad = Schema::entity(
            "Order",
            [
                ("id", Schema::string().primary_key()),
                ("customer", company()),
            ],
        );

        let err = generate_definitions(&[good, bad]).unwrap_err();
        assert!(matches!(err, ModelError::IllegalEmbedding { .. }));
    }

    #[test]
    fn test_two_references_yield_two_edges() {
        let company = company();
        let contract = Schema::entity(
            "Contract",
            [
                ("id", Schema::string().primary_key()),
                ("buyer_id", Schema::string().references(&company)),
                ("seller_id", Schema::string().references(&company)),
            ],
        );

        let document = generate_model(&[company, contract]).unwrap();
        let company_relation = document.relation("Company").unwrap();
        assert_eq!(
            company_relation.referred_bys,
            vec![
                RelationEdge::new("Contract", "buyer_id", false),
                RelationEdge::new("Contract", "seller_id", false),
            ]
        );
    }

    #[test]
    fn test_relation_symmetry() {
        let company = company();
        let user = user(&company);
        let post = Schema::entity(
            "Post",
            [
                ("id", Schema::string().primary_key()),
                ("author_id", Schema::string().references(&user)),
            ],
        );

        let document = generate_model(&[company, user, post]).unwrap();

        // Every outgoing edge appears exactly once as an incoming edge on
        // its target, with matching property name and uniqueness.
        for relation in &document.relations {
            for edge in &relation.refer_tos {
                let target = document.relation(&edge.entity_name).unwrap();
                let matches = target
                    .referred_bys
                    .iter()
                    .filter(|incoming| {
                        incoming.entity_name == relation.entity_name
                            && incoming.property_name == edge.property_name
                            && incoming.unique == edge.unique
                    })
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn test_self_reference_excluded_from_referred_bys() {
        let user = Schema::entity("User", [("id", Schema::string().primary_key())]);
        let manager_id = Schema::string().references(&user).nullable();
        let user = user.with_field("manager_id", manager_id);

        let document = generate_model(&[user]).unwrap();
        let relation = document.relation("User").unwrap();

        assert_eq!(
            relation.refer_tos,
            vec![RelationEdge::new("User", "manager_id", false)]
        );
        // The same-name guard keeps the self edge out of the incoming list.
        assert!(relation.referred_bys.is_empty());
    }

    #[test]
    fn test_unique_flag_carried_onto_edges() {
        let user = Schema::entity("User", [("id", Schema::string().primary_key())]);
        let profile = Schema::entity(
            "Profile",
            [
                ("id", Schema::string().primary_key()),
                ("user_id", Schema::string().unique().references(&user)),
            ],
        );

        let document = generate_model(&[user, profile]).unwrap();
        let user_relation = document.relation("User").unwrap();
        assert_eq!(
            user_relation.referred_bys,
            vec![RelationEdge::new("Profile", "user_id", true)]
        );
    }

    #[test]
    fn test_relations_without_references_are_isolated() {
        let tag = Schema::entity(
            "Tag",
            [
                ("id", Schema::string().primary_key()),
                ("label", Schema::string()),
            ],
        );
        let document = generate_model(&[tag]).unwrap();
        assert!(document.relation("Tag").unwrap().is_isolated());
    }

    #[test]
    fn test_full_model_with_mixed_properties() {
        let company = company();
        let address = Schema::struct_type(
            "Address",
            [("street", Schema::string()), ("city", Schema::string())],
        );
        let user = Schema::entity(
            "User",
            [
                ("id", Schema::string().primary_key()),
                ("email", Schema::string().unique()),
                ("role", Schema::string_enum(["admin", "member"])),
                ("tags", Schema::array(Schema::string()).optional()),
                ("address", address.nullable()),
                ("signed_up", Schema::date()),
                ("company_id", Schema::string().references(&company)),
            ],
        )
        .describe("A registered account");

        let document = generate_model(&[company, user]).unwrap();
        let user_definition = document.definition("User").unwrap();
        assert_eq!(user_definition.property_count(), 7);
        assert_eq!(
            user_definition.description.as_deref(),
            Some("A registered account")
        );

        match user_definition.property("role").unwrap() {
            PropertyDefinition::Scalar {
                scalar_type,
                acceptable_values,
                ..
            } => {
                assert_eq!(*scalar_type, ScalarType::String);
                assert_eq!(
                    acceptable_values.as_deref(),
                    Some(["admin".to_string(), "member".to_string()].as_slice())
                );
            }
            other => panic!("unexpected property: {:?}", other),
        }

        match user_definition.property("tags").unwrap() {
            PropertyDefinition::Scalar {
                nullable, array, ..
            } => {
                assert!(nullable);
                assert!(array);
            }
            other => panic!("unexpected property: {:?}", other),
        }

        match user_definition.property("address").unwrap() {
            PropertyDefinition::EmbeddedValue {
                struct_type_name,
                nullable,
                ..
            } => {
                assert_eq!(struct_type_name, "Address");
                assert!(nullable);
            }
            other => panic!("unexpected property: {:?}", other),
        }

        let json = document.to_json().unwrap();
        let back = ModelDocument::from_json(&json).unwrap();
        assert_eq!(document, back);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let company = company();
        let user = user(&company);
        let schemas = vec![company, user];

        let first = generate_model(&schemas).unwrap();
        let second = generate_model(&schemas).unwrap();
        assert_eq!(first, second);
    }
}

use serde::{Deserialize, Serialize};

/// A node in the category tree. `parent_id` is a plain id, children are owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub id: i64,
    pub level: i32,
    pub name: String,
    pub parent_id: Option<i64>,
    pub children: Vec<TaxonomyNode>,
    pub full_path_taxonomy_ids: Vec<i64>,
}

impl TaxonomyNode {
    pub fn root(id: i64, name: &str, children: Vec<TaxonomyNode>) -> Self {
        Self { id, level: 0, name: name.into(), parent_id: None, children, full_path_taxonomy_ids: vec![id] }
    }

    pub fn leaf(parent: i64, id: i64, name: &str) -> Self {
        Self {
            id,
            level: 1,
            name: name.into(),
            parent_id: Some(parent),
            children: vec![],
            full_path_taxonomy_ids: vec![parent, id],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNodeProperty {
    pub property_id: i64,
    pub name: String,
    pub display_name: String,
    pub scales: Vec<PropertyScale>,
    pub is_required: bool,
    pub supports_attributes: bool,
    pub supports_variations: bool,
    pub is_multivalued: bool,
    pub max_values_allowed: Option<i32>,
    pub possible_values: Vec<PropertyValue>,
    pub selected_values: Vec<PropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyScale {
    pub scale_id: i64,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub value_id: i64,
    pub name: String,
    pub scale_id: Option<i64>,
    pub equal_to: Vec<i64>,
}

use std::collections::HashMap;

use crate::db_types::{PropertyValue, TaxonomyNode, TaxonomyNodeProperty};

pub const TAXONOMY_NECKLACES: i64 = 1207;
pub const TAXONOMY_KITCHEN: i64 = 562;

fn values(list: &[(i64, &str)]) -> Vec<PropertyValue> {
    list.iter().map(|(value_id, name)| PropertyValue { value_id: *value_id, name: name.to_string(), ..Default::default() }).collect()
}

fn multivalued(property_id: i64, name: &str, display_name: &str, possible: &[(i64, &str)]) -> TaxonomyNodeProperty {
    TaxonomyNodeProperty {
        property_id,
        name: name.into(),
        display_name: display_name.into(),
        supports_attributes: true,
        is_multivalued: true,
        possible_values: values(possible),
        ..Default::default()
    }
}

/// The category tree shared by every seeder.
pub fn taxonomy_tree() -> Vec<TaxonomyNode> {
    vec![
        TaxonomyNode::root(1, "Jewelry", vec![
            TaxonomyNode::leaf(1, TAXONOMY_NECKLACES, "Necklaces"),
            TaxonomyNode::leaf(1, 1208, "Earrings"),
            TaxonomyNode::leaf(1, 1209, "Rings"),
            TaxonomyNode::leaf(1, 1210, "Bracelets"),
        ]),
        TaxonomyNode::root(2, "Home & Living", vec![
            TaxonomyNode::leaf(2, TAXONOMY_KITCHEN, "Kitchen & Dining"),
            TaxonomyNode::leaf(2, 563, "Home Decor"),
            TaxonomyNode::leaf(2, 564, "Furniture"),
        ]),
        TaxonomyNode::root(3, "Clothing", vec![]),
        TaxonomyNode::root(4, "Art & Collectibles", vec![]),
        TaxonomyNode::root(5, "Craft Supplies & Tools", vec![]),
    ]
}

/// Properties are only registered for the necklace and kitchen nodes.
pub fn taxonomy_properties() -> HashMap<i64, Vec<TaxonomyNodeProperty>> {
    let mut chain_length = multivalued(101, "length", "Chain Length", &[
        (2001, "14 inches"),
        (2002, "16 inches"),
        (2003, "18 inches"),
        (2004, "20 inches"),
    ]);
    chain_length.is_multivalued = false;
    chain_length.supports_variations = true;
    let necklaces = vec![
        multivalued(100, "material", "Material", &[
            (1001, "Sterling Silver"),
            (1002, "Gold"),
            (1003, "Rose Gold"),
            (1004, "Brass"),
        ]),
        chain_length,
    ];
    let kitchen = vec![multivalued(200, "material", "Wood Type", &[
        (3001, "Walnut"),
        (3002, "Maple"),
        (3003, "Cherry"),
        (3004, "Oak"),
    ])];
    HashMap::from([(TAXONOMY_NECKLACES, necklaces), (TAXONOMY_KITCHEN, kitchen)])
}

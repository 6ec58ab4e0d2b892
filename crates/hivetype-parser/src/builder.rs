//! Recursive tree builder over grammar engine matches.

use hivetype_meta::{
    ArrayType, MapType, ParentRef, ScalarType, StructField, StructType, TypeMetadata,
};
use tracing::warn;

use crate::parser::{self, TypeParse};

/// Build a [`TypeMetadata`] tree for one type declaration.
///
/// Total: a string that does not match the grammar becomes an opaque scalar
/// node and a warning is logged, so callers always get a tree back. The input
/// is lower-cased before parsing and stored lower-cased on every node.
///
/// Recursion depth equals the nesting depth of the declaration; callers that
/// must survive adversarial inputs should bound nesting before calling.
pub fn parse_hive_type(type_str: &str, name: &str, parent: &ParentRef) -> TypeMetadata {
    let type_str = type_str.to_lowercase();

    let parsed = match parser::parse(&type_str) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(%type_str, %error, "could not parse type string, defaulting to scalar");
            return TypeMetadata::Scalar(ScalarType {
                name: name.to_string(),
                parent: parent.clone(),
                type_str,
            });
        }
    };

    match parsed {
        TypeParse::Scalar => TypeMetadata::Scalar(ScalarType {
            name: name.to_string(),
            parent: parent.clone(),
            type_str,
        }),
        TypeParse::Array { element } => {
            let node_ref = parent.child(name);
            let inner = parse_hive_type(element, "_inner_", &node_ref);
            // A bare scalar element stays collapsed into the array node.
            let element = if inner.is_scalar() {
                None
            } else {
                Some(Box::new(inner))
            };
            TypeMetadata::Array(ArrayType {
                name: name.to_string(),
                parent: parent.clone(),
                type_str,
                element,
            })
        }
        TypeParse::Map { key, value } => {
            let node_ref = parent.child(name);
            let key = Box::new(parse_hive_type(key, "_map_key", &node_ref));
            let value = Box::new(parse_hive_type(value, "_map_value", &node_ref));
            TypeMetadata::Map(MapType {
                name: name.to_string(),
                parent: parent.clone(),
                type_str,
                key,
                value,
            })
        }
        TypeParse::Struct { fields } => {
            let node_ref = parent.child(name);
            let mut built: Vec<StructField> = Vec::with_capacity(fields.len());
            for (sort_order, (field_name, field_type)) in fields.into_iter().enumerate() {
                let node = parse_hive_type(field_type, field_name, &node_ref);
                // A repeated field name keeps its first position but takes
                // the last declaration's node and sort order.
                match built.iter_mut().find(|f| f.name == field_name) {
                    Some(existing) => {
                        existing.sort_order = sort_order;
                        existing.field_type = node;
                    }
                    None => built.push(StructField {
                        name: field_name.to_string(),
                        sort_order,
                        field_type: node,
                    }),
                }
            }
            TypeMetadata::Struct(StructType {
                name: name.to_string(),
                parent: parent.clone(),
                type_str,
                fields: built,
            })
        }
    }
}

//! Type metadata tree for Hive-style complex type declarations.
//!
//! A parsed type string becomes an owned tree of [`TypeMetadata`] nodes.
//! Ownership is strictly top-down: a struct owns its fields, a map owns its
//! key/value nodes, an array owns its element node. Parent linkage is carried
//! as an opaque [`ParentRef`] key, never as a pointer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the record a type node is attached to: a column, or an
/// enclosing type node. Carried for attribution only and never dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentRef(String);

impl ParentRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive the identity of a node named `name` nested under this one.
    pub fn child(&self, name: &str) -> ParentRef {
        ParentRef(format!("{}/{}", self.0, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed type declaration.
///
/// `type_str` on every variant is the lower-cased source substring that
/// produced the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeMetadata {
    Scalar(ScalarType),
    Array(ArrayType),
    Map(MapType),
    Struct(StructType),
}

/// A leaf type: a bare (optionally parameterized) type name, or a
/// `uniontype<...>` kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarType {
    pub name: String,
    pub parent: ParentRef,
    pub type_str: String,
}

/// An `array<...>` type. `element` is `None` when the element is itself a
/// bare scalar; the declared element type is still recoverable from
/// `type_str`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayType {
    pub name: String,
    pub parent: ParentRef,
    pub type_str: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<TypeMetadata>>,
}

/// A `map<key,value>` type. Key and value are always present, even when
/// scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapType {
    pub name: String,
    pub parent: ParentRef,
    pub type_str: String,
    pub key: Box<TypeMetadata>,
    pub value: Box<TypeMetadata>,
}

/// A `struct<name:type,...>` type with fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructType {
    pub name: String,
    pub parent: ParentRef,
    pub type_str: String,
    pub fields: Vec<StructField>,
}

/// One struct field. `sort_order` is the field's 0-based declaration
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub sort_order: usize,
    pub field_type: TypeMetadata,
}

impl StructType {
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl TypeMetadata {
    pub fn name(&self) -> &str {
        match self {
            TypeMetadata::Scalar(s) => &s.name,
            TypeMetadata::Array(a) => &a.name,
            TypeMetadata::Map(m) => &m.name,
            TypeMetadata::Struct(s) => &s.name,
        }
    }

    pub fn parent(&self) -> &ParentRef {
        match self {
            TypeMetadata::Scalar(s) => &s.parent,
            TypeMetadata::Array(a) => &a.parent,
            TypeMetadata::Map(m) => &m.parent,
            TypeMetadata::Struct(s) => &s.parent,
        }
    }

    /// The lower-cased source text this node was parsed from.
    pub fn type_str(&self) -> &str {
        match self {
            TypeMetadata::Scalar(s) => &s.type_str,
            TypeMetadata::Array(a) => &a.type_str,
            TypeMetadata::Map(m) => &m.type_str,
            TypeMetadata::Struct(s) => &s.type_str,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeMetadata::Scalar(_))
    }
}

impl fmt::Display for TypeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(name: &str, parent: &ParentRef, type_str: &str) -> TypeMetadata {
        TypeMetadata::Scalar(ScalarType {
            name: name.to_string(),
            parent: parent.clone(),
            type_str: type_str.to_string(),
        })
    }

    #[test]
    fn test_parent_ref_child_keys() {
        let col = ParentRef::new("hive://gold.users/address");
        let node = col.child("_inner_");
        assert_eq!(node.as_str(), "hive://gold.users/address/_inner_");
        assert_eq!(node.child("city").as_str(), "hive://gold.users/address/_inner_/city");
    }

    #[test]
    fn test_struct_field_lookup() {
        let parent = ParentRef::new("c1");
        let node = parent.child("s");
        let meta = StructType {
            name: "s".to_string(),
            parent: parent.clone(),
            type_str: "struct<a:int,b:string>".to_string(),
            fields: vec![
                StructField {
                    name: "a".to_string(),
                    sort_order: 0,
                    field_type: scalar("a", &node, "int"),
                },
                StructField {
                    name: "b".to_string(),
                    sort_order: 1,
                    field_type: scalar("b", &node, "string"),
                },
            ],
        };

        assert_eq!(meta.field("b").unwrap().sort_order, 1);
        assert!(meta.field("missing").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let parent = ParentRef::new("c1");
        let node = parent.child("tags");
        let meta = TypeMetadata::Map(MapType {
            name: "tags".to_string(),
            parent: parent.clone(),
            type_str: "map<string,int>".to_string(),
            key: Box::new(scalar("_map_key", &node, "string")),
            value: Box::new(scalar("_map_value", &node, "int")),
        });

        let json = serde_json::to_string(&meta).unwrap();
        let parsed: TypeMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(meta, parsed);
    }

    #[test]
    fn test_collapsed_element_not_serialized() {
        let parent = ParentRef::new("c1");
        let meta = TypeMetadata::Array(ArrayType {
            name: "xs".to_string(),
            parent,
            type_str: "array<string>".to_string(),
            element: None,
        });

        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("element").is_none());
        assert_eq!(json["kind"], "array");
    }
}

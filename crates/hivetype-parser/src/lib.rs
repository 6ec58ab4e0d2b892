//! Grammar engine and tree builder for Hive type declaration strings.
//!
//! [`parse_hive_type`] turns a declaration such as
//! `struct<a:int,b:array<string>>` into an owned
//! [`hivetype_meta::TypeMetadata`] tree. Strings that do not match the
//! grammar degrade to an opaque scalar node rather than an error.

mod builder;
pub mod parser;

pub use builder::parse_hive_type;
pub use parser::{ParseError, TypeParse};

#[cfg(test)]
mod tests {
    use super::*;
    use hivetype_meta::ParentRef;

    #[test]
    fn test_parse_basic() {
        let column = ParentRef::new("hive://gold.users/tags");
        let tree = parse_hive_type("array<string>", "type", &column);
        assert_eq!(tree.type_str(), "array<string>");
        assert_eq!(tree.name(), "type");
        assert_eq!(tree.parent(), &column);
    }
}

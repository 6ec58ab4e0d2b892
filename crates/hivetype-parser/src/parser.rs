//! Pest-based grammar engine for Hive type declarations.

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "hive_type.pest"]
pub struct HiveTypeParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Pest error: {0}")]
    Pest(#[from] pest::error::Error<Rule>),
}

/// Which top-level category matched, with the raw sub-spans the tree builder
/// recurses on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParse<'a> {
    Scalar,
    Array { element: &'a str },
    Map { key: &'a str, value: &'a str },
    Struct { fields: Vec<(&'a str, &'a str)> },
}

/// Match `input` against the full type grammar.
///
/// The whole input must be consumed; trailing characters are a parse failure
/// with no partial result. Captured spans are raw source text.
pub fn parse(input: &str) -> Result<TypeParse<'_>, ParseError> {
    let mut pairs = HiveTypeParser::parse(Rule::complex_type, input)?;
    let root = pairs
        .next()
        .ok_or_else(|| ParseError::Syntax("Empty parse result".to_string()))?;
    let matched = root
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::Syntax("Empty parse result".to_string()))?;

    match matched.as_rule() {
        Rule::scalar_type => Ok(TypeParse::Scalar),
        Rule::array_type => {
            let element = matched.into_inner().next().unwrap().as_str();
            Ok(TypeParse::Array { element })
        }
        Rule::map_type => {
            let mut inner = matched.into_inner();
            let key = inner.next().unwrap().as_str();
            let value = inner.next().unwrap().as_str();
            Ok(TypeParse::Map { key, value })
        }
        Rule::struct_type => {
            let fields = matched
                .into_inner()
                .map(|field| {
                    let mut inner = field.into_inner();
                    let name = inner.next().unwrap().as_str();
                    let field_type = inner.next().unwrap().as_str();
                    (name, field_type)
                })
                .collect();
            Ok(TypeParse::Struct { fields })
        }
        // The top-level alternation is exhaustive; reaching this means the
        // grammar and the engine have fallen out of sync.
        rule => unreachable!("complex_type matched unexpected rule {:?}", rule),
    }
}

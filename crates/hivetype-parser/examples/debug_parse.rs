use hivetype_parser::parser::{HiveTypeParser, Rule};
use pest::Parser;

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "struct<a:int,b:array<string>>".to_string());
    match HiveTypeParser::parse(Rule::complex_type, &input) {
        Ok(pairs) => {
            for pair in pairs {
                print_pair(&pair, 0);
            }
        }
        Err(e) => println!("Error: {:?}", e),
    }
}

fn print_pair(pair: &pest::iterators::Pair<Rule>, indent: usize) {
    let indent_str = "  ".repeat(indent);
    println!("{}Rule::{:?} = {:?}", indent_str, pair.as_rule(), pair.as_str());
    for inner in pair.clone().into_inner() {
        print_pair(&inner, indent + 1);
    }
}

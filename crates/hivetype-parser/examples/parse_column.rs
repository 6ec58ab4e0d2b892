//! Build metadata trees for a handful of column type declarations and print
//! them as JSON. The last declaration is malformed and demonstrates the
//! fallback-to-scalar warning.

use hivetype_meta::ParentRef;
use hivetype_parser::parse_hive_type;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let column = ParentRef::new("hive://gold.users/profile");
    for type_str in [
        "struct<name:string,tags:array<string>,scores:map<string,double>>",
        "array<struct<a:int,b:decimal(10,2)>>",
        "uniontype<int,string>",
        "struct<oops",
    ] {
        let tree = parse_hive_type(type_str, "type", &column);
        println!("{}", serde_json::to_string_pretty(&tree).unwrap());
    }
}

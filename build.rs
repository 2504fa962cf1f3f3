fn main() {
    // Validate the embedded dictionary at compile time.
    println!("cargo:rerun-if-changed=src/table/hepburn.toml");
    validate_toml(
        "src/table/hepburn.toml",
        include_str!("src/table/hepburn.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let table = match toml::from_str::<toml::Table>(content) {
        Ok(table) => table,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    if table.get("mappings").and_then(|m| m.as_table()).is_none() {
        panic!("{path} has no [mappings] table");
    }
}

use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The list defaults must be usable as-is by the parser
    for (section, key) in [("render", "indent"), ("list", "closure"), ("list", "style")] {
        let present = table
            .get(section)
            .and_then(|s| s.get(key))
            .is_some_and(|v| v.is_str());
        if !present {
            panic!("default_config.toml is missing string {}.{}", section, key);
        }
    }
}

//! CLI command implementations for `dictbuild`.

use std::fs;
use std::path::Path;
use std::process;

use crate::encoder::DockerDawgEncoder;
use crate::manifest;
use crate::pipeline::{self, BuildConfig};
use crate::translit::{self, TranslitTable};
use crate::wordlist;

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn load_table(table_file: Option<&str>) -> TranslitTable {
    match table_file {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(TranslitTable::from_toml(&content), "Error: {}")
        }
        None => TranslitTable::default(),
    }
}

fn config_with_name(input_dir: &str, output_dir: &str, name: &str) -> BuildConfig {
    let mut config = BuildConfig::new(input_dir, output_dir);
    config.output_name = name.to_string();
    config
}

pub fn build(
    input_dir: &str,
    output_dir: &str,
    name: &str,
    table_file: Option<&str>,
    image: &str,
    context: Option<&str>,
) {
    let table = load_table(table_file);
    let config = config_with_name(input_dir, output_dir, name);
    let encoder = DockerDawgEncoder::new(image, context.unwrap_or(input_dir));

    let manifest = die!(pipeline::run(&config, &table, &encoder), "Error: {}");
    eprintln!(
        "Done: {} wordlists, manifest at {}",
        manifest.wordlists.len(),
        Path::new(output_dir).join(manifest::MANIFEST_FILENAME).display()
    );
}

pub fn text(input_dir: &str, output_dir: &str, name: &str, table_file: Option<&str>) {
    let table = load_table(table_file);
    let config = config_with_name(input_dir, output_dir, name);

    let built = die!(wordlist::build_all(&config, &table), "Error: {}");
    let total: usize = built.iter().map(|list| list.words).sum();
    eprintln!("Wrote {} wordlists ({total} words)", built.len());
}

pub fn encode(output_dir: &str, image: &str, context: &str) {
    use crate::encoder::DawgEncoder;

    eprintln!("Creating DAWGs...");
    let encoder = DockerDawgEncoder::new(image, context);
    die!(encoder.encode(Path::new(output_dir)), "Error: {}");
    eprintln!("Done creating DAWGs");
}

pub fn manifest_cmd(output_dir: &str, name: &str, table_file: Option<&str>) {
    let table = load_table(table_file);
    let output_dir = Path::new(output_dir);

    let manifest = die!(manifest::build(output_dir, &table, name), "Error: {}");
    let path = die!(manifest::write(&manifest, output_dir), "Error: {}");
    eprintln!(
        "Wrote {} ({} wordlists)",
        path.display(),
        manifest.wordlists.len()
    );
}

pub fn translit(text: &str, table_file: Option<&str>) {
    let table = load_table(table_file);
    println!("{}", table.transliterate(text));
}

pub fn table_export() {
    print!("{}", translit::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(translit::parse_table_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

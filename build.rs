use std::env;
use std::fs;
use std::path::Path;

#[path = "build_support/env.rs"]
mod build_env;

use build_env::{parse_dotenv, resolve, ALIASES};

fn main() {
    let env_file = Path::new(".env");

    let dotenv = if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        fs::read_to_string(env_file)
            .map(|contents| parse_dotenv(&contents))
            .unwrap_or_default()
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and configure API_URL / CLIENT_ID.");
        Vec::new()
    };

    for (key, value) in resolve(&dotenv, |key| env::var(key).ok()) {
        println!("cargo:rustc-env={}={}", key, value);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support/env.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for (alias, canonical) in ALIASES {
        println!("cargo:rerun-if-env-changed={}", alias);
        println!("cargo:rerun-if-env-changed={}", canonical);
    }
}

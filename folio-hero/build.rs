use std::env;
use std::fs;
use std::path::Path;

/// Written when `fixtures/marquee.json` is absent so the app still builds.
const FALLBACK_MARQUEE_JSON: &str = r#"{
  "content": [
    {"segments": [{"kind": "text", "text": "Portfolio coming together"}, {"kind": "text", "text": " ✦ "}]},
    {"segments": [{"kind": "text", "text": "Check back soon"}, {"kind": "text", "text": " ✦ "}]}
  ],
  "marquee": {"velocity": 60, "num_copies": 12}
}"#;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("marquee.json");

    // Copy marquee.json to OUT_DIR for include_str, checking it is at least
    // well-formed JSON so a broken fixture fails the build rather than the page.
    let src = Path::new("../fixtures/marquee.json");
    if src.exists() {
        let json = fs::read_to_string(src).expect("Failed to read marquee.json");
        if let Err(err) = serde_json::from_str::<serde_json::Value>(&json) {
            panic!("fixtures/marquee.json is not valid JSON: {err}");
        }
        fs::write(&dest, json).unwrap();
    } else {
        fs::write(&dest, FALLBACK_MARQUEE_JSON).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/marquee.json");
}

mod common;

use common::{welcome_site, TestEnv};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn passing_run_matches_contract() {
    let env = welcome_site();
    let (out, code) = env.run_json(&["run"]);
    validate("run.schema.json", &out);

    assert_eq!(code, 0);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["overall_passed"], true);
    let suites = out["data"]["suites"].as_array().unwrap();
    assert_eq!(suites.len(), 2);
    assert_eq!(suites[0]["suite"], "greeting");
    assert_eq!(suites[0]["file"], "index.html");
    assert_eq!(suites[1]["suite"], "goodbye");
    assert_eq!(suites[1]["file"], "goodbye.html");
}

#[test]
fn failing_checks_keep_declaration_order() {
    let env = TestEnv::new();
    env.write("index.html", "Hello and Welcome");
    let (out, code) = env.run_json(&["run", "greeting"]);
    validate("run.schema.json", &out);

    assert_eq!(code, 1);
    assert_eq!(out["ok"], false);
    let checks = out["data"]["suites"][0]["report"]["checks"].as_array().unwrap();
    let names: Vec<&str> = checks.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["has_greeting", "no_hello"]);
    assert_eq!(checks[0]["passed"], true);
    assert_eq!(checks[1]["passed"], false);
}

#[test]
fn missing_file_contract_has_no_checks() {
    let env = TestEnv::new();
    let (out, code) = env.run_json(&["run", "greeting"]);
    validate("run.schema.json", &out);

    assert_eq!(code, 1);
    let suite = &out["data"]["suites"][0];
    assert_eq!(suite["existence"]["passed"], false);
    assert_eq!(suite["report"]["file_exists"], false);
    assert_eq!(suite["report"]["checks"].as_array().unwrap().len(), 0);
    assert_eq!(suite["report"]["overall_passed"], false);
}

#[test]
fn repeated_json_runs_are_identical() {
    let env = welcome_site();
    let (first, _) = env.run_json(&["run"]);
    let (second, _) = env.run_json(&["run"]);
    assert_eq!(first, second);
}

#[test]
fn list_json_envelope() {
    let env = TestEnv::new();
    let (out, code) = env.run_json(&["list"]);
    assert_eq!(code, 0);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"][0]["name"], "greeting");
    assert_eq!(out["data"][0]["file"], "index.html");
}

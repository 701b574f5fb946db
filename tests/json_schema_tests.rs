//! JSON Schemas for the CLI outputs, checked against real output.

use personagen::json_schema::{all_schemas, get_schema, schema_names};
use personagen::output::BatchOutput;
use personagen::{centroid, generate_batch, BatchPlan, GenerationContext};
use serde_json::Value;

fn properties(schema: &Value) -> Vec<String> {
    let mut keys: Vec<String> = schema["properties"]
        .as_object()
        .expect("schema has properties")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn required(schema: &Value) -> Vec<String> {
    let mut keys: Vec<String> = schema["required"]
        .as_array()
        .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[test]
fn test_all_schemas_listed() {
    assert_eq!(schema_names(), vec!["batch", "bench", "record"]);
    assert_eq!(all_schemas().len(), 3);
}

#[test]
fn test_record_schema_matches_output() {
    let schema = serde_json::to_value(get_schema("record").unwrap()).unwrap();
    let ctx = GenerationContext::builtin().unwrap();
    let record = ctx
        .generate(&personagen::GenerationRequest::new("de_DE", 1, 1, 0))
        .unwrap();
    let json = serde_json::to_value(&record).unwrap();

    let mut keys: Vec<String> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(properties(&schema), keys);
    assert_eq!(required(&schema), keys);
}

#[test]
fn test_gender_schema_is_enum() {
    let schema = serde_json::to_string(&get_schema("record").unwrap()).unwrap();
    assert!(schema.contains("\"male\""));
    assert!(schema.contains("\"female\""));
}

#[test]
fn test_batch_schema_matches_output() {
    let schema = serde_json::to_value(get_schema("batch").unwrap()).unwrap();
    let ctx = GenerationContext::builtin().unwrap();
    let plan = BatchPlan::new("en_US", 1, 1, 3);
    let records = generate_batch(&ctx, &plan).unwrap();
    let output = BatchOutput {
        locale: plan.locale.clone(),
        seed: plan.seed,
        batch: plan.batch,
        batch_size: plan.batch_size,
        centroid: centroid(&records),
        records,
    };
    let json = serde_json::to_value(&output).unwrap();
    let mut keys: Vec<String> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(properties(&schema), keys);
}

#[test]
fn test_bench_schema_fields() {
    let schema = serde_json::to_value(get_schema("bench").unwrap()).unwrap();
    let props = properties(&schema);
    assert!(props.contains(&"records_per_sec".to_string()));
    assert!(props.contains(&"elapsed_secs".to_string()));
}

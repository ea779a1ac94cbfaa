//! Schema-compliance rule behavior through the full pipeline, including the
//! override-URL fetch and its fallback.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use oaslint::document::OpenApiParser;
use oaslint::rule::rules::{default_rule_sets, default_rules};
use oaslint::rule::{RulesManager, RulesPolicy, RulesValidator};
use oaslint::schema::SchemaRuleConfig;
use serde_json::json;

fn validator_with(config: &SchemaRuleConfig) -> RulesValidator {
    let manager = Arc::new(RulesManager::new(
        &default_rule_sets(),
        default_rules(config),
    ));
    RulesValidator::new(manager, OpenApiParser::new())
}

const MINIMAL_SWAGGER: &str = r#"{
  "swagger": "2.0",
  "info": {"title": "Pets", "version": "1.0.0"},
  "paths": {}
}"#;

#[test]
fn override_schema_replaces_the_bundled_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/swagger-schema.json");
        then.status(200).json_body(json!({
            "type": "object",
            "required": ["swagger", "basePath"]
        }));
    });

    let config = SchemaRuleConfig {
        schema_url: Some(server.url("/swagger-schema.json")),
        ..Default::default()
    };
    let results = validator_with(&config)
        .validate(MINIMAL_SWAGGER, &RulesPolicy::allow_all(), None)
        .unwrap();

    // The document satisfies the bundled schema but not the override.
    assert!(results
        .iter()
        .any(|r| r.rule.identity.id == "101" && r.description.contains("'basePath'")));
}

#[test]
fn unreachable_override_falls_back_to_bundled_schema() {
    let config = SchemaRuleConfig {
        schema_url: Some("http://127.0.0.1:9/swagger-schema.json".to_string()),
        timeout: Duration::from_millis(200),
    };
    let results = validator_with(&config)
        .validate(MINIMAL_SWAGGER, &RulesPolicy::allow_all(), None)
        .unwrap();

    // Bundled schema accepts the document; no schema violations.
    assert!(
        !results.iter().any(|r| r.rule.identity.id == "101"),
        "unexpected results: {results:?}"
    );
}

#[test]
fn bundled_schema_resolves_meta_schema_references() {
    // response.schema points at the draft-04 meta-schema, which resolves to
    // the bundled copy rather than the network.
    let content = r#"{
      "swagger": "2.0",
      "info": {"title": "Pets", "version": "1.0.0"},
      "paths": {
        "/pets": {
          "get": {
            "responses": {
              "200": {
                "description": "ok",
                "schema": {"type": "array", "items": {"type": "string"}}
              }
            }
          }
        }
      }
    }"#;
    let results = validator_with(&SchemaRuleConfig::default())
        .validate(content, &RulesPolicy::allow_all(), None)
        .unwrap();
    assert!(results.is_empty(), "unexpected results: {results:?}");
}

#[test]
fn schema_violation_points_into_the_document() {
    let content = r#"{
      "swagger": "2.0",
      "info": {"title": "Pets", "version": "1.0.0"},
      "paths": {
        "/pets": {
          "get": {}
        }
      }
    }"#;
    let results = validator_with(&SchemaRuleConfig::default())
        .validate(content, &RulesPolicy::allow_all(), None)
        .unwrap();

    let result = results
        .iter()
        .find(|r| r.rule.identity.id == "101")
        .expect("schema violation missing");
    assert!(result.pointer.as_str().starts_with("/paths/~1pets/get"));
    assert!(result.description.contains("'responses'"));
}

//! Schema loading.
//!
//! Builds the [`JsonSchemaValidator`] the schema-compliance rule wraps. An
//! optional externally configured schema URL can override the bundled
//! default; fetching it is a single best-effort attempt made once at rule
//! construction. Any failure falls back to the bundled schema with a
//! warning, never a call failure: infrastructure problems with an optional
//! override must not take down the baseline check.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use include_dir::{include_dir, Dir};
use serde_json::Value;

use super::validator::JsonSchemaValidator;

static SCHEMAS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources/schemas");

/// The well-known meta-schema URL the bundled Swagger schema references;
/// redirected to the bundled copy to avoid a network fetch.
const DRAFT4_SCHEMA_URL: &str = "http://json-schema.org/draft-04/schema";

/// Configuration for the schema-compliance rule.
#[derive(Debug, Clone)]
pub struct SchemaRuleConfig {
    /// Optional URL overriding the bundled Swagger schema.
    pub schema_url: Option<String>,
    /// Request timeout for the override fetch.
    pub timeout: Duration,
}

impl Default for SchemaRuleConfig {
    fn default() -> Self {
        Self {
            schema_url: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Build the validator for the schema-compliance rule.
///
/// Uses the configured override URL when one is set and reachable, the
/// bundled schema otherwise.
pub fn load_validator(config: &SchemaRuleConfig) -> JsonSchemaValidator {
    if let Some(url) = &config.schema_url {
        match fetch_schema(url, config.timeout) {
            Ok(schema) => {
                tracing::info!(url, "using override schema");
                return JsonSchemaValidator::with_redirects(schema, bundled_redirects());
            }
            Err(err) => {
                tracing::warn!(
                    url,
                    error = %err,
                    "unable to load override schema, falling back to bundled schema"
                );
            }
        }
    }
    bundled_validator()
}

/// The validator over the bundled Swagger 2.0 schema.
pub fn bundled_validator() -> JsonSchemaValidator {
    JsonSchemaValidator::with_redirects(bundled_schema("swagger-schema.json"), bundled_redirects())
}

fn bundled_redirects() -> HashMap<String, Value> {
    let mut redirects = HashMap::new();
    redirects.insert(
        DRAFT4_SCHEMA_URL.to_string(),
        bundled_schema("json-schema.json"),
    );
    redirects
}

fn bundled_schema(name: &str) -> Value {
    let file = SCHEMAS
        .get_file(name)
        .unwrap_or_else(|| panic!("bundled schema '{name}' missing from build"));
    serde_json::from_slice(file.contents())
        .unwrap_or_else(|err| panic!("bundled schema '{name}' is not valid JSON: {err}"))
}

fn fetch_schema(url: &str, timeout: Duration) -> Result<Value> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {url}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
    }

    response
        .json::<Value>()
        .with_context(|| format!("Failed to read schema from {url}"))
}

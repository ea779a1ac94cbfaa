//! Rule discovery and dispatch.
//!
//! This module is the engine of the checker: it registers rule
//! implementations with their metadata, discovers each rule's checkable
//! operations, invokes them against a parsed document, normalizes the
//! outcomes into violations, applies the exclusion policy, and produces a
//! deterministically ordered result list.
//!
//! # Overview
//!
//! - **Rules** - checkable-operation tables behind the [`Rule`] trait
//! - **Registry** - the immutable [`RulesManager`] built once at startup
//! - **Invocation** - [`RuleInvoker`] with strict return-shape contracts
//! - **Orchestration** - [`RulesValidator`], the external entry point
//!
//! # Example
//!
//! ```
//! use oaslint::rule::{RulesManager, RulesPolicy, Severity};
//! use oaslint::rule::rules::{default_rule_sets, default_rules};
//! use oaslint::schema::SchemaRuleConfig;
//!
//! let manager = RulesManager::new(
//!     &default_rule_sets(),
//!     default_rules(&SchemaRuleConfig::default()),
//! );
//! assert!(manager.get("101").is_some());
//! assert!(Severity::Should < Severity::Must);
//! ```

pub mod check;
pub mod invoker;
pub mod manager;
pub mod policy;
#[allow(clippy::module_inception)]
pub mod rule;
pub mod rules;
pub mod severity;
pub mod validator;
pub mod violation;

pub use check::{CheckContext, CheckDescriptor, CheckFn, CheckInputs, CheckOutcome};
pub use invoker::{RuleInvoker, TaggedViolation};
pub use manager::RulesManager;
pub use policy::RulesPolicy;
pub use rule::{Rule, RuleBinding, RuleDetails, RuleIdentity, RuleMetadata, RuleSet};
pub use severity::Severity;
pub use validator::{NoopIgnorer, RuleResult, RulesValidator, ViolationIgnorer};
pub use violation::Violation;

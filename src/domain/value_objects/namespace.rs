//! Well-known namespace, directive and attribute keys
//!
//! Only the keys the diagnostic renderings and the builder rely on. The crate
//! never interprets what a namespace means to a resolver.

/// Directive holding the LDAP-style filter of a requirement
pub const REQUIREMENT_FILTER_DIRECTIVE: &str = "filter";
/// Directive selecting mandatory or optional resolution
pub const REQUIREMENT_RESOLUTION_DIRECTIVE: &str = "resolution";
/// Directive selecting single or multiple cardinality
pub const REQUIREMENT_CARDINALITY_DIRECTIVE: &str = "cardinality";
/// Directive naming the effective time of a capability/requirement
pub const EFFECTIVE_DIRECTIVE: &str = "effective";
/// Directive listing packages a capability uses
pub const CAPABILITY_USES_DIRECTIVE: &str = "uses";

pub const RESOLUTION_MANDATORY: &str = "mandatory";
pub const RESOLUTION_OPTIONAL: &str = "optional";
pub const CARDINALITY_SINGLE: &str = "single";
pub const CARDINALITY_MULTIPLE: &str = "multiple";
pub const EFFECTIVE_RESOLVE: &str = "resolve";
pub const EFFECTIVE_ACTIVE: &str = "active";

pub const IDENTITY_NAMESPACE: &str = "osgi.identity";
pub const PACKAGE_NAMESPACE: &str = "osgi.wiring.package";
pub const BUNDLE_NAMESPACE: &str = "osgi.wiring.bundle";
pub const HOST_NAMESPACE: &str = "osgi.wiring.host";
pub const SERVICE_NAMESPACE: &str = "osgi.service";
pub const EXTENDER_NAMESPACE: &str = "osgi.extender";
pub const EXECUTION_ENVIRONMENT_NAMESPACE: &str = "osgi.ee";

/// Conventional attribute carrying a capability's version
pub const VERSION_ATTRIBUTE: &str = "version";

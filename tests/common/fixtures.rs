//! Test fixtures - reusable manifest constants for tests.

/// One resource exporting a package and importing another optionally
pub const API_MANIFEST: &str = r#"
[[resource]]
id = "com.example.api"

[[resource.capability]]
namespace = "osgi.wiring.package"
attributes = { "osgi.wiring.package" = "com.example", "version:Version" = "1.2.0" }
directives = { uses = "com.example.util" }

[[resource.requirement]]
namespace = "osgi.wiring.package"
directives = { filter = "(osgi.wiring.package=com.example.util)", resolution = "optional" }
"#;

/// The same capability declared twice, plus one distinct requirement
pub const DUPLICATED_MANIFEST: &str = r#"
[[resource]]
id = "com.example.impl"

[[resource.capability]]
namespace = "osgi.service"
attributes = { "osgi.service" = "com.example.Greeter" }

[[resource.capability]]
namespace = "osgi.service"
attributes = { "osgi.service" = "com.example.Greeter" }

[[resource.requirement]]
namespace = "osgi.ee"
directives = { filter = "(osgi.ee=JavaSE)" }
"#;

/// One good declaration and one with no namespace
pub const PARTLY_BROKEN_MANIFEST: &str = r#"
[[resource]]
id = "com.example.broken"

[[resource.capability]]
namespace = "osgi.identity"
attributes = { "osgi.identity" = "com.example.broken" }

[[resource.requirement]]
directives = { filter = "(osgi.identity=missing.namespace)" }
"#;

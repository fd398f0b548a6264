//! Classification of dependency declarations against the host catalog
//!
//! Only the host's default version of a module is considered: the target
//! runtime serves exactly one version per unscoped name, so any declaration
//! that version cannot satisfy is bundled with the program.
//!
//! Declarations are processed in order and independently:
//! - a satisfied declaration adds the name to `externals` (never removed)
//! - an unsatisfied one overwrites the name's entry in `bundled`
//!
//! The same name may therefore end up in both maps.

use log::{debug, trace, warn};

use crate::catalog::ModuleCatalog;
use crate::domain::{ClassificationResult, DependencyDeclaration};
use crate::range::{VersionRange, parse_version};

/// Whether the host's default version satisfies `spec`
fn default_version_satisfies(name: &str, default_version: &str, spec: &str) -> bool {
    let version = match parse_version(default_version) {
        Ok(version) => version,
        Err(e) => {
            warn!("Host version of '{name}' is unusable, bundling instead: {e}");
            return false;
        }
    };

    match VersionRange::parse(spec) {
        Ok(range) => range.matches(&version),
        Err(e) => {
            warn!("Range for '{name}' cannot be evaluated, bundling instead: {e}");
            false
        }
    }
}

/// Partition `dependencies` into externals and bundled modules
pub fn classify(
    dependencies: &[DependencyDeclaration],
    catalog: &ModuleCatalog,
) -> ClassificationResult {
    let mut result = ClassificationResult::seeded(catalog.native.iter().cloned());

    for dependency in dependencies {
        let name = dependency.name.as_str();
        let spec = dependency.effective_spec();
        let available = catalog.available(name);

        let satisfied = catalog
            .default_version(name)
            .is_some_and(|default| default_version_satisfies(name, default, spec));

        if satisfied {
            trace!("{name}@{spec}: external");
            result.mark_external(name);
        } else {
            trace!("{name}@{spec}: bundled (host offers {available:?})");
            result.mark_bundled(name, available.map(<[String]>::to_vec), spec);
        }
    }

    debug!(
        "Classified {} declaration(s): {} external, {} bundled",
        dependencies.len(),
        result.externals.len(),
        result.bundled.len()
    );

    result
}

use super::package_filter::PackageFilter;
use tracing::debug;

const FILE_PROTOCOL: &str = "file:";

/// Decides whether a lockfile entry is left out of the audit payload.
///
/// The builder consults the policy with the normalized package name and the
/// entry's version after the dev-dependency check. Closures of the shape
/// `Fn(&str, &str) -> bool` implement it directly.
pub trait SkipPolicy {
    fn should_skip(&self, name: &str, version: &str) -> bool;

    /// Sees entries the builder drops as dev dependencies; `should_skip` is
    /// not called for those.
    fn observe_dev_skip(&self, _name: &str, _version: &str) {}
}

impl<F> SkipPolicy for F
where
    F: Fn(&str, &str) -> bool,
{
    fn should_skip(&self, name: &str, version: &str) -> bool {
        self(name, version)
    }
}

/// Default skip rules for npm lockfiles.
///
/// Skips entries the audit service cannot resolve:
/// - the root project entry (`""` key of a `packages` table);
/// - local references such as `file:../lib`, `./vendor/pkg`, `~/src/pkg`
///   or `/opt/pkg`;
/// - names matched by the optional exclusion filter.
#[derive(Debug, Default)]
pub struct NodeSkipPolicy {
    exclusions: Option<PackageFilter>,
}

impl NodeSkipPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclusions(exclusions: PackageFilter) -> Self {
        Self {
            exclusions: Some(exclusions),
        }
    }

    pub fn exclusions(&self) -> Option<&PackageFilter> {
        self.exclusions.as_ref()
    }
}

impl SkipPolicy for NodeSkipPolicy {
    fn should_skip(&self, name: &str, version: &str) -> bool {
        if name.is_empty() {
            return true;
        }
        if is_local_reference(version) {
            debug!(name, version, "skipping local package reference");
            return true;
        }
        match &self.exclusions {
            Some(filter) if filter.matches(name) => {
                debug!(name, "skipping excluded package");
                true
            }
            _ => false,
        }
    }

    /// Dev entries still count as matches for the exclusion filter, so a
    /// pattern aimed at dev tooling is not reported as unmatched.
    fn observe_dev_skip(&self, name: &str, _version: &str) {
        if let Some(filter) = &self.exclusions {
            filter.matches(name);
        }
    }
}

/// `file:` specs and paths: any run of '.' or '~' followed by '/' and at
/// least one more character.
fn is_local_reference(version: &str) -> bool {
    if version.starts_with(FILE_PROTOCOL) {
        return true;
    }
    let rest = version.trim_start_matches(['.', '~']);
    rest.len() > 1 && rest.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_versions_are_kept() {
        let policy = NodeSkipPolicy::new();
        assert!(!policy.should_skip("lodash", "4.17.21"));
        assert!(!policy.should_skip("@babel/core", "7.23.0"));
        assert!(!policy.should_skip("lodash", ""));
    }

    #[test]
    fn test_root_entry_is_skipped() {
        let policy = NodeSkipPolicy::new();
        assert!(policy.should_skip("", "1.0.0"));
    }

    #[test]
    fn test_file_protocol_is_skipped() {
        let policy = NodeSkipPolicy::new();
        assert!(policy.should_skip("local-lib", "file:../local-lib"));
        assert!(policy.should_skip("local-lib", "file:local-lib-1.0.0.tgz"));
    }

    #[test]
    fn test_path_versions_are_skipped() {
        let policy = NodeSkipPolicy::new();
        assert!(policy.should_skip("a", "./vendor/a"));
        assert!(policy.should_skip("a", "../a"));
        assert!(policy.should_skip("a", "~/src/a"));
        assert!(policy.should_skip("a", "/opt/a"));
    }

    #[test]
    fn test_bare_separators_are_not_paths() {
        assert!(!is_local_reference("/"));
        assert!(!is_local_reference("./"));
        assert!(!is_local_reference("~"));
        assert!(!is_local_reference("1.0.0/"));
    }

    #[test]
    fn test_exclusions_are_applied() {
        let filter = PackageFilter::new(vec!["@types/*".to_string()]).unwrap();
        let policy = NodeSkipPolicy::with_exclusions(filter);
        assert!(policy.should_skip("@types/node", "20.0.0"));
        assert!(!policy.should_skip("react", "18.2.0"));
        assert!(policy.exclusions().unwrap().unmatched_patterns().is_empty());
    }

    #[test]
    fn test_dev_skipped_names_mark_exclusions_matched() {
        let filter =
            PackageFilter::new(vec!["@types/*".to_string(), "left-pad".to_string()]).unwrap();
        let policy = NodeSkipPolicy::with_exclusions(filter);

        policy.observe_dev_skip("@types/react", "18.2.45");

        assert_eq!(
            policy.exclusions().unwrap().unmatched_patterns(),
            vec!["left-pad".to_string()]
        );
    }

    #[test]
    fn test_closure_as_policy() {
        let policy = |name: &str, _version: &str| name.starts_with("internal-");
        assert!(policy.should_skip("internal-utils", "1.0.0"));
        assert!(!policy.should_skip("lodash", "4.17.21"));
    }
}

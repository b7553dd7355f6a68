//! Static partition of request paths into public and protected.

use socia_core::config::RouteConfig;

/// Access policy of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Rendered regardless of session state.
    Public,
    /// Requires a valid, unexpired session.
    Protected,
}

/// Prefix table that maps every path to exactly one [`RouteClass`].
///
/// Exempt prefixes are checked first and are always public; then protected
/// prefixes; everything else is public. A prefix matches the path itself or
/// any path below it (`/dashboard` matches `/dashboard/leads` but not
/// `/dashboards`).
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected: Vec<String>,
    exempt: Vec<String>,
}

impl RouteTable {
    /// Creates a table from explicit prefix lists.
    pub fn new(
        protected: impl IntoIterator<Item = impl Into<String>>,
        exempt: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            protected: protected.into_iter().map(normalize_prefix).collect(),
            exempt: exempt.into_iter().map(normalize_prefix).collect(),
        }
    }

    /// Creates a table from the `[routes]` configuration section.
    pub fn from_config(config: &RouteConfig) -> Self {
        Self::new(
            config.protected_prefixes.iter().cloned(),
            config.exempt_prefixes.iter().cloned(),
        )
    }

    /// Classifies a request path.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.exempt.iter().any(|p| prefix_matches(p, path)) {
            return RouteClass::Public;
        }
        if self.protected.iter().any(|p| prefix_matches(p, path)) {
            return RouteClass::Protected;
        }
        RouteClass::Public
    }
}

fn normalize_prefix(prefix: impl Into<String>) -> String {
    let prefix = prefix.into();
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> RouteTable {
        RouteTable::from_config(&RouteConfig::default())
    }

    #[test]
    fn test_default_partition() {
        let table = default_table();
        assert_eq!(table.classify("/"), RouteClass::Public);
        assert_eq!(table.classify("/login"), RouteClass::Public);
        assert_eq!(table.classify("/dashboard"), RouteClass::Protected);
        assert_eq!(table.classify("/dashboard/"), RouteClass::Protected);
        assert_eq!(table.classify("/dashboard/clients"), RouteClass::Protected);
        assert_eq!(table.classify("/dashboard/clients/9"), RouteClass::Protected);
    }

    #[test]
    fn test_segment_boundary() {
        let table = default_table();
        assert_eq!(table.classify("/dashboards"), RouteClass::Public);
        assert_eq!(table.classify("/dashboard-old"), RouteClass::Public);
    }

    #[test]
    fn test_exempt_wins_over_protected() {
        let table = RouteTable::new(["/api/admin"], ["/api"]);
        assert_eq!(table.classify("/api/admin/users"), RouteClass::Public);
    }

    #[test]
    fn test_trailing_slash_in_prefix_is_ignored() {
        let table = RouteTable::new(["/dashboard/"], Vec::<String>::new());
        assert_eq!(table.classify("/dashboard"), RouteClass::Protected);
        assert_eq!(table.classify("/dashboard/ads"), RouteClass::Protected);
    }

    #[test]
    fn test_root_prefix_protects_everything_not_exempt() {
        let table = RouteTable::new(["/"], ["/login"]);
        assert_eq!(table.classify("/anything"), RouteClass::Protected);
        assert_eq!(table.classify("/login"), RouteClass::Public);
    }
}

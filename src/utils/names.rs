use uuid::Uuid;

/// Generates a fresh name for a deployment.
///
/// Hyphenated v4 UUIDs already fit the RFC 1123 label rules Kubernetes
/// enforces on resource names (lowercase alphanumerics and `-`, at most 63
/// characters, alphanumeric at both ends); lowercasing keeps that true
/// independent of the formatting the `uuid` crate picks.
pub fn generate_workload_name() -> String {
    Uuid::new_v4().to_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use regex::Regex;

    use crate::utils::names::generate_workload_name;

    #[test]
    fn names_are_valid_kubernetes_labels() {
        let label = Regex::new("^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap();

        for _ in 0..1000 {
            let name = generate_workload_name();

            assert!(name.len() <= 63);
            assert!(label.is_match(&name), "invalid name: {}", name);
        }
    }

    #[test]
    fn names_do_not_collide() {
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            assert!(seen.insert(generate_workload_name()));
        }
    }
}

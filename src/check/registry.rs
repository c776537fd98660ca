//! Checker registry.
//!
//! The [`CheckerRegistry`] is a statically compiled, ordered list of checker
//! factories for one subject kind. Registration order is execution order.

use super::checker::Check;

/// Builds a checker for a subject.
pub type CheckerFactory<S> = for<'s> fn(&'s S) -> Box<dyn Check + 's>;

/// One registered checker.
pub struct CheckerEntry<S: ?Sized> {
    name: &'static str,
    build: CheckerFactory<S>,
}

impl<S: ?Sized> CheckerEntry<S> {
    /// Create an entry.
    pub fn new(name: &'static str, build: CheckerFactory<S>) -> Self {
        Self { name, build }
    }

    /// Name of the checker this entry builds.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instantiate the checker for `subject`.
    pub fn build<'s>(&self, subject: &'s S) -> Box<dyn Check + 's> {
        (self.build)(subject)
    }
}

impl<S: ?Sized> Clone for CheckerEntry<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            build: self.build,
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for CheckerEntry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerEntry")
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered collection of checkers for subjects of type `S`.
pub struct CheckerRegistry<S: ?Sized> {
    entries: Vec<CheckerEntry<S>>,
}

impl<S: ?Sized> CheckerRegistry<S> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a checker.
    pub fn register(&mut self, name: &'static str, build: CheckerFactory<S>) {
        self.entries.push(CheckerEntry::new(name, build));
    }

    /// Get a checker entry by name.
    pub fn get(&self, name: &str) -> Option<&CheckerEntry<S>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterate over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckerEntry<S>> {
        self.entries.iter()
    }

    /// Names of all entries in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Get the number of registered checkers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the named checkers, keeping the order of the rest.
    pub fn without(&mut self, names: &[String]) {
        self.entries
            .retain(|e| !names.iter().any(|n| n.as_str() == e.name));
    }
}

impl<S: ?Sized> Default for CheckerRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Clone for CheckerRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for CheckerRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Reports;

    struct Subject {
        value: u32,
    }

    struct ValueCheck<'s> {
        subject: &'s Subject,
    }

    impl Check for ValueCheck<'_> {
        fn name(&self) -> &'static str {
            "value"
        }

        fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
            if self.subject.value == 0 {
                reports.fail("value is zero");
            }
            Ok(())
        }
    }

    fn value_check(subject: &Subject) -> Box<dyn Check + '_> {
        Box::new(ValueCheck { subject })
    }

    fn registry() -> CheckerRegistry<Subject> {
        let mut registry = CheckerRegistry::new();
        registry.register("first", value_check);
        registry.register("second", value_check);
        registry.register("third", value_check);
        registry
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckerRegistry::<Subject>::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = CheckerRegistry::<Subject>::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_preserves_registration_order() {
        assert_eq!(registry().names(), ["first", "second", "third"]);
    }

    #[test]
    fn registry_get_by_name() {
        let registry = registry();
        assert!(registry.get("second").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn entry_builds_checker_for_subject() {
        let registry = registry();
        let subject = Subject { value: 0 };
        let mut check = registry.get("first").unwrap().build(&subject);

        let mut reports = Reports::new();
        check.check(&mut reports).unwrap();
        assert_eq!(reports.failures().len(), 1);
    }

    #[test]
    fn without_removes_named_entries() {
        let mut registry = registry();
        registry.without(&["second".to_string(), "missing".to_string()]);
        assert_eq!(registry.names(), ["first", "third"]);
    }
}

use crate::check::{Check, Reports};
use crate::repo::Repository;

/// Fails if the repository has no README.
pub struct CheckReadme<'a> {
    repo: &'a dyn Repository,
}

impl<'a> CheckReadme<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }
}

impl Check for CheckReadme<'_> {
    fn name(&self) -> &'static str {
        "readme"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        if !self.repo.has_readme()? {
            reports.fail("Missing a README file");
        }
        Ok(())
    }
}

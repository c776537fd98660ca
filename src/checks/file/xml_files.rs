//! Well-formedness of XML resources.

use std::fs;

use roxmltree::{Document, ParsingOptions};

use crate::check::{CapturedError, Check, Reports};
use crate::package::PackageRoot;

/// Fails for every snippet file that is not well-formed XML.
pub struct CheckXmlFiles<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckXmlFiles<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckXmlFiles<'_> {
    fn name(&self) -> &'static str {
        "xml-files"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        for path in self.package.glob("**/*.sublime-snippet")? {
            let text = fs::read_to_string(&path)?;
            if let Err(e) = Document::parse_with_options(&text, options) {
                reports.fail_with(
                    format!(
                        "File '{}' is badly formatted XML",
                        self.package.display_path(&path)
                    ),
                    CapturedError::from_error(&e),
                );
            }
        }
        Ok(())
    }
}

//! Catalog service — browse the service taxonomy.

use tradehub_domain::error::{NotFoundError, TradeHubError};
use tradehub_domain::section::MainSection;

use crate::ports::CategoryCatalog;

/// Application service exposing the Build/Design/Finance taxonomy.
pub struct CatalogService<C> {
    catalog: C,
}

impl<C: CategoryCatalog> CatalogService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Top-level sections, in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<MainSection> {
        self.catalog.sections()
    }

    /// Category names under a section, in display order.
    #[must_use]
    pub fn categories(&self, section: MainSection) -> Vec<String> {
        self.catalog.categories(section)
    }

    /// Ordered leaf subcategories for a category.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::NotFound`] when the section has no category
    /// by that name.
    pub fn subcategories(
        &self,
        section: MainSection,
        category: &str,
    ) -> Result<Vec<String>, TradeHubError> {
        self.catalog
            .subcategories(section, category)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Category",
                    id: format!("{section}/{category}"),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubCatalog;

    impl CategoryCatalog for StubCatalog {
        fn sections(&self) -> Vec<MainSection> {
            MainSection::ALL.to_vec()
        }

        fn categories(&self, section: MainSection) -> Vec<String> {
            match section {
                MainSection::Build => vec!["Electricians".to_string(), "Plumbers".to_string()],
                _ => Vec::new(),
            }
        }

        fn subcategories(&self, section: MainSection, category: &str) -> Option<Vec<String>> {
            (section == MainSection::Build && category == "Electricians")
                .then(|| vec!["Wiring".to_string(), "Lighting".to_string()])
        }
    }

    #[test]
    fn should_list_sections_in_order() {
        let svc = CatalogService::new(StubCatalog);
        assert_eq!(svc.sections(), MainSection::ALL);
    }

    #[test]
    fn should_list_categories_for_section() {
        let svc = CatalogService::new(StubCatalog);
        assert_eq!(
            svc.categories(MainSection::Build),
            ["Electricians", "Plumbers"]
        );
    }

    #[test]
    fn should_return_subcategories_in_order() {
        let svc = CatalogService::new(StubCatalog);
        let subs = svc
            .subcategories(MainSection::Build, "Electricians")
            .unwrap();
        assert_eq!(subs, ["Wiring", "Lighting"]);
    }

    #[test]
    fn should_return_not_found_for_unknown_category() {
        let svc = CatalogService::new(StubCatalog);
        let result = svc.subcategories(MainSection::Finance, "Electricians");
        assert!(matches!(result, Err(TradeHubError::NotFound(_))));
    }
}

//! # tradehub-adapter-catalog
//!
//! Static service-taxonomy adapter.
//!
//! The Build/Design/Finance trees are reference data that change a few times
//! a year at most, so they ship compiled in. The core never depends on the
//! contents — it goes through the `CategoryCatalog` port and only checks that
//! a selected leaf is non-empty.

use tradehub_app::ports::CategoryCatalog;
use tradehub_domain::section::MainSection;

/// A category and its ordered leaf subcategories.
type CategoryEntry = (&'static str, &'static [&'static str]);

const BUILD: &[CategoryEntry] = &[
    (
        "General Contractors",
        &["New Construction", "Renovations", "Additions", "Project Management"],
    ),
    (
        "Electricians",
        &["Wiring & Rewiring", "Panel Upgrades", "Lighting Installation", "EV Chargers"],
    ),
    (
        "Plumbers",
        &["Pipe Repair", "Water Heaters", "Drain Cleaning", "Fixture Installation"],
    ),
    (
        "HVAC Technicians",
        &["Furnace Service", "Air Conditioning", "Heat Pumps", "Duct Work"],
    ),
    (
        "Roofers",
        &["Shingle Roofing", "Flat Roofing", "Gutter Installation", "Roof Inspection"],
    ),
    (
        "Carpenters",
        &["Framing", "Finish Carpentry", "Custom Cabinetry", "Decks & Porches"],
    ),
    (
        "Painters",
        &["Interior Painting", "Exterior Painting", "Wallpaper", "Staining"],
    ),
    (
        "Masons",
        &["Brickwork", "Stonework", "Concrete", "Chimney Repair"],
    ),
    (
        "Landscapers",
        &["Lawn Care", "Garden Design", "Irrigation", "Tree Service"],
    ),
    (
        "Flooring Installers",
        &["Hardwood", "Tile", "Carpet", "Laminate & Vinyl"],
    ),
];

const DESIGN: &[CategoryEntry] = &[
    (
        "Architects",
        &["Residential Design", "Permit Drawings", "Feasibility Studies"],
    ),
    (
        "Interior Designers",
        &["Space Planning", "Furniture & Finishes", "Color Consultation"],
    ),
    (
        "Kitchen & Bath Designers",
        &["Kitchen Remodels", "Bathroom Remodels", "Fixture Selection"],
    ),
    (
        "Landscape Architects",
        &["Site Planning", "Planting Design", "Outdoor Living Spaces"],
    ),
    (
        "Lighting Designers",
        &["Residential Lighting", "Outdoor Lighting", "Smart Lighting"],
    ),
    (
        "Home Stagers",
        &["Occupied Staging", "Vacant Staging", "Photo Preparation"],
    ),
];

const FINANCE: &[CategoryEntry] = &[
    (
        "Mortgage Brokers",
        &["Purchase Loans", "Refinancing", "Construction Loans"],
    ),
    (
        "Home Insurance Agents",
        &["Homeowners Insurance", "Flood Insurance", "Umbrella Policies"],
    ),
    (
        "Property Appraisers",
        &["Purchase Appraisals", "Refinance Appraisals", "Estate Valuations"],
    ),
    (
        "Real Estate Attorneys",
        &["Closings", "Title Review", "Contract Disputes"],
    ),
    (
        "Tax Consultants",
        &["Property Tax Appeals", "Home Office Deductions", "Capital Gains Planning"],
    ),
];

const fn table(section: MainSection) -> &'static [CategoryEntry] {
    match section {
        MainSection::Build => BUILD,
        MainSection::Design => DESIGN,
        MainSection::Finance => FINANCE,
    }
}

/// The built-in taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    /// Create the catalog.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CategoryCatalog for StaticCatalog {
    fn sections(&self) -> Vec<MainSection> {
        MainSection::ALL.to_vec()
    }

    fn categories(&self, section: MainSection) -> Vec<String> {
        table(section)
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect()
    }

    fn subcategories(&self, section: MainSection, category: &str) -> Option<Vec<String>> {
        table(section)
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, subs)| subs.iter().map(|s| (*s).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_all_three_sections() {
        let catalog = StaticCatalog::new();
        assert_eq!(
            catalog.sections(),
            [MainSection::Build, MainSection::Design, MainSection::Finance]
        );
    }

    #[test]
    fn should_list_build_categories_in_display_order() {
        let catalog = StaticCatalog::new();
        let categories = catalog.categories(MainSection::Build);
        assert_eq!(categories.first().map(String::as_str), Some("General Contractors"));
        assert!(categories.contains(&"Electricians".to_string()));
    }

    #[test]
    fn should_return_ordered_subcategories_for_known_category() {
        let catalog = StaticCatalog::new();
        let subs = catalog
            .subcategories(MainSection::Build, "Plumbers")
            .unwrap();
        assert_eq!(subs.first().map(String::as_str), Some("Pipe Repair"));
    }

    #[test]
    fn should_return_none_for_category_in_wrong_section() {
        let catalog = StaticCatalog::new();
        assert!(
            catalog
                .subcategories(MainSection::Finance, "Plumbers")
                .is_none()
        );
    }

    #[test]
    fn should_have_no_empty_names_anywhere() {
        let catalog = StaticCatalog::new();
        for section in catalog.sections() {
            for category in catalog.categories(section) {
                assert!(!category.trim().is_empty());
                for sub in catalog.subcategories(section, &category).unwrap() {
                    assert!(!sub.trim().is_empty());
                }
            }
        }
    }
}

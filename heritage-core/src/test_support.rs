//! Sample Chambal region catalog shared by unit, behaviour and CLI tests.

use geo::Coord;
use rust_decimal::Decimal;

use crate::{Catalog, CatalogDocument, Guide, PresetPackage, Site, SiteId};

const SITES: [(&str, &str, i64, u32, f64, f64); 6] = [
    ("bateshwar-temples", "Bateshwar Temples", 50, 180, 78.4167, 26.3833),
    ("chambal-ravines", "Chambal Ravines", 0, 240, 78.5, 26.5),
    ("bhimbetka-rock-art", "Bhimbetka Rock Shelters", 100, 150, 77.6102, 22.9392),
    ("garhi-padavali", "Garhi Padavali Fort", 30, 120, 78.3167, 25.9833),
    ("mitawali-temple", "Mitawali Temple", 40, 90, 78.4, 25.85),
    ("dholpur-palace", "Dholpur Palace", 80, 120, 77.8921, 26.703),
];

const GUIDES: [(&str, &str, i64, [&str; 3]); 3] = [
    ("rajesh-kumar", "Rajesh Kumar", 2000, ["Hindi", "English", "Bundelkhandi"]),
    ("priya-sharma", "Priya Sharma", 1800, ["Hindi", "English", "German"]),
    ("vikram-singh", "Vikram Singh", 2500, ["Hindi", "English", "French"]),
];

fn preset(
    id: &str,
    name: &str,
    description: &str,
    sites: &[&str],
    days: u32,
    estimated_cost: i64,
    features: &[&str],
) -> PresetPackage {
    let mut package = PresetPackage::new(
        id,
        name,
        sites.iter().copied().map(SiteId::from).collect(),
        days,
        Decimal::from(estimated_cost),
    );
    description.clone_into(&mut package.description);
    package.features = features.iter().copied().map(String::from).collect();
    package
}

/// Six heritage sites, three guides and three presets from the Chambal seed.
#[must_use]
pub fn chambal_document() -> CatalogDocument {
    let sites = SITES
        .iter()
        .map(|&(id, name, fee, mins, x, y)| {
            Site::new(id, name, Decimal::from(fee), mins).with_location(Coord { x, y })
        })
        .collect();
    let guides = GUIDES
        .iter()
        .map(|&(id, name, fee, languages)| {
            let mut guide = Guide::new(id, name, Decimal::from(fee));
            guide.languages = languages.iter().copied().map(String::from).collect();
            guide
        })
        .collect();
    let presets = vec![
        preset(
            "budget-explorer",
            "Budget Explorer",
            "Perfect for budget travelers wanting to experience Chambal's highlights",
            &["bateshwar-temples", "chambal-ravines", "garhi-padavali"],
            2,
            4000,
            &[
                "Basic accommodation",
                "Local transport",
                "Entry fees included",
                "Local food experiences",
            ],
        ),
        preset(
            "comfort-heritage-trail",
            "Comfort Heritage Trail",
            "Balanced experience with comfort and comprehensive site coverage",
            &[
                "bateshwar-temples",
                "chambal-ravines",
                "bhimbetka-rock-art",
                "mitawali-temple",
            ],
            3,
            8500,
            &[
                "Comfortable hotels",
                "AC transport",
                "Professional guide",
                "All meals",
                "Photography spots",
            ],
        ),
        preset(
            "premium-cultural-immersion",
            "Premium Cultural Immersion",
            "Luxury experience covering all major sites with expert guidance",
            &[
                "bateshwar-temples",
                "chambal-ravines",
                "bhimbetka-rock-art",
                "garhi-padavali",
                "mitawali-temple",
                "dholpur-palace",
            ],
            5,
            18000,
            &[
                "Luxury accommodation",
                "Private vehicle",
                "Expert guide",
                "All meals & snacks",
                "Cultural performances",
                "Sunrise/sunset tours",
                "Wildlife safari",
            ],
        ),
    ];
    CatalogDocument {
        sites,
        guides,
        presets,
    }
}

/// The Chambal seed as an in-memory [`Catalog`].
///
/// # Panics
/// Panics if the seed contains duplicate identifiers.
#[must_use]
#[expect(clippy::expect_used, reason = "seed data is fixed and unique")]
pub fn chambal_catalog() -> Catalog {
    Catalog::try_from(chambal_document()).expect("Chambal seed has unique identifiers")
}

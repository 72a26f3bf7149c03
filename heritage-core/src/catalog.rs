//! Reference data the engine reads: heritage sites, guides and presets.
//!
//! Records are owned by an external catalog store and are never mutated by
//! the engine. Lookups go through the [`SiteCatalog`], [`GuideCatalog`] and
//! [`PresetCatalog`] traits so callers can plug in their own snapshot type;
//! [`Catalog`] is the in-memory implementation used by the CLI and tests.

use std::collections::{BTreeMap, btree_map::Entry};

use geo::Coord;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{CostField, GuideId, PresetId, PresetPackage, SiteId, ValidationError};

/// Visit duration assumed when a serialized site omits one.
pub const DEFAULT_VISIT_MINUTES: u32 = 120;

#[cfg(feature = "serde")]
const fn default_visit_minutes() -> u32 {
    DEFAULT_VISIT_MINUTES
}

/// A heritage location with a one-time entry fee and an average visit time.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use heritage_core::Site;
/// use rust_decimal_macros::dec;
///
/// let site = Site::new("mitawali", "Mitawali Temple", dec!(40), 90)
///     .with_location(Coord { x: 78.4, y: 25.85 })
///     .with_activity_cost(dec!(150));
/// assert_eq!(site.avg_visit_time_mins, 90);
/// assert_eq!(site.activity_cost, Some(dec!(150)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// Catalog identifier.
    pub id: SiteId,
    /// Display name.
    pub name: String,
    /// Position used for route rendering, when known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub location: Option<Coord<f64>>,
    /// One-time admission charge.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::wire::amount"))]
    pub entry_fee: Decimal,
    /// Typical time spent at the site.
    #[cfg_attr(feature = "serde", serde(default = "default_visit_minutes"))]
    pub avg_visit_time_mins: u32,
    /// Food allowance per trip day, overriding the cost model default.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            serialize_with = "crate::wire::optional_amount"
        )
    )]
    pub food_cost_per_day: Option<Decimal>,
    /// Transport allowance per trip day, overriding the cost model default.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            serialize_with = "crate::wire::optional_amount"
        )
    )]
    pub transport_cost_per_day: Option<Decimal>,
    /// Flat activity charge, overriding the cost model default.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            serialize_with = "crate::wire::optional_amount"
        )
    )]
    pub activity_cost: Option<Decimal>,
}

impl Site {
    /// Construct a site without location or per-day overrides.
    #[must_use]
    pub fn new(
        id: impl Into<SiteId>,
        name: impl Into<String>,
        entry_fee: Decimal,
        avg_visit_time_mins: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            entry_fee,
            avg_visit_time_mins,
            food_cost_per_day: None,
            transport_cost_per_day: None,
            activity_cost: None,
        }
    }

    /// Attach a map position.
    #[must_use]
    pub fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Override the per-day food allowance.
    #[must_use]
    pub fn with_food_cost_per_day(mut self, amount: Decimal) -> Self {
        self.food_cost_per_day = Some(amount);
        self
    }

    /// Override the per-day transport allowance.
    #[must_use]
    pub fn with_transport_cost_per_day(mut self, amount: Decimal) -> Self {
        self.transport_cost_per_day = Some(amount);
        self
    }

    /// Override the activity charge.
    #[must_use]
    pub fn with_activity_cost(mut self, amount: Decimal) -> Self {
        self.activity_cost = Some(amount);
        self
    }

    /// Reject negative amounts and zero visit durations.
    ///
    /// # Errors
    /// Returns [`ValidationError::NegativeAmount`] naming the first negative
    /// field, or [`ValidationError::ZeroVisitTime`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [
            (CostField::EntryFee, Some(self.entry_fee)),
            (CostField::FoodCostPerDay, self.food_cost_per_day),
            (CostField::TransportCostPerDay, self.transport_cost_per_day),
            (CostField::ActivityCost, self.activity_cost),
        ];
        for (field, amount) in amounts {
            if let Some(value) = amount {
                require_non_negative(self.id.as_str(), field, value)?;
            }
        }
        if self.avg_visit_time_mins == 0 {
            return Err(ValidationError::ZeroVisitTime {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// A local escort charged per day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guide {
    /// Catalog identifier.
    pub id: GuideId,
    /// Display name.
    pub name: String,
    /// Daily fee.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::wire::amount"))]
    pub fee_per_day: Decimal,
    /// Spoken languages.
    #[cfg_attr(feature = "serde", serde(default))]
    pub languages: Vec<String>,
}

impl Guide {
    /// Construct a guide with no language list.
    #[must_use]
    pub fn new(id: impl Into<GuideId>, name: impl Into<String>, fee_per_day: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fee_per_day,
            languages: Vec::new(),
        }
    }

    /// Reject a negative daily fee.
    ///
    /// # Errors
    /// Returns [`ValidationError::NegativeAmount`] when `fee_per_day < 0`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative(self.id.as_str(), CostField::FeePerDay, self.fee_per_day)
    }
}

fn require_non_negative(
    record: &str,
    field: CostField,
    amount: Decimal,
) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount {
            record: record.to_owned(),
            field,
            amount,
        });
    }
    Ok(())
}

/// Look up sites by identifier.
pub trait SiteCatalog {
    /// Return the site with `id`, if present.
    fn site(&self, id: &SiteId) -> Option<&Site>;
}

/// Look up guides by identifier.
pub trait GuideCatalog {
    /// Return the guide with `id`, if present.
    fn guide(&self, id: &GuideId) -> Option<&Guide>;
}

/// Look up and enumerate preset packages.
pub trait PresetCatalog {
    /// Return the preset with `id`, if present.
    fn preset(&self, id: &PresetId) -> Option<&PresetPackage>;

    /// Return every preset in catalog order.
    fn presets(&self) -> &[PresetPackage];
}

/// Linear scan over a slice; intended for small, test-sized catalogs.
impl SiteCatalog for [Site] {
    fn site(&self, id: &SiteId) -> Option<&Site> {
        self.iter().find(|site| &site.id == id)
    }
}

impl GuideCatalog for [Guide] {
    fn guide(&self, id: &GuideId) -> Option<&Guide> {
        self.iter().find(|guide| &guide.id == id)
    }
}

/// Errors raised while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two sites share an identifier.
    #[error("duplicate site id {0} in catalog")]
    DuplicateSite(SiteId),
    /// Two guides share an identifier.
    #[error("duplicate guide id {0} in catalog")]
    DuplicateGuide(GuideId),
    /// Two presets share an identifier.
    #[error("duplicate preset id {0} in catalog")]
    DuplicatePreset(PresetId),
}

/// Serialized form of a catalog snapshot: `{ sites, guides, presets }`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogDocument {
    /// Heritage sites.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sites: Vec<Site>,
    /// Local guides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub guides: Vec<Guide>,
    /// Curated preset packages.
    #[cfg_attr(feature = "serde", serde(default))]
    pub presets: Vec<PresetPackage>,
}

/// Immutable in-memory catalog snapshot keyed by identifier.
///
/// Ordered maps keep iteration deterministic.
///
/// # Examples
/// ```
/// use heritage_core::{Catalog, Guide, Site, SiteCatalog, SiteId};
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), heritage_core::CatalogError> {
/// let catalog = Catalog::from_parts(
///     vec![Site::new("fort", "Garhi Padavali Fort", dec!(30), 120)],
///     vec![Guide::new("rajesh", "Rajesh Kumar", dec!(2000))],
///     Vec::new(),
/// )?;
/// assert!(catalog.site(&SiteId::from("fort")).is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    sites: BTreeMap<SiteId, Site>,
    guides: BTreeMap<GuideId, Guide>,
    presets: Vec<PresetPackage>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    /// Returns [`CatalogError`] naming the first repeated identifier.
    pub fn from_parts(
        sites: Vec<Site>,
        guides: Vec<Guide>,
        presets: Vec<PresetPackage>,
    ) -> Result<Self, CatalogError> {
        let mut site_map = BTreeMap::new();
        for site in sites {
            match site_map.entry(site.id.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateSite(site.id)),
                Entry::Vacant(slot) => {
                    slot.insert(site);
                }
            }
        }
        let mut guide_map = BTreeMap::new();
        for guide in guides {
            match guide_map.entry(guide.id.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateGuide(guide.id)),
                Entry::Vacant(slot) => {
                    slot.insert(guide);
                }
            }
        }
        for (position, preset) in presets.iter().enumerate() {
            if presets
                .iter()
                .take(position)
                .any(|earlier| earlier.id == preset.id)
            {
                return Err(CatalogError::DuplicatePreset(preset.id.clone()));
            }
        }
        Ok(Self {
            sites: site_map,
            guides: guide_map,
            presets,
        })
    }

    /// Iterate over sites ordered by identifier.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Iterate over guides ordered by identifier.
    pub fn guides(&self) -> impl Iterator<Item = &Guide> {
        self.guides.values()
    }

    /// Number of sites in the snapshot.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Number of guides in the snapshot.
    #[must_use]
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::from_parts(document.sites, document.guides, document.presets)
    }
}

impl SiteCatalog for Catalog {
    fn site(&self, id: &SiteId) -> Option<&Site> {
        self.sites.get(id)
    }
}

impl GuideCatalog for Catalog {
    fn guide(&self, id: &GuideId) -> Option<&Guide> {
        self.guides.get(id)
    }
}

impl PresetCatalog for Catalog {
    fn preset(&self, id: &PresetId) -> Option<&PresetPackage> {
        self.presets.iter().find(|preset| &preset.id == id)
    }

    fn presets(&self) -> &[PresetPackage] {
        &self.presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::entry(Site::new("s", "S", dec!(-1), 60), CostField::EntryFee)]
    #[case::food(
        Site::new("s", "S", dec!(0), 60).with_food_cost_per_day(dec!(-0.5)),
        CostField::FoodCostPerDay
    )]
    #[case::transport(
        Site::new("s", "S", dec!(0), 60).with_transport_cost_per_day(dec!(-200)),
        CostField::TransportCostPerDay
    )]
    #[case::activity(
        Site::new("s", "S", dec!(0), 60).with_activity_cost(dec!(-1)),
        CostField::ActivityCost
    )]
    fn site_rejects_negative_amounts(#[case] site: Site, #[case] expected: CostField) {
        let err = site.validate().expect_err("negative amount");
        match err {
            ValidationError::NegativeAmount { field, record, .. } => {
                assert_eq!(field, expected);
                assert_eq!(record, "s");
            }
            other => panic!("expected NegativeAmount, found {other:?}"),
        }
    }

    #[rstest]
    fn site_rejects_zero_visit_time() {
        let err = Site::new("s", "S", dec!(10), 0)
            .validate()
            .expect_err("zero visit time");
        assert_eq!(err, ValidationError::ZeroVisitTime { id: "s".into() });
    }

    #[rstest]
    fn negative_zero_is_accepted() {
        let site = Site::new("s", "S", -dec!(0), 30);
        assert!(site.validate().is_ok());
    }

    #[rstest]
    fn guide_rejects_negative_fee() {
        let err = Guide::new("g", "G", dec!(-10))
            .validate()
            .expect_err("negative fee");
        assert!(matches!(
            err,
            ValidationError::NegativeAmount {
                field: CostField::FeePerDay,
                ..
            }
        ));
    }

    #[rstest]
    fn catalog_rejects_duplicate_sites() {
        let err = Catalog::from_parts(
            vec![
                Site::new("dup", "A", dec!(1), 10),
                Site::new("dup", "B", dec!(2), 20),
            ],
            Vec::new(),
            Vec::new(),
        )
        .expect_err("duplicate site");
        assert_eq!(err, CatalogError::DuplicateSite("dup".into()));
    }

    #[rstest]
    fn catalog_rejects_duplicate_presets() {
        let preset = PresetPackage::new("p", "P", vec!["a".into()], 1, dec!(100));
        let err = Catalog::from_parts(Vec::new(), Vec::new(), vec![preset.clone(), preset])
            .expect_err("duplicate preset");
        assert_eq!(err, CatalogError::DuplicatePreset("p".into()));
    }

    #[rstest]
    fn catalog_counts_indexed_records() {
        let catalog = Catalog::from_parts(
            vec![
                Site::new("a", "A", dec!(1), 10),
                Site::new("b", "B", dec!(2), 20),
            ],
            vec![Guide::new("g", "G", dec!(500))],
            Vec::new(),
        )
        .expect("distinct ids");
        assert_eq!(catalog.site_count(), 2);
        assert_eq!(catalog.guide_count(), 1);
        assert_eq!(catalog.sites().count(), catalog.site_count());
    }

    #[rstest]
    fn slices_act_as_catalogs() {
        let sites = [Site::new("a", "A", dec!(1), 10)];
        assert!(sites.as_slice().site(&"a".into()).is_some());
        assert!(sites.as_slice().site(&"b".into()).is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn site_deserialises_with_defaults() {
        let site: Site = serde_json::from_str(
            r#"{ "id": "r", "name": "Chambal Ravines", "entry_fee": 0 }"#,
        )
        .expect("decode site");
        assert_eq!(site.avg_visit_time_mins, DEFAULT_VISIT_MINUTES);
        assert!(site.food_cost_per_day.is_none());
        assert!(site.location.is_none());
    }
}

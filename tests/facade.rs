#![expect(clippy::expect_used, reason = "tests should fail fast")]

//! Smoke tests for the facade re-exports.

use heritage_engine::{EstimateRequest, Guide, Site, estimate};
use rstest::rstest;
use rust_decimal_macros::dec;

#[rstest]
#[case::no_guide(None, 1100)]
#[case::guided(Some("rajesh"), 5100)]
fn facade_estimates_a_single_site(#[case] guide: Option<&str>, #[case] expected: u64) {
    let sites = [Site::new("bhimbetka", "Bhimbetka Rock Shelters", dec!(100), 150)];
    let guides = [Guide::new("rajesh", "Rajesh Kumar", dec!(2000))];
    let request = EstimateRequest {
        site_ids: vec!["bhimbetka".into()],
        budget: dec!(10000),
        days: 2,
        guide_id: guide.map(Into::into),
    };
    let result = estimate(&request, sites.as_slice(), guides.as_slice()).expect("estimate");
    assert_eq!(result.total_cost, expected);
}

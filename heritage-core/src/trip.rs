//! Named trips ready to be persisted.

use thiserror::Error;

use crate::{EstimateRequest, EstimateResult, GuideId, SiteId};

/// Errors raised when drafting a trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripDraftError {
    /// The trip name was empty or whitespace.
    #[error("trip name must not be blank")]
    BlankName,
}

/// Snapshot of an estimated trip under a traveller-chosen name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripDraft {
    /// Trimmed trip name.
    pub name: String,
    /// Sites in visiting order.
    pub site_ids: Vec<SiteId>,
    /// Estimated cost at the time of drafting.
    pub total_cost: u64,
    /// Estimated duration at the time of drafting.
    pub total_time_mins: u64,
    /// Guide hired for the trip, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub guide_id: Option<GuideId>,
}

impl TripDraft {
    /// Combine a request and its estimate under `name`.
    ///
    /// # Errors
    /// Returns [`TripDraftError::BlankName`] when `name` is blank after
    /// trimming.
    ///
    /// # Examples
    /// ```
    /// use heritage_core::{EstimateRequest, EstimateResult, TripDraft};
    /// use rust_decimal_macros::dec;
    ///
    /// let request = EstimateRequest {
    ///     site_ids: vec!["fort".into()],
    ///     budget: dec!(1000),
    ///     days: 1,
    ///     guide_id: None,
    /// };
    /// let result = EstimateResult {
    ///     cost_breakdown: Vec::new(),
    ///     guide_cost: 0,
    ///     total_cost: 530,
    ///     total_time_mins: 120,
    ///     route_coordinates: Vec::new(),
    ///     suggestions: Vec::new(),
    /// };
    /// let draft = TripDraft::new("  Weekend  ", &request, &result).unwrap();
    /// assert_eq!(draft.name, "Weekend");
    /// assert_eq!(draft.total_cost, 530);
    /// ```
    pub fn new(
        name: &str,
        request: &EstimateRequest,
        result: &EstimateResult,
    ) -> Result<Self, TripDraftError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TripDraftError::BlankName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            site_ids: request.site_ids.clone(),
            total_cost: result.total_cost,
            total_time_mins: result.total_time_mins,
            guide_id: request.guide_id.clone(),
        })
    }

    /// File-name friendly form of the trip name.
    ///
    /// Lowercases the name and collapses every run of whitespace, ASCII
    /// punctuation and control characters into a single `-`. Letters and
    /// marks from any script are kept. Falls back to `trip` when nothing
    /// survives. Distinct names may share a slug.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for ch in self.name.chars() {
            if ch.is_whitespace() || ch.is_ascii_punctuation() || ch.is_control() {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            } else {
                slug.extend(ch.to_lowercase());
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str("trip");
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn request() -> EstimateRequest {
        EstimateRequest {
            site_ids: vec!["a".into(), "b".into()],
            budget: dec!(5000),
            days: 2,
            guide_id: Some("g".into()),
        }
    }

    #[fixture]
    fn result() -> EstimateResult {
        EstimateResult {
            cost_breakdown: Vec::new(),
            guide_cost: 1000,
            total_cost: 3000,
            total_time_mins: 450,
            route_coordinates: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_names_are_rejected(
        request: EstimateRequest,
        result: EstimateResult,
        #[case] name: &str,
    ) {
        assert_eq!(
            TripDraft::new(name, &request, &result),
            Err(TripDraftError::BlankName)
        );
    }

    #[rstest]
    fn draft_copies_request_and_totals(request: EstimateRequest, result: EstimateResult) {
        let draft = TripDraft::new("Ravines", &request, &result).expect("draft");
        assert_eq!(draft.site_ids, request.site_ids);
        assert_eq!(draft.guide_id, Some(GuideId::from("g")));
        assert_eq!(draft.total_time_mins, 450);
    }

    #[rstest]
    #[case("Chambal Weekend", "chambal-weekend")]
    #[case("  Forts & Temples!! ", "forts-temples")]
    #[case("मंदिर", "मंदिर")]
    #[case("चंबल यात्रा", "चंबल-यात्रा")]
    #[case("Dholpur/../Palace", "dholpur-palace")]
    #[case("!!!", "trip")]
    fn slug_is_file_name_safe(
        request: EstimateRequest,
        result: EstimateResult,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        let draft = TripDraft::new(name, &request, &result).expect("draft");
        assert_eq!(draft.slug(), expected);
    }
}

//! Serde adapters for the JSON wire shape.
//!
//! Whole amounts are written as JSON integers and fractional ones as
//! numbers; reading accepts either. Route coordinates travel as
//! `[latitude, longitude]` pairs.

use geo::Coord;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serializer};

/// Write an amount as an integer when it has no fractional part.
pub(crate) fn amount<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let normalized = value.normalize();
    if let Some(whole) = normalized.to_i64().filter(|_| normalized.scale() == 0) {
        return serializer.serialize_i64(whole);
    }
    let Some(float) = normalized.to_f64() else {
        return serializer.collect_str(&normalized);
    };
    serializer.serialize_f64(float)
}

#[expect(
    clippy::ref_option,
    reason = "serde passes optional fields by reference"
)]
pub(crate) fn optional_amount<S: Serializer>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let Some(present) = value else {
        return serializer.serialize_none();
    };
    amount(present, serializer)
}

pub(crate) mod lat_lon_pairs {
    use super::{Coord, Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        coords: &[Coord<f64>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(coords.iter().map(|coord| [coord.y, coord.x]))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Coord<f64>>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs
            .into_iter()
            .map(|[lat, lon]| Coord { x: lon, y: lat })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{EstimateRequest, EstimateResult, PresetPackage};

    #[rstest]
    fn whole_amounts_are_integers() {
        let preset = PresetPackage::new("p", "P", vec!["a".into()], 2, dec!(4000.00));
        let value = serde_json::to_value(&preset).expect("serialise preset");
        assert_eq!(value["estimated_cost"], json!(4000));
        assert_eq!(serde_json::to_string(&value["estimated_cost"]).expect("json"), "4000");
    }

    #[rstest]
    fn fractional_amounts_stay_numeric() {
        let request = EstimateRequest {
            site_ids: vec!["a".into()],
            budget: dec!(99.5),
            days: 1,
            guide_id: None,
        };
        let value = serde_json::to_value(&request).expect("serialise request");
        assert_eq!(value["budget"], json!(99.5));
        let decoded: EstimateRequest = serde_json::from_value(value).expect("decode request");
        assert_eq!(decoded.budget, dec!(99.5));
    }

    #[rstest]
    fn route_coordinates_are_lat_lon_pairs() {
        let result = EstimateResult {
            cost_breakdown: Vec::new(),
            guide_cost: 0,
            total_cost: 0,
            total_time_mins: 0,
            route_coordinates: vec![geo::Coord { x: 78.5, y: 26.5 }],
            suggestions: Vec::new(),
        };
        let value = serde_json::to_value(&result).expect("serialise result");
        assert_eq!(value["route_coordinates"], json!([[26.5, 78.5]]));
        let decoded: EstimateResult = serde_json::from_value(value).expect("decode result");
        assert_eq!(decoded.route_coordinates, result.route_coordinates);
    }
}

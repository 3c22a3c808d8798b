/// Buy-score rubric.
///
/// The score is the sum of four independent factors, capped at 100:
/// - rating: `rating / 5 * 40`
/// - review volume: 10 above 500 reviews, 5 above 100
/// - price band: 10 under 20000, 15 from 20000 to 60000 inclusive, 5 above
/// - origin: 20 when the country contains "india"
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{ProductRecord, MAX_RATING};

pub const MAX_SCORE: f64 = 100.0;
pub const BUY_THRESHOLD: f64 = 60.0;

const RATING_WEIGHT: f64 = 40.0;

const HIGH_REVIEW_COUNT: u64 = 500;
const MODERATE_REVIEW_COUNT: u64 = 100;

const BUDGET_PRICE_CEILING: f64 = 20_000.0;
const MID_PRICE_CEILING: f64 = 60_000.0;

const PREFERRED_ORIGIN: &str = "india";
const ORIGIN_BONUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Decision {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "NOT BUY")]
    NotBuy,
}

impl Decision {
    /// Classify an unrounded score.
    pub fn from_score(score: f64) -> Self {
        if score >= BUY_THRESHOLD {
            Decision::Buy
        } else {
            Decision::NotBuy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Buy => "BUY",
            Decision::NotBuy => "NOT BUY",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn score(record: &ProductRecord) -> f64 {
    let total = rating_points(record.rating)
        + review_points(record.reviews)
        + price_points(record.price)
        + origin_points(&record.manufactured_in);
    total.min(MAX_SCORE)
}

fn rating_points(rating: f64) -> f64 {
    (rating / MAX_RATING) * RATING_WEIGHT
}

fn review_points(reviews: u64) -> f64 {
    if reviews > HIGH_REVIEW_COUNT {
        10.0
    } else if reviews > MODERATE_REVIEW_COUNT {
        5.0
    } else {
        0.0
    }
}

// 20000 lands in the middle band, so a budget phone priced exactly 20000
// scores higher than one at 19999.
fn price_points(price: f64) -> f64 {
    if price < BUDGET_PRICE_CEILING {
        10.0
    } else if price <= MID_PRICE_CEILING {
        15.0
    } else {
        5.0
    }
}

fn origin_points(manufactured_in: &str) -> f64 {
    if manufactured_in.to_lowercase().contains(PREFERRED_ORIGIN) {
        ORIGIN_BONUS
    } else {
        0.0
    }
}

/// Round to one decimal place for display. Never use the result for classification.
pub fn round_for_display(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(rating: f64, reviews: u64, price: f64, origin: &str) -> ProductRecord {
        ProductRecord {
            product_name: "Phone".to_string(),
            company: "Acme".to_string(),
            price,
            rating,
            reviews,
            manufactured_in: origin.to_string(),
        }
    }

    #[test]
    fn top_rated_indian_mid_price_is_buy() {
        let s = score(&record(5.0, 600, 30_000.0, "India"));
        assert_eq!(s, 85.0);
        assert_eq!(Decision::from_score(s), Decision::Buy);
    }

    #[test]
    fn low_rated_expensive_import_is_not_buy() {
        let s = score(&record(1.0, 0, 70_000.0, "China"));
        assert_eq!(s, 13.0);
        assert_eq!(Decision::from_score(s), Decision::NotBuy);
    }

    #[test]
    fn review_bands() {
        assert_eq!(review_points(100), 0.0);
        assert_eq!(review_points(101), 5.0);
        assert_eq!(review_points(500), 5.0);
        assert_eq!(review_points(501), 10.0);
    }

    #[test]
    fn price_band_boundaries_are_inclusive_in_the_middle() {
        assert_eq!(price_points(19_999.99), 10.0);
        assert_eq!(price_points(20_000.0), 15.0);
        assert_eq!(price_points(60_000.0), 15.0);
        assert_eq!(price_points(60_000.01), 5.0);
    }

    #[test]
    fn origin_match_is_case_insensitive_substring() {
        assert_eq!(origin_points("India"), 20.0);
        assert_eq!(origin_points("Made In INDIA"), 20.0);
        assert_eq!(origin_points("Indonesia"), 0.0);
        assert_eq!(origin_points("Unknown"), 0.0);
    }

    #[test]
    fn exactly_sixty_is_buy() {
        // 30 (rating 3.75) + 0 + 10 + 20
        let s = score(&record(3.75, 0, 10_000.0, "India"));
        assert_eq!(s, 60.0);
        assert_eq!(Decision::from_score(s), Decision::Buy);
    }

    #[test]
    fn rounding_does_not_promote_to_buy() {
        let s = 59.96;
        assert_eq!(round_for_display(s), 60.0);
        assert_eq!(Decision::from_score(s), Decision::NotBuy);
    }

    #[test]
    fn decision_serializes_with_display_labels() {
        assert_eq!(serde_json::to_string(&Decision::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&Decision::NotBuy).unwrap(),
            "\"NOT BUY\""
        );
        assert_eq!(Decision::NotBuy.to_string(), "NOT BUY");
    }

    fn origin() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("India".to_string()),
            Just("China".to_string()),
            Just("Unknown".to_string()),
            "[a-zA-Z ]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn score_is_bounded(
            rating in 0.0..=MAX_RATING,
            reviews in 0u64..100_000,
            price in 0.0f64..500_000.0,
            origin in origin(),
        ) {
            let s = score(&record(rating, reviews, price, &origin));
            prop_assert!((0.0..=MAX_SCORE).contains(&s));
        }

        #[test]
        fn score_is_monotonic_in_rating(
            a in 0.0..=MAX_RATING,
            b in 0.0..=MAX_RATING,
            reviews in 0u64..100_000,
            price in 0.0f64..500_000.0,
            origin in origin(),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = score(&record(lo, reviews, price, &origin));
            let high = score(&record(hi, reviews, price, &origin));
            prop_assert!(low <= high);
        }

        #[test]
        fn decision_follows_unrounded_score(
            rating in 0.0..=MAX_RATING,
            reviews in 0u64..2_000,
            price in 0.0f64..100_000.0,
            origin in origin(),
        ) {
            let s = score(&record(rating, reviews, price, &origin));
            prop_assert_eq!(Decision::from_score(s) == Decision::Buy, s >= BUY_THRESHOLD);
        }
    }
}

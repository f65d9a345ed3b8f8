//! Canonicalization of free-text lead attributes.
//!
//! Nothing here fails: malformed or missing input degrades to an absent value or to
//! a literal "Unknown" default that no scoring keyword can match.

use super::domain::{present, LeadRecord};
use super::keywords::{first_match, KeywordRule};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_BAND: &str = "Unknown";
pub const UNKNOWN_DECISION_STYLE: &str = "Unknown";
pub const UNKNOWN_MOTIVATION: &str = "Other/Unknown";

const CURRENCY_GLYPHS: &[char] = &['$', '€', '£', '¥'];
const EN_DASH: char = '\u{2013}';

/// Sun exposure bucket derived from the shading label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingCode {
    FullSun,
    MostlySunny,
    PartialShade,
    HeavyShade,
    Unknown,
}

/// Whether the homeowners association permits a solar install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoaPermission {
    Allowed,
    Restricted,
    Unknown,
}

const SHADING_RULES: &[KeywordRule<ShadingCode>] = &[
    KeywordRule::any(&["full"], ShadingCode::FullSun),
    KeywordRule::any(&["mostly"], ShadingCode::MostlySunny),
    KeywordRule::any(&["partial"], ShadingCode::PartialShade),
    KeywordRule::any(&["heavy"], ShadingCode::HeavyShade),
];

// "no hoa" and "allow" outrank "restriction".
const HOA_RULES: &[KeywordRule<HoaPermission>] = &[
    KeywordRule::any(&["no hoa"], HoaPermission::Allowed),
    KeywordRule::any(&["allow"], HoaPermission::Allowed),
    KeywordRule::any(&["restriction"], HoaPermission::Restricted),
];

/// Per-call view of a lead with every raw field resolved to its canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSignals {
    pub monthly_bill: Option<f64>,
    pub shading: Option<ShadingCode>,
    pub hoa: HoaPermission,
    pub credit_band: String,
    pub true_up_band: String,
    pub decision_style: String,
    pub motivation: String,
}

impl NormalizedSignals {
    pub fn from_lead(lead: &LeadRecord) -> Self {
        Self {
            monthly_bill: normalize_monthly_bill(lead.monthly_bill, lead.monthly_bill_raw.as_deref()),
            shading: map_shading(lead.shading_level.as_deref()),
            hoa: map_hoa(lead.hoa_allows_solar.as_deref()),
            credit_band: text_or_default(lead.credit_band.as_deref(), UNKNOWN_BAND),
            true_up_band: text_or_default(lead.true_up_band.as_deref(), UNKNOWN_BAND),
            decision_style: text_or_default(lead.decision_style.as_deref(), UNKNOWN_DECISION_STYLE),
            motivation: text_or_default(lead.motivation.as_deref(), UNKNOWN_MOTIVATION),
        }
    }
}

/// A numeric bill wins outright; otherwise the raw text is parsed best-effort.
pub fn normalize_monthly_bill(bill: Option<f64>, raw: Option<&str>) -> Option<f64> {
    if bill.is_some() {
        return bill;
    }
    present(raw).and_then(parse_bill_text)
}

/// Parses `"$200–$400"` as the midpoint and `"250"` as itself.
pub fn parse_bill_text(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ' ' && !CURRENCY_GLYPHS.contains(c))
        .map(|c| if c == EN_DASH { '-' } else { c })
        .collect();

    if cleaned.contains('-') {
        let mut parts = cleaned.split('-');
        if let (Some(low), Some(high)) = (parts.next(), parts.next()) {
            if let (Some(low), Some(high)) = (parse_amount(low), parse_amount(high)) {
                return Some((low + high) / 2.0);
            }
        }
    }

    parse_amount(&cleaned)
}

fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// `None` for a blank label, `Unknown` for a label that names no known bucket.
pub fn map_shading(label: Option<&str>) -> Option<ShadingCode> {
    let label = present(label)?;
    Some(first_match(SHADING_RULES, label).unwrap_or(ShadingCode::Unknown))
}

pub fn map_hoa(label: Option<&str>) -> HoaPermission {
    present(label)
        .and_then(|label| first_match(HOA_RULES, label))
        .unwrap_or(HoaPermission::Unknown)
}

fn text_or_default(value: Option<&str>, default: &str) -> String {
    present(value).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_range_resolves_to_midpoint() {
        assert_eq!(parse_bill_text("$200–$400"), Some(300.0));
        assert_eq!(parse_bill_text("$200 - $400"), Some(300.0));
        assert_eq!(parse_bill_text("200-400-600"), Some(300.0));
    }

    #[test]
    fn single_bill_values_parse() {
        assert_eq!(parse_bill_text("250"), Some(250.0));
        assert_eq!(parse_bill_text("$ 180.50"), Some(180.5));
        assert_eq!(parse_bill_text("-100"), Some(-100.0));
    }

    #[test]
    fn unparseable_bills_stay_unset() {
        assert_eq!(parse_bill_text("abc"), None);
        assert_eq!(parse_bill_text("$1,200"), None);
        assert_eq!(parse_bill_text("$200-"), None);
        assert_eq!(parse_bill_text("nan"), None);
        assert_eq!(parse_bill_text("inf"), None);
        assert_eq!(parse_bill_text("1e400"), None);
        assert_eq!(normalize_monthly_bill(None, Some("")), None);
        assert_eq!(normalize_monthly_bill(None, None), None);
    }

    #[test]
    fn numeric_bill_is_authoritative() {
        assert_eq!(normalize_monthly_bill(Some(120.0), Some("$400-$600")), Some(120.0));
    }

    #[test]
    fn shading_uses_first_matching_bucket() {
        assert_eq!(map_shading(Some("Full Sun")), Some(ShadingCode::FullSun));
        assert_eq!(map_shading(Some("Mostly sunny")), Some(ShadingCode::MostlySunny));
        assert_eq!(map_shading(Some("PARTIAL shade")), Some(ShadingCode::PartialShade));
        assert_eq!(map_shading(Some("Heavy shade")), Some(ShadingCode::HeavyShade));
        assert_eq!(
            map_shading(Some("full sun mornings, heavy afternoon shade")),
            Some(ShadingCode::FullSun)
        );
    }

    #[test]
    fn shading_distinguishes_unknown_from_absent() {
        assert_eq!(map_shading(Some("Not sure")), Some(ShadingCode::Unknown));
        assert_eq!(map_shading(Some("")), None);
        assert_eq!(map_shading(None), None);
    }

    #[test]
    fn hoa_resolution_follows_check_order() {
        assert_eq!(map_hoa(Some("No HOA")), HoaPermission::Allowed);
        assert_eq!(map_hoa(Some("HOA allows solar")), HoaPermission::Allowed);
        assert_eq!(map_hoa(Some("HOA has restrictions")), HoaPermission::Restricted);
        assert_eq!(
            map_hoa(Some("Allowed with restrictions")),
            HoaPermission::Allowed
        );
        assert_eq!(map_hoa(Some("Not sure")), HoaPermission::Unknown);
        assert_eq!(map_hoa(Some("")), HoaPermission::Unknown);
        assert_eq!(map_hoa(None), HoaPermission::Unknown);
    }

    #[test]
    fn text_fields_fall_back_to_unknown_literals() {
        let signals = NormalizedSignals::from_lead(&LeadRecord::default());
        assert_eq!(signals.credit_band, "Unknown");
        assert_eq!(signals.true_up_band, "Unknown");
        assert_eq!(signals.decision_style, "Unknown");
        assert_eq!(signals.motivation, "Other/Unknown");
        assert_eq!(signals.hoa, HoaPermission::Unknown);
        assert!(signals.shading.is_none());
        assert!(signals.monthly_bill.is_none());
    }

    #[test]
    fn text_fields_pass_through_unchanged() {
        let lead = LeadRecord {
            credit_band: Some("650–719".to_string()),
            motivation: Some("Saving money".to_string()),
            ..LeadRecord::default()
        };
        let signals = NormalizedSignals::from_lead(&lead);
        assert_eq!(signals.credit_band, "650–719");
        assert_eq!(signals.motivation, "Saving money");
    }
}

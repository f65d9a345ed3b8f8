use super::super::domain::{present, BuyerType, LeadRecord, PainPoint};
use super::super::keywords::{all_matches, first_match, KeywordRule};
use super::super::normalizer::{NormalizedSignals, ShadingCode};
use super::config::*;

const ROOF_MATERIAL_RULES: &[KeywordRule<i32>] = &[
    KeywordRule::any(&["asphalt", "composition"], PREMIUM_ROOF_POINTS),
    KeywordRule::any(&["tile", "metal", "flat"], STANDARD_ROOF_POINTS),
];

const TRUE_UP_RULES: &[KeywordRule<i32>] = &[
    KeywordRule::any(&["500+"], LARGE_TRUE_UP_POINTS),
    KeywordRule::any(&["under 500"], SMALL_TRUE_UP_POINTS),
];

const DECISION_STYLE_RULES: &[KeywordRule<BuyerType>] = &[
    KeywordRule::any(&["research", "quality"], BuyerType::QualityFocused),
    KeywordRule::all(&["trust", "expert"], BuyerType::TrustsExperts),
    KeywordRule::any(&["price"], BuyerType::PriceShopper),
    KeywordRule::any(&["deal"], BuyerType::DiscountSeeker),
];

const PAIN_POINT_RULES: &[KeywordRule<PainPoint>] = &[
    KeywordRule::any(&["saving"], PainPoint::HighBills),
    KeywordRule::any(&["environment"], PainPoint::EnvironmentalImpact),
    KeywordRule::any(&["independence", "backup"], PainPoint::GridDependence),
    KeywordRule::any(&["quality"], PainPoint::QualityEquipment),
];

/// Graduated sub-scores, each already clamped to the 0..=100 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubScores {
    pub property: u8,
    pub financial: u8,
    pub behavioral: u8,
    pub landlord: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BehavioralProfile {
    pub score: u8,
    pub buyer_type: BuyerType,
    pub pain_points: Vec<PainPoint>,
}

pub(crate) fn property_score(lead: &LeadRecord, signals: &NormalizedSignals) -> u8 {
    let mut score = PROPERTY_BASE;

    if let Some(roof) = present(lead.roof_type.as_deref()) {
        score += first_match(ROOF_MATERIAL_RULES, roof).unwrap_or(0);
    }

    if let Some(age) = lead.roof_age_years {
        if age <= NEW_ROOF_MAX_AGE {
            score += NEW_ROOF_POINTS;
        } else if age <= MID_ROOF_MAX_AGE {
            score += MID_ROOF_POINTS;
        }
    }

    score += match signals.shading {
        Some(ShadingCode::FullSun) => FULL_SUN_POINTS,
        Some(ShadingCode::MostlySunny) => MOSTLY_SUNNY_POINTS,
        _ => 0,
    };

    clamp_score(score)
}

pub(crate) fn financial_score(signals: &NormalizedSignals) -> u8 {
    let mut score = FINANCIAL_BASE;

    if let Some(bill) = signals.monthly_bill {
        if bill >= HIGH_BILL_THRESHOLD {
            score += HIGH_BILL_POINTS;
        } else if bill >= MID_BILL_THRESHOLD {
            score += MID_BILL_POINTS;
        } else if bill >= MIN_MONTHLY_BILL {
            score += LOW_BILL_POINTS;
        }
    }

    score += first_match(TRUE_UP_RULES, &signals.true_up_band).unwrap_or(0);

    // The near-prime check reads the raw band, so only the two listed dash spellings match.
    let credit_band = &signals.credit_band;
    if credit_band.to_lowercase().starts_with(PRIME_CREDIT_PREFIX) {
        score += PRIME_CREDIT_POINTS;
    } else if NEAR_PRIME_CREDIT_BANDS
        .iter()
        .any(|band| credit_band.contains(band))
    {
        score += NEAR_PRIME_CREDIT_POINTS;
    }

    clamp_score(score)
}

pub(crate) fn behavioral_profile(signals: &NormalizedSignals) -> BehavioralProfile {
    let buyer_type =
        first_match(DECISION_STYLE_RULES, &signals.decision_style).unwrap_or_default();
    let score = BEHAVIORAL_BASE + buyer_type_points(buyer_type);

    BehavioralProfile {
        score: clamp_score(score),
        buyer_type,
        pain_points: all_matches(PAIN_POINT_RULES, &signals.motivation),
    }
}

fn buyer_type_points(buyer_type: BuyerType) -> i32 {
    match buyer_type {
        BuyerType::QualityFocused => QUALITY_FOCUSED_POINTS,
        BuyerType::TrustsExperts => TRUSTS_EXPERTS_POINTS,
        BuyerType::PriceShopper => PRICE_SHOPPER_POINTS,
        BuyerType::DiscountSeeker => DISCOUNT_SEEKER_POINTS,
        BuyerType::Unknown => 0,
    }
}

pub(crate) fn landlord_score(lead: &LeadRecord) -> u8 {
    if !lead.is_landlord() {
        return 0;
    }

    match lead.property_count() {
        count if count >= LARGE_PORTFOLIO_MIN => LARGE_PORTFOLIO_SCORE,
        count if count >= MID_PORTFOLIO_MIN => MID_PORTFOLIO_SCORE,
        count if count >= SMALL_PORTFOLIO_MIN => SMALL_PORTFOLIO_SCORE,
        _ => LANDLORD_BASE,
    }
}

fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SUB_SCORE, MAX_SUB_SCORE) as u8
}

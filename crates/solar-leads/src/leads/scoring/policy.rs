use super::super::domain::{
    present, BuyerType, LeadRecord, LeadScore, QualificationTier, RejectReason,
};
use super::super::keywords::Keywords;
use super::super::normalizer::{HoaPermission, NormalizedSignals, ShadingCode};
use super::config::*;
use super::rules::SubScores;

const WOOD_SHAKE: Keywords = Keywords::All(&["wood", "shake"]);

/// Every hard disqualification the lead trips, in rule order.
pub(crate) fn disqualifications(
    lead: &LeadRecord,
    signals: &NormalizedSignals,
) -> Vec<RejectReason> {
    let mut reasons = Vec::new();

    if lead
        .distance_minutes
        .is_some_and(|minutes| minutes > MAX_DISTANCE_MINUTES)
    {
        reasons.push(RejectReason::OutsideServiceRadius);
    }

    if present(lead.roof_type.as_deref())
        .is_some_and(|roof| WOOD_SHAKE.matches(&roof.to_lowercase()))
    {
        reasons.push(RejectReason::WoodShakeRoof);
    }

    if signals.shading == Some(ShadingCode::HeavyShade) {
        reasons.push(RejectReason::ExcessiveShading);
    }

    if signals
        .monthly_bill
        .is_some_and(|bill| bill < MIN_MONTHLY_BILL)
    {
        reasons.push(RejectReason::LowMonthlyBill);
    }

    if signals.hoa == HoaPermission::Restricted {
        reasons.push(RejectReason::HoaRestricted);
    }

    if lead
        .roof_age_years
        .is_some_and(|age| age >= MAX_ROOF_AGE_YEARS)
    {
        reasons.push(RejectReason::AgingRoof);
    }

    if signals
        .credit_band
        .to_lowercase()
        .starts_with(DISQUALIFYING_CREDIT_PREFIX)
    {
        reasons.push(RejectReason::LowCredit);
    }

    reasons
}

/// Fixed result for a lead that failed at least one hard rule.
pub(crate) fn hard_reject(reasons: Vec<RejectReason>) -> LeadScore {
    LeadScore {
        property_score: REJECT_PROPERTY_SCORE,
        financial_score: REJECT_FINANCIAL_SCORE,
        behavioral_score: REJECT_BEHAVIORAL_SCORE,
        landlord_score: REJECT_LANDLORD_SCORE,
        ai_tier: QualificationTier::Reject,
        buyer_type: BuyerType::Unknown,
        pain_points: Vec::new(),
        reject_reasons: reasons,
    }
}

pub(crate) fn weighted_composite(scores: &SubScores) -> f64 {
    let landlord_bonus = if scores.landlord >= LANDLORD_BONUS_MIN_SCORE {
        LANDLORD_BONUS
    } else {
        0.0
    };

    f64::from(scores.property) * PROPERTY_WEIGHT
        + f64::from(scores.financial) * FINANCIAL_WEIGHT
        + f64::from(scores.behavioral) * BEHAVIORAL_WEIGHT
        + landlord_bonus
}

/// Below the nurture threshold is a soft reject: real sub-scores, no reasons.
pub(crate) fn tier_for(weighted: f64) -> QualificationTier {
    if weighted >= HOT_THRESHOLD {
        QualificationTier::Hot
    } else if weighted >= QUALIFIED_THRESHOLD {
        QualificationTier::Qualified
    } else if weighted >= NURTURE_THRESHOLD {
        QualificationTier::Nurture
    } else {
        QualificationTier::Reject
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inbound lead as captured by intake forms, scrapers, or CRM exports.
///
/// Every attribute is optional. Identity and address fields are carried for
/// downstream routing and enrichment but never influence scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,

    pub source: Option<String>,
    pub property_type: Option<String>,
    pub is_landlord: Option<bool>,
    pub property_count: Option<u32>,

    pub roof_type: Option<String>,
    pub roof_age_years: Option<u32>,
    pub shading_level: Option<String>,
    pub hoa_allows_solar: Option<String>,

    /// Drive time from the service hub, in minutes.
    pub distance_minutes: Option<u32>,

    /// Free-text bill range such as `"$200–$400"`.
    pub monthly_bill_raw: Option<String>,
    /// Numeric bill estimate; authoritative over `monthly_bill_raw` when present.
    pub monthly_bill: Option<f64>,
    pub true_up_band: Option<String>,
    pub credit_band: Option<String>,

    pub motivation: Option<String>,
    pub decision_style: Option<String>,
}

impl LeadRecord {
    pub fn is_landlord(&self) -> bool {
        self.is_landlord.unwrap_or(false)
    }

    pub fn property_count(&self) -> u32 {
        self.property_count.unwrap_or(0)
    }

    /// Fill property attributes that are still absent, leaving captured values intact.
    pub fn fill_missing_property_facts(&mut self, facts: PropertyFacts) {
        fill_text(&mut self.roof_type, facts.roof_type);
        fill_text(&mut self.shading_level, facts.shading_level);
        fill_text(&mut self.hoa_allows_solar, facts.hoa_allows_solar);
        if self.roof_age_years.is_none() {
            self.roof_age_years = facts.roof_age_years;
        }
        if self.distance_minutes.is_none() {
            self.distance_minutes = facts.distance_minutes;
        }
    }
}

fn fill_text(slot: &mut Option<String>, candidate: Option<String>) {
    if present(slot.as_deref()).is_none() {
        if let Some(value) = candidate.filter(|value| !value.is_empty()) {
            *slot = Some(value);
        }
    }
}

/// Returns the text only when it carries content; empty strings count as absent.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Property attributes an external lookup may contribute before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFacts {
    pub roof_type: Option<String>,
    pub roof_age_years: Option<u32>,
    pub shading_level: Option<String>,
    pub hoa_allows_solar: Option<String>,
    pub distance_minutes: Option<u32>,
}

/// Final qualification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualificationTier {
    Hot,
    Qualified,
    Nurture,
    Reject,
}

impl QualificationTier {
    pub fn label(&self) -> &'static str {
        match self {
            QualificationTier::Hot => "HOT",
            QualificationTier::Qualified => "QUALIFIED",
            QualificationTier::Nurture => "NURTURE",
            QualificationTier::Reject => "REJECT",
        }
    }
}

impl fmt::Display for QualificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Purchasing temperament inferred from the stated decision style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuyerType {
    #[serde(rename = "Quality Focused")]
    QualityFocused,
    #[serde(rename = "Trusts Experts")]
    TrustsExperts,
    #[serde(rename = "Price Shopper")]
    PriceShopper,
    #[serde(rename = "Discount Seeker")]
    DiscountSeeker,
    #[default]
    Unknown,
}

impl BuyerType {
    pub fn label(&self) -> &'static str {
        match self {
            BuyerType::QualityFocused => "Quality Focused",
            BuyerType::TrustsExperts => "Trusts Experts",
            BuyerType::PriceShopper => "Price Shopper",
            BuyerType::DiscountSeeker => "Discount Seeker",
            BuyerType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BuyerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Messaging tag derived from the lead's motivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainPoint {
    HighBills,
    EnvironmentalImpact,
    GridDependence,
    QualityEquipment,
}

impl PainPoint {
    pub fn label(&self) -> &'static str {
        match self {
            PainPoint::HighBills => "high_bills",
            PainPoint::EnvironmentalImpact => "environmental_impact",
            PainPoint::GridDependence => "grid_dependence",
            PainPoint::QualityEquipment => "quality_equipment",
        }
    }
}

/// Hard disqualification raised before any graduated scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    #[serde(rename = "Outside 90-minute radius")]
    OutsideServiceRadius,
    #[serde(rename = "Wood shake roof")]
    WoodShakeRoof,
    #[serde(rename = "Excessive shading")]
    ExcessiveShading,
    #[serde(rename = "Monthly bill under $150")]
    LowMonthlyBill,
    #[serde(rename = "HOA does not allow solar")]
    HoaRestricted,
    #[serde(rename = "Roof likely needs replacement within 5 years")]
    AgingRoof,
    #[serde(rename = "Credit score below 650")]
    LowCredit,
}

impl RejectReason {
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::OutsideServiceRadius => "Outside 90-minute radius",
            RejectReason::WoodShakeRoof => "Wood shake roof",
            RejectReason::ExcessiveShading => "Excessive shading",
            RejectReason::LowMonthlyBill => "Monthly bill under $150",
            RejectReason::HoaRestricted => "HOA does not allow solar",
            RejectReason::AgingRoof => "Roof likely needs replacement within 5 years",
            RejectReason::LowCredit => "Credit score below 650",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scoring decision returned for every lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScore {
    pub property_score: u8,
    pub financial_score: u8,
    pub behavioral_score: u8,
    pub landlord_score: u8,
    pub ai_tier: QualificationTier,
    pub buyer_type: BuyerType,
    pub pain_points: Vec<PainPoint>,
    pub reject_reasons: Vec<RejectReason>,
}

impl LeadScore {
    pub fn is_hard_reject(&self) -> bool {
        !self.reject_reasons.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_hard_reject() {
            let reasons = self
                .reject_reasons
                .iter()
                .map(RejectReason::label)
                .collect::<Vec<_>>()
                .join("; ");
            return format!("{} ({reasons})", self.ai_tier);
        }

        format!(
            "{} | property {} | financial {} | behavioral {} | landlord {} | {}",
            self.ai_tier,
            self.property_score,
            self.financial_score,
            self.behavioral_score,
            self.landlord_score,
            self.buyer_type
        )
    }
}

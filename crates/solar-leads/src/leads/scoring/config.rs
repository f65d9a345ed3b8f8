//! Tunable thresholds, point adjustments, and weights for lead qualification.

// Hard disqualification limits.
pub const MAX_DISTANCE_MINUTES: u32 = 90;
pub const MIN_MONTHLY_BILL: f64 = 150.0;
pub const MAX_ROOF_AGE_YEARS: u32 = 15;
pub const DISQUALIFYING_CREDIT_PREFIX: &str = "under 650";

// Placeholder sub-scores reported with a hard reject.
pub const REJECT_PROPERTY_SCORE: u8 = 20;
pub const REJECT_FINANCIAL_SCORE: u8 = 20;
pub const REJECT_BEHAVIORAL_SCORE: u8 = 40;
pub const REJECT_LANDLORD_SCORE: u8 = 0;

pub const MIN_SUB_SCORE: i32 = 0;
pub const MAX_SUB_SCORE: i32 = 100;

// Property
pub const PROPERTY_BASE: i32 = 50;
pub const PREMIUM_ROOF_POINTS: i32 = 25;
pub const STANDARD_ROOF_POINTS: i32 = 15;
pub const NEW_ROOF_MAX_AGE: u32 = 5;
pub const NEW_ROOF_POINTS: i32 = 20;
pub const MID_ROOF_MAX_AGE: u32 = 10;
pub const MID_ROOF_POINTS: i32 = 10;
pub const FULL_SUN_POINTS: i32 = 15;
pub const MOSTLY_SUNNY_POINTS: i32 = 10;

// Financial
pub const FINANCIAL_BASE: i32 = 40;
pub const HIGH_BILL_THRESHOLD: f64 = 400.0;
pub const HIGH_BILL_POINTS: i32 = 30;
pub const MID_BILL_THRESHOLD: f64 = 200.0;
pub const MID_BILL_POINTS: i32 = 20;
pub const LOW_BILL_POINTS: i32 = 10;
pub const LARGE_TRUE_UP_POINTS: i32 = 20;
pub const SMALL_TRUE_UP_POINTS: i32 = 10;
pub const PRIME_CREDIT_PREFIX: &str = "720";
pub const PRIME_CREDIT_POINTS: i32 = 20;
/// Matched against the raw band text; the en-dash and hyphen spellings are listed separately.
pub const NEAR_PRIME_CREDIT_BANDS: &[&str] = &["650\u{2013}719", "650-719"];
pub const NEAR_PRIME_CREDIT_POINTS: i32 = 10;

// Behavioral
pub const BEHAVIORAL_BASE: i32 = 50;
pub const QUALITY_FOCUSED_POINTS: i32 = 25;
pub const TRUSTS_EXPERTS_POINTS: i32 = 20;
pub const PRICE_SHOPPER_POINTS: i32 = -10;
pub const DISCOUNT_SEEKER_POINTS: i32 = -5;

// Landlord
pub const LANDLORD_BASE: u8 = 60;
pub const LARGE_PORTFOLIO_MIN: u32 = 10;
pub const LARGE_PORTFOLIO_SCORE: u8 = 100;
pub const MID_PORTFOLIO_MIN: u32 = 6;
pub const MID_PORTFOLIO_SCORE: u8 = 85;
pub const SMALL_PORTFOLIO_MIN: u32 = 3;
pub const SMALL_PORTFOLIO_SCORE: u8 = 75;

// Composite
pub const PROPERTY_WEIGHT: f64 = 0.40;
pub const FINANCIAL_WEIGHT: f64 = 0.35;
pub const BEHAVIORAL_WEIGHT: f64 = 0.25;
pub const LANDLORD_BONUS_MIN_SCORE: u8 = 75;
pub const LANDLORD_BONUS: f64 = 15.0;
pub const HOT_THRESHOLD: f64 = 90.0;
pub const QUALIFIED_THRESHOLD: f64 = 75.0;
pub const NURTURE_THRESHOLD: f64 = 60.0;

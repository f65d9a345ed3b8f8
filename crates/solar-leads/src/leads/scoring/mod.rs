pub mod config;
mod policy;
mod rules;

use super::domain::{LeadRecord, LeadScore};
use super::normalizer::NormalizedSignals;
use rules::SubScores;
use serde::Serialize;
use tracing::debug;

/// Stateless evaluator applying hard disqualifications, then graduated scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadScoringEngine;

impl LeadScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, lead: &LeadRecord) -> LeadScore {
        self.evaluate(lead).score
    }

    /// Score plus the intermediate signals, for audits and the CLI.
    pub fn evaluate(&self, lead: &LeadRecord) -> LeadEvaluation {
        let signals = NormalizedSignals::from_lead(lead);

        let reject_reasons = policy::disqualifications(lead, &signals);
        if !reject_reasons.is_empty() {
            debug!(reasons = ?reject_reasons, "lead hard rejected");
            return LeadEvaluation {
                score: policy::hard_reject(reject_reasons),
                signals,
                weighted_total: None,
            };
        }

        let behavioral = rules::behavioral_profile(&signals);
        let sub_scores = SubScores {
            property: rules::property_score(lead, &signals),
            financial: rules::financial_score(&signals),
            behavioral: behavioral.score,
            landlord: rules::landlord_score(lead),
        };

        let weighted_total = policy::weighted_composite(&sub_scores);
        let tier = policy::tier_for(weighted_total);
        debug!(weighted_total, %tier, "lead scored");

        LeadEvaluation {
            score: LeadScore {
                property_score: sub_scores.property,
                financial_score: sub_scores.financial,
                behavioral_score: sub_scores.behavioral,
                landlord_score: sub_scores.landlord,
                ai_tier: tier,
                buyer_type: behavioral.buyer_type,
                pain_points: behavioral.pain_points,
                reject_reasons: Vec::new(),
            },
            signals,
            weighted_total: Some(weighted_total),
        }
    }
}

/// Scores a lead with the default engine.
pub fn score(lead: &LeadRecord) -> LeadScore {
    LeadScoringEngine::new().score(lead)
}

/// Evaluation trail: the decision, the normalized inputs, and the composite behind the tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadEvaluation {
    pub score: LeadScore,
    pub signals: NormalizedSignals,
    /// Absent when a hard disqualification short-circuited scoring.
    pub weighted_total: Option<f64>,
}

use serde::Serialize;

use super::domain::{SchoolStratification, StratificationResult, TierBreakdown};

/// Render-ready view of one scope result, with labels resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeResultView {
    pub scope_key: &'static str,
    pub scope_label: &'static str,
    pub score: u32,
    pub score_category: &'static str,
    pub tier_achieved: &'static str,
    pub tiers: Vec<TierBreakdownView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierBreakdownView {
    pub tier: &'static str,
    pub defined: usize,
    pub answered: usize,
    pub affirmative: usize,
    pub satisfied: bool,
}

/// Render-ready view of a whole-school stratification report.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolStratificationView {
    pub institution: String,
    pub overall_tier: &'static str,
    pub scopes: Vec<ScopeResultView>,
}

impl From<&StratificationResult> for ScopeResultView {
    fn from(result: &StratificationResult) -> Self {
        Self {
            scope_key: result.scope.key(),
            scope_label: result.scope.label(),
            score: result.score,
            score_category: result.score_category.label(),
            tier_achieved: result.tier_achieved.label(),
            tiers: result.breakdown.iter().map(TierBreakdownView::from).collect(),
        }
    }
}

impl From<&TierBreakdown> for TierBreakdownView {
    fn from(entry: &TierBreakdown) -> Self {
        Self {
            tier: entry.tier.label(),
            defined: entry.defined,
            answered: entry.answered,
            affirmative: entry.affirmative,
            satisfied: entry.satisfied,
        }
    }
}

impl From<&SchoolStratification> for SchoolStratificationView {
    fn from(report: &SchoolStratification) -> Self {
        Self {
            institution: report.institution.0.clone(),
            overall_tier: report.overall_tier.label(),
            scopes: report.scopes.iter().map(ScopeResultView::from).collect(),
        }
    }
}

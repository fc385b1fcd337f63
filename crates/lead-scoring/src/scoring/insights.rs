use std::fmt;

use super::domain::{CompanyTierKind, CompositeScore, JobLevel};

/// Independent advisory rule evaluated against a composed score.
#[derive(Clone, Copy)]
pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&CompositeScore) -> bool,
    pub message: &'static str,
}

impl InsightRule {
    pub const fn new(
        name: &'static str,
        applies: fn(&CompositeScore) -> bool,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            applies,
            message,
        }
    }

    pub fn evaluate(&self, lead: &CompositeScore) -> Option<&'static str> {
        (self.applies)(lead).then_some(self.message)
    }
}

impl fmt::Debug for InsightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

pub const C_LEVEL_INSIGHT: &str =
    "C-level executive with budget authority and decision-making power";
pub const SALES_DEPARTMENT_INSIGHT: &str =
    "Works in sales, likely to understand the value of sales tooling";
pub const ENTERPRISE_INSIGHT: &str = "Enterprise company with significant budget potential";
pub const HIGH_SCORE_INSIGHT: &str = "High-value lead, prioritize for immediate follow-up";

/// Only the literal "sales" department qualifies; "business development" earns the
/// composer bonus but not this insight.
fn is_sales_department(lead: &CompositeScore) -> bool {
    lead.job_analysis.department == "sales"
}

fn is_c_level(lead: &CompositeScore) -> bool {
    lead.job_analysis.level == JobLevel::CLevel
}

fn is_enterprise(lead: &CompositeScore) -> bool {
    lead.company_analysis.tier == CompanyTierKind::Enterprise
}

fn is_high_score(lead: &CompositeScore) -> bool {
    lead.total_score >= 80
}

/// Default rules in output order.
pub const DEFAULT_INSIGHT_RULES: &[InsightRule] = &[
    InsightRule::new("c_level", is_c_level, C_LEVEL_INSIGHT),
    InsightRule::new("sales_department", is_sales_department, SALES_DEPARTMENT_INSIGHT),
    InsightRule::new("enterprise", is_enterprise, ENTERPRISE_INSIGHT),
    InsightRule::new("high_score", is_high_score, HIGH_SCORE_INSIGHT),
];

pub fn generate_insights(lead: &CompositeScore, rules: &[InsightRule]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule.evaluate(lead))
        .map(str::to_string)
        .collect()
}

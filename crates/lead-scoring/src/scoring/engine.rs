use std::borrow::Cow;

use super::company::analyze_company;
use super::criteria::ScoringCriteria;
use super::domain::{CompanyInput, CompositeScore, JobInput, LeadAnalysis, Priority};
use super::insights::{generate_insights, InsightRule, DEFAULT_INSIGHT_RULES};
use super::job::analyze_job_title;

const MAX_SCORE: f64 = 100.0;
const SALES_DEPARTMENT_BONUS: f64 = 1.2;
const BONUS_DEPARTMENTS: &[&str] = &["sales", "business development"];

/// Stateless scorer over the shared criteria tables.
#[derive(Debug, Clone)]
pub struct LeadScoringEngine {
    criteria: &'static ScoringCriteria,
    rules: Cow<'static, [InsightRule]>,
}

impl Default for LeadScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl LeadScoringEngine {
    pub fn standard() -> Self {
        Self::new(ScoringCriteria::standard())
    }

    pub fn new(criteria: &'static ScoringCriteria) -> Self {
        Self {
            criteria,
            rules: Cow::Borrowed(DEFAULT_INSIGHT_RULES),
        }
    }

    /// Replaces the insight rule list; rules fire in the given order.
    pub fn with_insight_rules(mut self, rules: Vec<InsightRule>) -> Self {
        self.rules = Cow::Owned(rules);
        self
    }

    pub fn criteria(&self) -> &'static ScoringCriteria {
        self.criteria
    }

    /// Classifies both halves of the lead and folds them into a bounded score.
    ///
    /// The job score is scaled by the company weight, boosted for sales-facing
    /// departments, and multiplied by the industry factor. The result is capped at
    /// 100 before rounding; the priority bucket is read off the rounded score, so a
    /// scaled 79.5 becomes 80 and lands in "high".
    pub fn compose(&self, job: &JobInput, company: &CompanyInput) -> CompositeScore {
        let job_analysis = analyze_job_title(job.title.as_deref(), self.criteria);
        let company_analysis = analyze_company(company, self.criteria);

        let company_factor = f64::from(company_analysis.weight) / 100.0;
        let mut scaled = f64::from(job_analysis.score) * company_factor;

        if BONUS_DEPARTMENTS.contains(&job_analysis.department.as_str()) {
            scaled *= SALES_DEPARTMENT_BONUS;
        }

        let industry_key = company_analysis.industry.to_lowercase();
        scaled *= self.criteria.industry_multiplier(&industry_key);

        let total_score = scaled.clamp(0.0, MAX_SCORE).round() as u8;

        CompositeScore {
            total_score,
            job_analysis,
            company_analysis,
            priority: Priority::from_score(total_score),
        }
    }

    pub fn analyze(&self, job: &JobInput, company: &CompanyInput) -> LeadAnalysis {
        let composite = self.compose(job, company);
        let insights = generate_insights(&composite, &self.rules);
        LeadAnalysis::from_composite(composite, insights)
    }
}

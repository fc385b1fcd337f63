use super::criteria::ScoringCriteria;
use super::domain::{CompanyAnalysis, CompanyInput};

const UNKNOWN: &str = "unknown";

/// Places a company into the first size bracket containing its head count.
///
/// Head counts outside every bracket (zero or negative) take the startup fallback.
/// Industry and location pass through untouched apart from defaulting to `unknown`.
pub fn analyze_company(company: &CompanyInput, criteria: &ScoringCriteria) -> CompanyAnalysis {
    let tier = criteria
        .company_tiers
        .iter()
        .find(|tier| tier.contains(company.employees))
        .copied()
        .unwrap_or(criteria.fallback_tier);

    CompanyAnalysis {
        tier: tier.kind,
        weight: tier.weight,
        employees: company.employees,
        industry: or_unknown(company.industry.as_deref()),
        location: or_unknown(company.location.as_deref()),
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

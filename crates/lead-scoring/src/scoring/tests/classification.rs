use serde_json::json;

use super::common::*;
use crate::scoring::criteria::{COMPANY_TIERS, FALLBACK_TIER};
use crate::scoring::{
    analyze_company, analyze_job_title, CompanyInput, CompanyTierKind, JobLevel, ScoringCriteria,
};

fn classify(title: &str) -> (u8, JobLevel, String) {
    let analysis = analyze_job_title(Some(title), ScoringCriteria::standard());
    (analysis.score, analysis.level, analysis.department)
}

#[test]
fn chief_titles_are_c_level_without_department() {
    let (score, level, department) = classify("Chief Executive Officer");
    assert_eq!(score, 100);
    assert_eq!(level, JobLevel::CLevel);
    assert_eq!(department, "unknown");
}

#[test]
fn sales_director_takes_director_weight_and_sales_department() {
    let (score, level, department) = classify("Sales Director");
    assert_eq!(score, 85);
    assert_eq!(level, JobLevel::Director);
    assert_eq!(department, "sales");
}

#[test]
fn missing_title_is_unknown_rather_than_individual_contributor() {
    for title in [None, Some("")] {
        let analysis = analyze_job_title(title, ScoringCriteria::standard());
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.level, JobLevel::Unknown);
        assert_eq!(analysis.department, "unknown");
    }

    let (score, level, _) = classify("Barista");
    assert_eq!(score, 0);
    assert_eq!(level, JobLevel::IndividualContributor);

    let (_, level, _) = classify("   ");
    assert_eq!(level, JobLevel::IndividualContributor);
}

#[test]
fn vice_president_spellings_share_a_level() {
    let (long_score, long_level, long_department) = classify("Vice President of Sales");
    let (short_score, short_level, short_department) = classify("VP Sales");
    assert_eq!(long_level, short_level);
    assert_eq!(long_level, JobLevel::Director);
    assert_eq!(long_score, short_score);
    assert_eq!(long_department, "sales");
    assert_eq!(short_department, "sales");
}

#[test]
fn owner_roles_outside_ownership_are_not_c_level() {
    for title in ["Product Owner", "Process Owner"] {
        let (_, level, _) = classify(title);
        assert_ne!(level, JobLevel::CLevel, "title {title}");
    }

    let (score, level, _) = classify("Business Owner");
    assert_eq!(score, 92);
    assert_eq!(level, JobLevel::CLevel);
}

#[test]
fn keywords_match_inside_longer_words() {
    let (score, level, _) = classify("Leadership Coach");
    assert_eq!(score, 65);
    assert_eq!(level, JobLevel::Manager);
}

#[test]
fn highest_weight_wins_and_matching_ignores_case() {
    let (score, level, department) = classify("Senior Marketing Manager");
    assert_eq!(score, 70);
    assert_eq!(level, JobLevel::Manager);
    assert_eq!(department, "marketing");

    let (score, level, department) = classify("VP OF MARKETING");
    assert_eq!(score, 88);
    assert_eq!(level, JobLevel::Director);
    assert_eq!(department, "marketing");
}

#[test]
fn department_follows_table_order_not_title_order() {
    let (_, _, department) = classify("Marketing and Sales Manager");
    assert_eq!(department, "sales");

    let (_, _, department) = classify("Marketing & Business Development Lead");
    assert_eq!(department, "business development");
}

#[test]
fn level_thresholds_are_inclusive_lower_bounds() {
    let cases = [
        (100, JobLevel::CLevel),
        (90, JobLevel::CLevel),
        (89, JobLevel::Director),
        (80, JobLevel::Director),
        (79, JobLevel::Manager),
        (65, JobLevel::Manager),
        (64, JobLevel::Specialist),
        (45, JobLevel::Specialist),
        (44, JobLevel::IndividualContributor),
        (0, JobLevel::IndividualContributor),
    ];
    for (weight, expected) in cases {
        assert_eq!(JobLevel::from_weight(weight), expected, "weight {weight}");
    }
}

#[test]
fn tier_boundaries_are_inclusive() {
    let cases = [
        (1, CompanyTierKind::Startup, 40),
        (9, CompanyTierKind::Startup, 40),
        (10, CompanyTierKind::Small, 55),
        (49, CompanyTierKind::Small, 55),
        (50, CompanyTierKind::Medium, 70),
        (249, CompanyTierKind::Medium, 70),
        (250, CompanyTierKind::Large, 85),
        (999, CompanyTierKind::Large, 85),
        (1000, CompanyTierKind::Enterprise, 100),
        (1_000_000, CompanyTierKind::Enterprise, 100),
    ];
    for (employees, tier, weight) in cases {
        let analysis = analyze_company(&company(employees, None), ScoringCriteria::standard());
        assert_eq!(analysis.tier, tier, "employees {employees}");
        assert_eq!(analysis.weight, weight, "employees {employees}");
        assert_eq!(analysis.employees, employees);
    }
}

#[test]
fn tiers_partition_positive_head_counts() {
    for employees in 1..=5_000 {
        let matches = COMPANY_TIERS
            .iter()
            .filter(|tier| tier.contains(employees))
            .count();
        assert_eq!(matches, 1, "employees {employees}");
    }
}

#[test]
fn non_positive_head_counts_fall_back_to_startup() {
    for employees in [0, -1, -250] {
        assert!(COMPANY_TIERS.iter().all(|tier| !tier.contains(employees)));
        let analysis = analyze_company(&company(employees, None), ScoringCriteria::standard());
        assert_eq!(analysis.tier, FALLBACK_TIER.kind);
        assert_eq!(analysis.tier, CompanyTierKind::Startup);
        assert_eq!(analysis.weight, 40);
    }
}

#[test]
fn industry_and_location_pass_through_or_default() {
    let input = company(120, Some("Technology")).with_location("Berlin");
    let analysis = analyze_company(&input, ScoringCriteria::standard());
    assert_eq!(analysis.industry, "Technology");
    assert_eq!(analysis.location, "Berlin");

    let input = CompanyInput {
        employees: 120,
        industry: Some(String::new()),
        location: None,
    };
    let analysis = analyze_company(&input, ScoringCriteria::standard());
    assert_eq!(analysis.industry, "unknown");
    assert_eq!(analysis.location, "unknown");
}

#[test]
fn employee_counts_deserialize_leniently() {
    let cases = [
        (json!({ "employees": 1500 }), 1500),
        (json!({ "employees": "1500" }), 1500),
        (json!({ "employees": 250.7 }), 250),
        (json!({ "employees": "many" }), 0),
        (json!({ "employees": null }), 0),
        (json!({}), 0),
    ];
    for (raw, expected) in cases {
        let input: CompanyInput = serde_json::from_value(raw.clone()).expect("company decodes");
        assert_eq!(input.employees, expected, "payload {raw}");
    }
}

#[test]
fn criteria_snapshot_exposes_tables_by_keyword() {
    let snapshot = serde_json::to_value(ScoringCriteria::standard()).expect("serializes");

    assert_eq!(snapshot["jobTitleWeights"]["director"], json!(85));
    assert_eq!(snapshot["jobTitleWeights"]["chief"], json!(100));
    assert_eq!(snapshot["departmentWeights"]["sales"], json!(100));
    assert_eq!(snapshot["companyTiers"]["enterprise"]["min"], json!(1000));
    assert!(snapshot["companyTiers"]["enterprise"]["max"].is_null());
    assert_eq!(snapshot["companyTiers"]["startup"]["weight"], json!(40));
    assert_eq!(snapshot["industryMultipliers"]["saas"], json!(1.15));
}

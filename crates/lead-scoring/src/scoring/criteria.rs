use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::domain::CompanyTierKind;

/// Title keyword weights. A title takes the highest weight among every keyword it
/// contains, so short acronyms that hide inside common words (`cto` in "director",
/// `coo` in "coordinator", bare `owner` in "Product Owner") are left out. `vp` and
/// `president` share a band since every "vice president" also contains "president".
pub const JOB_TITLE_WEIGHTS: &[(&str, u8)] = &[
    ("chief", 100),
    ("ceo", 100),
    ("cfo", 95),
    ("founder", 95),
    ("business owner", 92),
    ("proprietor", 92),
    ("president", 88),
    ("vp", 88),
    ("head", 85),
    ("director", 85),
    ("manager", 70),
    ("lead", 65),
    ("principal", 60),
    ("senior", 55),
    ("architect", 55),
    ("specialist", 50),
    ("consultant", 50),
    ("analyst", 45),
    ("engineer", 40),
    ("coordinator", 35),
    ("associate", 30),
    ("assistant", 25),
    ("intern", 10),
];

/// Department keywords in match order; the first keyword found in the title wins.
pub const DEPARTMENT_WEIGHTS: &[(&str, u8)] = &[
    ("sales", 100),
    ("business development", 95),
    ("revenue", 90),
    ("marketing", 80),
    ("growth", 75),
    ("customer success", 70),
    ("operations", 65),
    ("product", 60),
    ("engineering", 55),
    ("technology", 55),
    ("finance", 50),
    ("human resources", 40),
];

/// Size brackets, scanned largest first.
pub const COMPANY_TIERS: &[CompanyTier] = &[
    CompanyTier::new(CompanyTierKind::Enterprise, 100, 1000, None),
    CompanyTier::new(CompanyTierKind::Large, 85, 250, Some(999)),
    CompanyTier::new(CompanyTierKind::Medium, 70, 50, Some(249)),
    CompanyTier::new(CompanyTierKind::Small, 55, 10, Some(49)),
    CompanyTier::new(CompanyTierKind::Startup, 40, 1, Some(9)),
];

/// Used when no bracket contains the head count (zero, negative, unparseable).
pub const FALLBACK_TIER: CompanyTier = CompanyTier::new(CompanyTierKind::Startup, 40, 1, Some(9));

/// Exact-match multipliers keyed by lowercased industry. Unlisted industries use 1.0.
pub const INDUSTRY_MULTIPLIERS: &[(&str, f64)] = &[
    ("technology", 1.1),
    ("software", 1.1),
    ("saas", 1.15),
    ("finance", 1.05),
    ("healthcare", 1.05),
    ("manufacturing", 0.95),
    ("retail", 0.9),
];

pub const DEFAULT_INDUSTRY_MULTIPLIER: f64 = 1.0;

/// Company size bracket with an inclusive employee range; `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanyTier {
    #[serde(skip)]
    pub kind: CompanyTierKind,
    pub min: i64,
    pub max: Option<i64>,
    pub weight: u8,
}

impl CompanyTier {
    pub const fn new(kind: CompanyTierKind, weight: u8, min: i64, max: Option<i64>) -> Self {
        Self {
            kind,
            min,
            max,
            weight,
        }
    }

    pub fn contains(&self, employees: i64) -> bool {
        employees >= self.min && self.max.map_or(true, |max| employees <= max)
    }
}

/// Read-only scoring tables shared by every request.
#[derive(Debug, PartialEq)]
pub struct ScoringCriteria {
    pub job_title_weights: &'static [(&'static str, u8)],
    pub department_weights: &'static [(&'static str, u8)],
    pub company_tiers: &'static [CompanyTier],
    pub fallback_tier: CompanyTier,
    pub industry_multipliers: &'static [(&'static str, f64)],
}

static STANDARD_CRITERIA: ScoringCriteria = ScoringCriteria {
    job_title_weights: JOB_TITLE_WEIGHTS,
    department_weights: DEPARTMENT_WEIGHTS,
    company_tiers: COMPANY_TIERS,
    fallback_tier: FALLBACK_TIER,
    industry_multipliers: INDUSTRY_MULTIPLIERS,
};

impl ScoringCriteria {
    pub fn standard() -> &'static ScoringCriteria {
        &STANDARD_CRITERIA
    }

    /// `industry` must already be lowercased.
    pub fn industry_multiplier(&self, industry: &str) -> f64 {
        self.industry_multipliers
            .iter()
            .find(|(key, _)| *key == industry)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(DEFAULT_INDUSTRY_MULTIPLIER)
    }
}

struct KeywordTable<'a, T>(&'a [(&'static str, T)]);

impl<T: Serialize> Serialize for KeywordTable<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(keyword, value)| (*keyword, value)))
    }
}

struct TierTable<'a>(&'a [CompanyTier]);

impl Serialize for TierTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|tier| (tier.kind.label(), tier)))
    }
}

impl Serialize for ScoringCriteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoringCriteria", 4)?;
        state.serialize_field("jobTitleWeights", &KeywordTable(self.job_title_weights))?;
        state.serialize_field(
            "departmentWeights",
            &KeywordTable(self.department_weights),
        )?;
        state.serialize_field("companyTiers", &TierTable(self.company_tiers))?;
        state.serialize_field(
            "industryMultipliers",
            &KeywordTable(self.industry_multipliers),
        )?;
        state.end()
    }
}

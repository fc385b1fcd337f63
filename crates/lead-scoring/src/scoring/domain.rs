use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Job portion of a lead as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub title: Option<String>,
}

impl JobInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Employer portion of a lead. Only the head count drives the tier; industry and
/// location are carried through to the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInput {
    #[serde(default, deserialize_with = "deserialize_employee_count")]
    pub employees: i64,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CompanyInput {
    pub fn new(employees: i64) -> Self {
        Self {
            employees,
            ..Self::default()
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Accepts integers, floats (truncated), and numeric strings. Anything else maps to 0,
/// which lands in the startup fallback tier.
fn deserialize_employee_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(employee_count_from_value(&raw))
}

pub(crate) fn employee_count_from_value(raw: &Value) -> i64 {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64))
            .unwrap_or(0),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|value| value.trunc() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Seniority bucket derived from the best matching title weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLevel {
    CLevel,
    Director,
    Manager,
    Specialist,
    IndividualContributor,
    Unknown,
}

impl JobLevel {
    pub fn from_weight(weight: u8) -> Self {
        match weight {
            90..=u8::MAX => Self::CLevel,
            80..=89 => Self::Director,
            65..=79 => Self::Manager,
            45..=64 => Self::Specialist,
            _ => Self::IndividualContributor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CLevel => "c_level",
            Self::Director => "director",
            Self::Manager => "manager",
            Self::Specialist => "specialist",
            Self::IndividualContributor => "individual_contributor",
            Self::Unknown => "unknown",
        }
    }
}

/// Company size bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyTierKind {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanyTierKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Coarse triage bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Priority {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::High,
            60..=79 => Self::Medium,
            40..=59 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very_low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub score: u8,
    pub level: JobLevel,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub tier: CompanyTierKind,
    pub weight: u8,
    pub employees: i64,
    pub industry: String,
    pub location: String,
}

/// Composed score before insights are attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub total_score: u8,
    pub job_analysis: JobAnalysis,
    pub company_analysis: CompanyAnalysis,
    pub priority: Priority,
}

/// Full per-lead result returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalysis {
    pub total_score: u8,
    pub job_analysis: JobAnalysis,
    pub company_analysis: CompanyAnalysis,
    pub priority: Priority,
    pub insights: Vec<String>,
}

impl LeadAnalysis {
    pub(crate) fn from_composite(composite: CompositeScore, insights: Vec<String>) -> Self {
        let CompositeScore {
            total_score,
            job_analysis,
            company_analysis,
            priority,
        } = composite;

        Self {
            total_score,
            job_analysis,
            company_analysis,
            priority,
            insights,
        }
    }
}

use super::criteria::ScoringCriteria;
use super::domain::{JobAnalysis, JobLevel};

const UNKNOWN_DEPARTMENT: &str = "unknown";

/// Classifies a free-text job title.
///
/// Keywords match as lowercase substrings, so `lead` also hits "leadership". The
/// score is the highest weight among all matching keywords and the level follows
/// from that weight alone. A missing or empty title is reported as `unknown`, while
/// a present title with no matching keyword is an individual contributor at 0.
pub fn analyze_job_title(title: Option<&str>, criteria: &ScoringCriteria) -> JobAnalysis {
    let title = match title {
        Some(title) if !title.is_empty() => title.to_lowercase(),
        _ => {
            return JobAnalysis {
                score: 0,
                level: JobLevel::Unknown,
                department: UNKNOWN_DEPARTMENT.to_string(),
            }
        }
    };

    let score = criteria
        .job_title_weights
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .map(|(_, weight)| *weight)
        .max()
        .unwrap_or(0);

    JobAnalysis {
        score,
        level: JobLevel::from_weight(score),
        department: detect_department(&title, criteria),
    }
}

/// First department keyword in table order contained in the lowercased title.
fn detect_department(title: &str, criteria: &ScoringCriteria) -> String {
    criteria
        .department_weights
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(keyword, _)| (*keyword).to_string())
        .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string())
}

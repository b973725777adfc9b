//! Check report assembly: input validation, fallback policy, disclaimers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CheckError;
use crate::matcher::{detect_red_flags, match_conditions, MatchResult};

pub const FALLBACK_NAME: &str = "Uncertain / Not detected (limited-check)";
const FALLBACK_EXPLANATION: &str = "The symptoms you provided do not strongly match the limited set of common conditions this demo checks for.";
const FALLBACK_ADVICE: &str = "This demo is intentionally limited. For persistent, worsening, or concerning symptoms, see a healthcare professional. If symptoms are severe, seek emergency care.";

/// Attached to every successful report, always in this order.
pub const DISCLAIMERS: [&str; 3] = [
    "Educational purposes only — not medical advice.",
    "If you have severe or emergency symptoms (e.g., chest pain, difficulty breathing, heavy bleeding), seek emergency care immediately.",
    "AI-based symptom checkers can be wrong; consult a qualified healthcare professional for diagnosis and treatment.",
];

/// One entry of `possibleConditions`. Scores are used for ranking only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionSummary {
    pub name: String,
    pub explanation: String,
    pub advice: String,
}

impl ConditionSummary {
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            explanation: FALLBACK_EXPLANATION.to_string(),
            advice: FALLBACK_ADVICE.to_string(),
        }
    }
}

impl From<MatchResult> for ConditionSummary {
    fn from(m: MatchResult) -> Self {
        Self {
            name: m.name,
            explanation: m.explanation,
            advice: m.advice,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub input: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub red_flags: Vec<String>,
    pub possible_conditions: Vec<ConditionSummary>,
    pub disclaimers: Vec<String>,
}

impl CheckReport {
    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// True when no catalog condition matched and the fallback was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self.possible_conditions.as_slice(), [only] if only.name == FALLBACK_NAME)
    }
}

fn serialize_iso_millis<S: serde::Serializer>(
    ts: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Whitespace for blank-input purposes; a byte-order mark counts too.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Reject absent or whitespace-only symptom text.
pub fn validate_symptoms(symptoms: Option<&str>) -> Result<&str, CheckError> {
    match symptoms {
        Some(s) if !s.trim_matches(is_blank_char).is_empty() => Ok(s),
        _ => Err(CheckError::missing_symptoms()),
    }
}

/// Run red-flag detection and condition matching over `symptoms`.
pub fn check(catalog: &Catalog, symptoms: Option<&str>) -> Result<CheckReport, CheckError> {
    check_at(catalog, symptoms, Utc::now())
}

pub fn check_at(
    catalog: &Catalog,
    symptoms: Option<&str>,
    now: DateTime<Utc>,
) -> Result<CheckReport, CheckError> {
    let input = validate_symptoms(symptoms)?;

    let red_flags = detect_red_flags(catalog, input);
    let matches = match_conditions(catalog, input);
    debug!(
        red_flags = red_flags.len(),
        matches = matches.len(),
        top_score = matches.first().map(|m| m.score).unwrap_or(0),
        "symptom check complete"
    );

    let possible_conditions = if matches.is_empty() {
        vec![ConditionSummary::fallback()]
    } else {
        matches.into_iter().map(ConditionSummary::from).collect()
    };

    Ok(CheckReport {
        input: input.to_string(),
        timestamp: now,
        red_flags,
        possible_conditions,
        disclaimers: DISCLAIMERS.iter().map(|d| d.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn cold_without_red_flags() {
        let report = check(&builtin(), Some("runny nose and sore throat")).unwrap();
        assert_eq!(report.possible_conditions[0].name, "Common cold");
        assert!(report.red_flags.is_empty());
        assert!(!report.is_fallback());
    }

    #[test]
    fn unmatched_input_gets_single_fallback() {
        let report = check(&builtin(), Some("my left knee clicks")).unwrap();
        assert_eq!(report.possible_conditions.len(), 1);
        assert_eq!(report.possible_conditions[0], ConditionSummary::fallback());
        assert!(report.is_fallback());
    }

    #[test]
    fn red_flags_and_conditions_are_independent() {
        let report = check(&builtin(), Some("severe chest pain and shortness of breath")).unwrap();
        assert_eq!(report.red_flags.len(), 2);
        // No condition keyword in the text, so the fallback is still present.
        assert!(report.is_fallback());

        let report = check(&builtin(), Some("chest pain with fever and chills")).unwrap();
        assert_eq!(report.red_flags.len(), 1);
        assert_eq!(report.possible_conditions[0].name, "Influenza (flu)");
    }

    #[test]
    fn disclaimers_always_three() {
        for input in ["runny nose", "nothing relevant", "chest pain", "fever"] {
            let report = check(&builtin(), Some(input)).unwrap();
            assert_eq!(report.disclaimers.len(), 3);
            assert_eq!(report.disclaimers[0], DISCLAIMERS[0]);
            assert_eq!(report.disclaimers[2], DISCLAIMERS[2]);
        }
    }

    #[test]
    fn input_echoed_untrimmed() {
        let report = check(&builtin(), Some("  sneezing  ")).unwrap();
        assert_eq!(report.input, "  sneezing  ");
    }

    #[test]
    fn rejects_missing_and_blank() {
        let catalog = builtin();
        assert_eq!(check(&catalog, None).unwrap_err(), CheckError::missing_symptoms());
        assert!(check(&catalog, Some("")).is_err());
        assert!(check(&catalog, Some(" \t\n ")).is_err());
    }

    #[test]
    fn rejects_byte_order_mark_only() {
        let catalog = builtin();
        assert!(check(&catalog, Some("\u{feff}")).is_err());
        assert!(check(&catalog, Some(" \u{feff}\u{a0} ")).is_err());

        let report = check(&catalog, Some("\u{feff}sneezing")).unwrap();
        assert_eq!(report.input, "\u{feff}sneezing");
        assert_eq!(report.possible_conditions[0].name, "Common cold");
    }

    #[test]
    fn timestamp_is_iso_millis_utc() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let report = check_at(&builtin(), Some("headache"), now).unwrap();
        assert_eq!(report.timestamp_iso(), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn score_not_serialized() {
        let report = check(&builtin(), Some("fever")).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let first = &json["possibleConditions"][0];
        assert_eq!(first["name"], "Influenza (flu)");
        assert!(first.get("score").is_none());
        assert!(json.get("redFlags").is_some());
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{normalize, ParseError, Tenant, Tone};

/// Format of `CallLog::date_time`, e.g. `2026-01-16 10:30 AM`.
pub const CALL_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// How a call ended. Single-valued per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallOutcome {
    Successful,
    #[serde(rename = "No Answer")]
    NoAnswer,
    Voicemail,
    #[serde(rename = "Follow-up Required")]
    FollowUpRequired,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Successful => "Successful",
            CallOutcome::NoAnswer => "No Answer",
            CallOutcome::Voicemail => "Voicemail",
            CallOutcome::FollowUpRequired => "Follow-up Required",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            CallOutcome::Successful => Tone::Success,
            CallOutcome::FollowUpRequired => Tone::Warning,
            CallOutcome::NoAnswer | CallOutcome::Voicemail => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CallOutcome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "successful" => Ok(CallOutcome::Successful),
            "no-answer" => Ok(CallOutcome::NoAnswer),
            "voicemail" => Ok(CallOutcome::Voicemail),
            "follow-up-required" | "follow-up" => Ok(CallOutcome::FollowUpRequired),
            _ => Err(ParseError::CallOutcome(s.to_string())),
        }
    }
}

/// A past phone interaction. Read-only for every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallLog {
    pub id: String,
    pub lead_name: String,
    pub date_time: String,
    /// `m:ss`
    pub duration: String,
    pub outcome: CallOutcome,
    pub tenant: Tenant,
}

impl CallLog {
    /// When the call started, parsed from `date_time`.
    pub fn started_at(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.date_time, CALL_TIME_FORMAT)
    }

    /// Call length in seconds, or `None` if `duration` is not `m:ss`.
    pub fn duration_secs(&self) -> Option<u32> {
        parse_duration(&self.duration)
    }
}

/// Parse an `m:ss` duration into seconds.
pub fn parse_duration(s: &str) -> Option<u32> {
    let (minutes, seconds) = s.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Format seconds as `m:ss`.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn call(date_time: &str, duration: &str) -> CallLog {
        CallLog {
            id: "1".to_string(),
            lead_name: "John Smith".to_string(),
            date_time: date_time.to_string(),
            duration: duration.to_string(),
            outcome: CallOutcome::Successful,
            tenant: Tenant::OrganizationA,
        }
    }

    #[test]
    fn test_started_at_parses_twelve_hour_clock() {
        let log = call("2026-01-16 01:00 PM", "7:12");
        let started = log.started_at().unwrap();
        assert_eq!(started.hour(), 13);
        assert_eq!(started.minute(), 0);

        assert!(call("yesterday", "1:00").started_at().is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("5:23"), Some(323));
        assert_eq!(parse_duration("0:00"), Some(0));
        assert_eq!(parse_duration("12:05"), Some(725));
        assert_eq!(parse_duration("1:75"), None);
        assert_eq!(parse_duration("523"), None);
        assert_eq!(parse_duration("4294967295:00"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(272), "4:32");
    }

    #[test]
    fn test_outcome_serde_labels() {
        let json = serde_json::to_string(&CallOutcome::FollowUpRequired).unwrap();
        assert_eq!(json, "\"Follow-up Required\"");
        let parsed: CallOutcome = serde_json::from_str("\"No Answer\"").unwrap();
        assert_eq!(parsed, CallOutcome::NoAnswer);
    }

    #[test]
    fn test_outcome_parse() {
        assert_eq!("follow-up".parse::<CallOutcome>().unwrap(), CallOutcome::FollowUpRequired);
        assert_eq!("No Answer".parse::<CallOutcome>().unwrap(), CallOutcome::NoAnswer);
        assert!("busy".parse::<CallOutcome>().is_err());
    }
}

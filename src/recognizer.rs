use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ParsedResume;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s().-]{7,}\d").unwrap());
static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s+(?:years|yrs)").unwrap());

/// Run every field heuristic over the extracted text.
///
/// Pure and deterministic: no I/O, no shared state. Each heuristic is
/// independent and yields an optional value; a miss is a normal outcome.
/// The leftmost match always wins when several candidates exist.
pub fn recognize(text: &str) -> ParsedResume {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    ParsedResume {
        name: lines.first().map(|s| s.to_string()),
        title: lines.get(1).map(|s| s.to_string()),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        experience_years: experience_years(text),
        skills: skills(&lines),
        raw_text: text.to_string(),
    }
}

fn experience_years(text: &str) -> Option<f64> {
    YEARS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Tokenize the first line that looks like a skills list.
///
/// Only the first line containing "skill" or "technologies" is consulted;
/// later skill-like lines are ignored. The line is split on commas, pipes and
/// semicolons, tokens are trimmed, and a token that still reads as the
/// section label after stripping a leading `label:` prefix is discarded.
fn skills(lines: &[&str]) -> Vec<String> {
    let line = lines.iter().find(|line| {
        let lower = line.to_lowercase();
        lower.contains("skill") || lower.contains("technologies")
    });

    let Some(line) = line else {
        return Vec::new();
    };

    line.split([',', '|', ';'])
        .filter_map(skill_token)
        .collect()
}

fn skill_token(raw: &str) -> Option<String> {
    let mut token = raw.trim();
    if token.to_lowercase().contains("skill") {
        // "Skills: Python" keeps "Python"; a bare label like "Core Skills"
        // has nothing left and is dropped.
        token = token.split_once(':').map(|(_, rest)| rest.trim())?;
        if token.to_lowercase().contains("skill") {
            return None;
        }
    }
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_resume_scenario() {
        let text = "Jane Doe\nSenior Engineer\nEmail: jane@example.com Phone: +1 (555) 123-4567\nSkills: Python, Go | Rust\n5 years experience";
        let parsed = recognize(text);

        assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
        assert_eq!(parsed.title.as_deref(), Some("Senior Engineer"));
        assert_eq!(parsed.email.as_deref(), Some("jane@example.com"));
        assert_eq!(parsed.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(parsed.skills, vec!["Python", "Go", "Rust"]);
        assert_eq!(parsed.experience_years, Some(5.0));
        assert_eq!(parsed.raw_text, text);
    }

    #[test]
    fn empty_text_yields_all_absent() {
        let parsed = recognize("  \n \n  ");
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.experience_years, None);
        assert!(parsed.skills.is_empty());
        assert_eq!(parsed.raw_text, "  \n \n  ");
    }

    #[test]
    fn name_and_title_skip_blank_lines() {
        let parsed = recognize("\n\n  John Smith  \n\n  Data Analyst \n");
        assert_eq!(parsed.name.as_deref(), Some("John Smith"));
        assert_eq!(parsed.title.as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn single_line_has_no_title() {
        let parsed = recognize("John Smith");
        assert_eq!(parsed.name.as_deref(), Some("John Smith"));
        assert_eq!(parsed.title, None);
    }

    #[test]
    fn leftmost_email_wins() {
        let parsed = recognize("contact a@first.com or b@second.com");
        assert_eq!(parsed.email.as_deref(), Some("a@first.com"));
    }

    #[test]
    fn leftmost_phone_wins() {
        let parsed = recognize("cell 555-123-4567 office 555-987-6543");
        assert_eq!(parsed.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn short_digit_runs_are_not_phones() {
        let parsed = recognize("Room 4021, floor 3");
        assert_eq!(parsed.phone, None);
    }

    #[test]
    fn experience_accepts_decimals_and_yrs() {
        assert_eq!(recognize("2.5 yrs of Go").experience_years, Some(2.5));
        assert_eq!(recognize("10 years at Acme").experience_years, Some(10.0));
    }

    #[test]
    fn experience_unit_is_case_sensitive() {
        assert_eq!(recognize("5 Years experience").experience_years, None);
    }

    #[test]
    fn leftmost_experience_wins() {
        let parsed = recognize("3 years at Acme, then 7 years at Globex");
        assert_eq!(parsed.experience_years, Some(3.0));
    }

    #[test]
    fn skills_tokens_are_trimmed_and_empties_dropped() {
        let parsed = recognize("Jane\nSkills: Go, , Rust ,  | C++");
        assert_eq!(parsed.skills, vec!["Go", "Rust", "C++"]);
    }

    #[test]
    fn bare_skills_label_yields_no_tokens() {
        let parsed = recognize("Jane\nCore Skills");
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn technologies_line_also_qualifies() {
        let parsed = recognize("Jane\nTechnologies; Python; SQL");
        assert_eq!(parsed.skills, vec!["Technologies", "Python", "SQL"]);
    }

    #[test]
    fn only_first_skills_line_is_consulted() {
        let parsed = recognize("Jane\nSkills: Go, Rust\nOther technologies: COBOL, Fortran");
        assert_eq!(parsed.skills, vec!["Go", "Rust"]);
    }

    #[test]
    fn no_skills_line_means_empty_sequence() {
        let parsed = recognize("Jane Doe\nEngineer\njane@example.com");
        assert!(parsed.skills.is_empty());
    }
}

//! Best-effort parsing of vision replies into [`LandmarkInfo`].
//!
//! The vision model is asked for JSON but may wrap it in a markdown fence,
//! surround it with prose, use snake_case keys, or answer in plain text.

use serde_json::{Map, Value};

use super::{LandmarkInfo, UNKNOWN_FIELD};

/// Parses a vision reply. Returns `None` when nothing usable is found.
///
/// A reply carrying JSON markers (a brace or a code fence) must yield a
/// valid object with a name; only marker-free replies are read as text.
pub fn parse_landmark_reply(reply: &str) -> Option<LandmarkInfo> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !has_json_markers(trimmed) {
        return from_plain_text(trimmed);
    }

    let json = extract_json_object(trimmed)?;
    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(fields)) => from_fields(&fields),
        _ => None,
    }
}

fn has_json_markers(text: &str) -> bool {
    text.contains('{') || text.starts_with("```")
}

fn from_fields(fields: &Map<String, Value>) -> Option<LandmarkInfo> {
    let name = text_field(fields, &["name", "landmarkName", "landmark_name", "title"])?;

    Some(LandmarkInfo {
        name,
        description: text_field(fields, &["description", "summary"])
            .unwrap_or_else(unknown),
        location: text_field(fields, &["location", "city", "place"]).unwrap_or_else(unknown),
        year_built: text_field(fields, &["yearBuilt", "year_built", "built", "year"])
            .unwrap_or_else(unknown),
        architecture: text_field(fields, &["architecture", "architecturalStyle", "style"])
            .unwrap_or_else(unknown),
        significance: text_field(fields, &["significance", "historicalSignificance", "history"])
            .unwrap_or_else(unknown),
        fun_facts: list_field(fields, &["funFacts", "fun_facts", "facts"]),
    })
}

fn from_plain_text(text: &str) -> Option<LandmarkInfo> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let name = clean_heading(lines.next()?);
    if name.is_empty() {
        return None;
    }

    let rest: Vec<&str> = lines.collect();
    let mut info = LandmarkInfo::named(name);
    if !rest.is_empty() {
        info.description = rest.join("\n");
    }
    Some(info)
}

/// Strips markdown emphasis and a leading "Name:" label from a heading line.
fn clean_heading(line: &str) -> String {
    let stripped = line.trim_start_matches(['#', '*', '-', ' ']).trim_end_matches(['*', ' ']);
    let without_label = match stripped.split_once(':') {
        Some((label, value)) if label.trim().eq_ignore_ascii_case("name") => value,
        _ => stripped,
    };
    without_label.trim().trim_matches('*').trim().to_string()
}

fn text_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn list_field(fields: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    let Some(value) = keys.iter().find_map(|key| fields.get(*key)) else {
        return Vec::new();
    };

    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => s
            .lines()
            .map(|l| l.trim().trim_start_matches(['-', '*', '•']).trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn unknown() -> String {
    UNKNOWN_FIELD.to_string()
}

/// Finds the first balanced `{...}` object, preferring a fenced code block.
fn extract_json_object(text: &str) -> Option<String> {
    let body = fenced_block(text).unwrap_or(text);
    let start = body.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in body[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(body[start..start + offset + 1].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let reply = r#"{
            "name": "Colosseum",
            "description": "An oval amphitheatre.",
            "location": "Rome, Italy",
            "yearBuilt": "70-80 AD",
            "architecture": "Roman",
            "significance": "Largest amphitheatre ever built.",
            "funFacts": ["Held 50,000 spectators", "Had a retractable awning"]
        }"#;

        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.name, "Colosseum");
        assert_eq!(info.location, "Rome, Italy");
        assert_eq!(info.year_built, "70-80 AD");
        assert_eq!(info.fun_facts.len(), 2);
    }

    #[test]
    fn parses_fenced_json_with_surrounding_prose() {
        let reply = "Here is what I found:\n```json\n{\"name\": \"Big Ben\", \"location\": \"London\"}\n```\nEnjoy!";

        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.name, "Big Ben");
        assert_eq!(info.location, "London");
        assert_eq!(info.description, UNKNOWN_FIELD);
    }

    #[test]
    fn accepts_snake_case_and_numeric_year() {
        let reply = r#"{"name": "Parthenon", "year_built": -438, "fun_facts": "- Doric\n- Marble"}"#;

        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.year_built, "-438");
        assert_eq!(info.fun_facts, vec!["Doric", "Marble"]);
    }

    #[test]
    fn braces_inside_strings_do_not_break_extraction() {
        let reply = r#"{"name": "Odd {Tower}", "description": "uses \"quotes\" and }"}"#;

        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.name, "Odd {Tower}");
        assert_eq!(info.description, "uses \"quotes\" and }");
    }

    #[test]
    fn json_without_name_is_rejected() {
        assert!(parse_landmark_reply(r#"{"description": "something"}"#).is_none());
    }

    #[test]
    fn plain_text_uses_first_line_as_name() {
        let reply = "**Name: Taj Mahal**\nA white marble mausoleum.\nBuilt by Shah Jahan.";

        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.name, "Taj Mahal");
        assert_eq!(info.description, "A white marble mausoleum.\nBuilt by Shah Jahan.");
        assert_eq!(info.location, UNKNOWN_FIELD);
    }

    #[test]
    fn truncated_json_is_rejected() {
        let reply = r#"{"name": "Big Ben", "location": "Lon"#;
        assert!(parse_landmark_reply(reply).is_none());
    }

    #[test]
    fn fenced_json_with_trailing_comma_is_rejected() {
        let reply = "```json\n{\"name\": \"Big Ben\",}\n```";
        assert!(parse_landmark_reply(reply).is_none());
    }

    #[test]
    fn fence_without_object_is_rejected() {
        assert!(parse_landmark_reply("```\nBig Ben\n```").is_none());
    }

    #[test]
    fn markdown_heading_is_cleaned() {
        let info = parse_landmark_reply("## Golden Gate Bridge").unwrap();
        assert_eq!(info.name, "Golden Gate Bridge");
    }

    #[test]
    fn empty_reply_is_rejected() {
        assert!(parse_landmark_reply("").is_none());
        assert!(parse_landmark_reply("   \n  ").is_none());
    }

    #[test]
    fn multibyte_text_before_json_is_handled() {
        let reply = "Résultat → {\"name\": \"Notre-Dame de Paris\"}";
        let info = parse_landmark_reply(reply).unwrap();
        assert_eq!(info.name, "Notre-Dame de Paris");
    }
}

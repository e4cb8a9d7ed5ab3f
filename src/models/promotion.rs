use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One promotion record as the server sends it. The client never treats this
/// as authoritative past the call that fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub course_name: Option<String>,
    pub discounted_price: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Server-relative file path, e.g. "src/web_app/static/img/promotions/x.png".
    pub image_path: Option<String>,
}

/// Error body for failed create/update/delete calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

/// `detail` is either a plain message or a list of field-level issues
/// (the 422 shape FastAPI-style backends emit).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationIssue {
    /// Path to the offending field; segments may be strings or array indices.
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ValidationIssue {
    /// Last `loc` segment names the field; empty paths render as a stand-in.
    pub fn field(&self) -> String {
        match self.loc.last() {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unknown field".into(),
        }
    }
}

/// User-facing rendering of an error `detail`: one line per validation issue,
/// verbatim passthrough for plain-string details.
pub fn format_error_detail(detail: &ErrorDetail) -> String {
    match detail {
        ErrorDetail::Message(msg) => format!("Error: {msg}"),
        ErrorDetail::Validation(issues) => {
            let mut out = String::from("Validation errors:");
            for issue in issues {
                out.push('\n');
                out.push_str(&format!("Field '{}': {}", issue.field(), issue.msg));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_detail_renders_one_line_per_issue() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","name"],"msg":"field required"},
                          {"loc":["body","discounted_price"],"msg":"value is not a valid float"}]}"#,
        )
        .unwrap();
        let text = format_error_detail(&body.detail);
        assert!(text.contains("Field 'name': field required"));
        assert!(text.contains("Field 'discounted_price': value is not a valid float"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn string_detail_passes_through() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Promotion not found"}"#).unwrap();
        assert_eq!(format_error_detail(&body.detail), "Error: Promotion not found");
    }

    #[test]
    fn empty_loc_falls_back_to_placeholder() {
        let issue = ValidationIssue { loc: vec![], msg: "broken".into() };
        assert_eq!(issue.field(), "unknown field");
    }

    #[test]
    fn integer_loc_segment_is_rendered() {
        let issue: ValidationIssue =
            serde_json::from_str(r#"{"loc":["body","items",2],"msg":"bad"}"#).unwrap();
        assert_eq!(issue.field(), "2");
    }

    #[test]
    fn promotion_deserializes_with_optional_fields_absent() {
        let p: Promotion = serde_json::from_str(
            r#"{"id":1,"name":"Summer Sale","description":null,"course_name":"Rust 101",
                "discounted_price":99.5,"start_date":"2026-06-01","end_date":null,
                "image_path":null}"#,
        )
        .unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.start_date, NaiveDate::from_ymd_opt(2026, 6, 1));
        assert!(p.end_date.is_none());
    }
}

use serde_json::{Map, Value};
use thiserror::Error;

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";
pub const STATUS_KEY: &str = "status";
pub const HOMEWORK_NAME_KEY: &str = "homework_name";

/// One submission, already checked for shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBatch {
    /// Newest first, as returned by the API.
    pub homeworks: Vec<Homework>,
    pub current_date: i64,
}

impl StatusBatch {
    pub fn newest(&self) -> Option<&Homework> {
        self.homeworks.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API returned unexpected data type for {field}: got {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationError {
    fn mismatch(field: impl Into<String>, expected: &'static str, found: Option<&Value>) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: json_kind(found),
        }
    }
}

pub fn check_response(response: &Value) -> Result<StatusBatch, ValidationError> {
    let Value::Object(body) = response else {
        return Err(ValidationError::mismatch("response", "object", Some(response)));
    };

    let Some(Value::Array(raw_homeworks)) = body.get(HOMEWORKS_KEY) else {
        return Err(ValidationError::mismatch(
            HOMEWORKS_KEY,
            "array",
            body.get(HOMEWORKS_KEY),
        ));
    };

    let current_date = body
        .get(CURRENT_DATE_KEY)
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            ValidationError::mismatch(CURRENT_DATE_KEY, "integer", body.get(CURRENT_DATE_KEY))
        })?;

    let homeworks = raw_homeworks
        .iter()
        .enumerate()
        .map(|(index, item)| check_homework(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StatusBatch {
        homeworks,
        current_date,
    })
}

fn check_homework(index: usize, item: &Value) -> Result<Homework, ValidationError> {
    let path = format!("{}[{}]", HOMEWORKS_KEY, index);
    let Value::Object(record) = item else {
        return Err(ValidationError::mismatch(path, "object", Some(item)));
    };

    Ok(Homework {
        status: required_text(record, &path, STATUS_KEY)?,
        name: required_text(record, &path, HOMEWORK_NAME_KEY)?,
    })
}

fn required_text(
    record: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<String, ValidationError> {
    match record.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        other => Err(ValidationError::mismatch(
            format!("{}.{}", path, key),
            "string",
            other,
        )),
    }
}

fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(number)) if number.is_i64() || number.is_u64() => "integer",
        Some(Value::Number(_)) => "float",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ValidationError, check_response};

    fn mismatch(response: serde_json::Value) -> (String, &'static str) {
        match check_response(&response).expect_err("response must be rejected") {
            ValidationError::TypeMismatch { field, found, .. } => (field, found),
        }
    }

    #[test]
    fn accepts_well_formed_response() {
        let batch = check_response(&json!({
            "homeworks": [
                {"status": "approved", "homework_name": "hw2", "id": 7},
                {"status": "rejected", "homework_name": "hw1"}
            ],
            "current_date": 1000
        }))
        .expect("valid response");

        assert_eq!(batch.current_date, 1000);
        assert_eq!(batch.homeworks.len(), 2);
        let newest = batch.newest().expect("newest homework");
        assert_eq!(newest.name, "hw2");
        assert_eq!(newest.status, "approved");
    }

    #[test]
    fn accepts_empty_homework_list() {
        let batch = check_response(&json!({"homeworks": [], "current_date": 5}))
            .expect("valid response");
        assert!(batch.newest().is_none());
        assert_eq!(batch.current_date, 5);
    }

    #[test]
    fn rejects_non_object_response() {
        assert_eq!(mismatch(json!([1, 2])), ("response".to_string(), "array"));
        assert_eq!(mismatch(json!(null)), ("response".to_string(), "null"));
    }

    #[test]
    fn rejects_wrong_homeworks_type() {
        assert_eq!(
            mismatch(json!({"homeworks": {"a": 1}, "current_date": 1})),
            ("homeworks".to_string(), "object")
        );
        assert_eq!(
            mismatch(json!({"current_date": 1})),
            ("homeworks".to_string(), "missing")
        );
    }

    #[test]
    fn rejects_wrong_cursor_type() {
        assert_eq!(
            mismatch(json!({"homeworks": [], "current_date": "1000"})),
            ("current_date".to_string(), "string")
        );
        assert_eq!(
            mismatch(json!({"homeworks": [], "current_date": 10.5})),
            ("current_date".to_string(), "float")
        );
    }

    #[test]
    fn rejects_wrong_record_field_type() {
        assert_eq!(
            mismatch(json!({
                "homeworks": [{"status": 1, "homework_name": "hw1"}],
                "current_date": 1
            })),
            ("homeworks[0].status".to_string(), "integer")
        );
        assert_eq!(
            mismatch(json!({
                "homeworks": [
                    {"status": "approved", "homework_name": "hw2"},
                    {"status": "approved"}
                ],
                "current_date": 1
            })),
            ("homeworks[1].homework_name".to_string(), "missing")
        );
        assert_eq!(
            mismatch(json!({"homeworks": ["hw1"], "current_date": 1})),
            ("homeworks[0]".to_string(), "string")
        );
    }

    #[test]
    fn error_message_names_the_field() {
        let error = check_response(&json!({"homeworks": [], "current_date": null}))
            .expect_err("null cursor");
        assert!(error.to_string().contains("current_date"));
        assert!(error.to_string().contains("null"));
    }
}

//! Request validation from declarative per-field rules.

use crate::error::AppError;
use crate::models::{NewCasting, NewHuman, NewMovie};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// String on the wire. Numbers are accepted and kept as their decimal text.
    Text,
    /// Integer, sent either as a JSON number or as a string of digits.
    Integer,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_length: Option<usize>,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldRule {
            name,
            kind,
            required: true,
            max_length: None,
        }
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldKind::Text),
    FieldRule::required("year", FieldKind::Text).max_length(80),
    FieldRule::required("genre", FieldKind::Text).max_length(10),
];

pub const HUMAN_RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldKind::Text),
    FieldRule::required("year_born", FieldKind::Integer),
];

pub const CASTING_RULES: &[FieldRule] = &[
    FieldRule::required("human_id", FieldKind::Integer),
    FieldRule::required("role", FieldKind::Text),
];

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// Values that passed their rules, keyed by field name.
#[derive(Debug, Default)]
pub struct ValidatedFields {
    values: HashMap<&'static str, FieldValue>,
}

impl ValidatedFields {
    pub fn take_text(&mut self, field: &'static str) -> Result<String, AppError> {
        match self.values.remove(field) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(FieldValue::Integer(n)) => Ok(n.to_string()),
            None => Err(AppError::validation(field, format!("{} is required", field))),
        }
    }

    pub fn take_integer(&mut self, field: &'static str) -> Result<i64, AppError> {
        match self.values.remove(field) {
            Some(FieldValue::Integer(n)) => Ok(n),
            Some(FieldValue::Text(_)) => Err(AppError::validation(field, format!("{} must be an integer", field))),
            None => Err(AppError::validation(field, format!("{} is required", field))),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check `body` against `rules` in rule order; the first failing field is reported.
    /// Keys not named by a rule are ignored.
    pub fn validate(body: &HashMap<String, Value>, rules: &[FieldRule]) -> Result<ValidatedFields, AppError> {
        let mut out = ValidatedFields::default();
        for rule in rules {
            match body.get(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        return Err(AppError::validation(rule.name, format!("{} is required", rule.name)));
                    }
                }
                Some(v) => {
                    let value = validate_field(rule, v)?;
                    out.values.insert(rule.name, value);
                }
            }
        }
        Ok(out)
    }

    pub fn new_movie(body: &HashMap<String, Value>) -> Result<NewMovie, AppError> {
        let mut fields = Self::validate(body, MOVIE_RULES)?;
        Ok(NewMovie {
            name: fields.take_text("name")?,
            genre: fields.take_text("genre")?,
            year: fields.take_text("year")?,
        })
    }

    pub fn new_human(body: &HashMap<String, Value>) -> Result<NewHuman, AppError> {
        let mut fields = Self::validate(body, HUMAN_RULES)?;
        Ok(NewHuman {
            name: fields.take_text("name")?,
            year_born: fields.take_integer("year_born")?,
        })
    }

    pub fn new_casting(body: &HashMap<String, Value>) -> Result<NewCasting, AppError> {
        let mut fields = Self::validate(body, CASTING_RULES)?;
        Ok(NewCasting {
            human_id: fields.take_integer("human_id")?,
            role: fields.take_text("role")?,
        })
    }
}

fn validate_field(rule: &FieldRule, v: &Value) -> Result<FieldValue, AppError> {
    let col = rule.name;
    let value = match rule.kind {
        FieldKind::Text => match v {
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => FieldValue::Text(n.to_string()),
            _ => return Err(AppError::validation(col, format!("{} must be a string", col))),
        },
        FieldKind::Integer => {
            let n = match v {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            };
            match n {
                Some(n) => FieldValue::Integer(n),
                None => return Err(AppError::validation(col, format!("{} must be an integer", col))),
            }
        }
    };
    if let (Some(max), FieldValue::Text(s)) = (rule.max_length, &value) {
        if s.chars().count() > max {
            return Err(AppError::validation(
                col,
                format!("{} must be at most {} characters", col, max),
            ));
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> HashMap<String, Value> {
        match v {
            Value::Object(m) => m.into_iter().collect(),
            _ => panic!("test body must be an object"),
        }
    }

    fn field_of(err: AppError) -> &'static str {
        match err {
            AppError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn movie_with_all_fields() {
        let m = RequestValidator::new_movie(&body(json!({
            "name": "Inception", "year": "2010", "genre": "SciFi"
        })))
        .unwrap();
        assert_eq!(m.name, "Inception");
        assert_eq!(m.year, "2010");
        assert_eq!(m.genre, "SciFi");
    }

    #[test]
    fn movie_missing_genre_names_genre() {
        let err = RequestValidator::new_movie(&body(json!({"name": "Inception", "year": "2010"}))).unwrap_err();
        assert_eq!(field_of(err), "genre");
    }

    #[test]
    fn null_counts_as_missing() {
        let err = RequestValidator::new_movie(&body(json!({
            "name": null, "year": "2010", "genre": "SciFi"
        })))
        .unwrap_err();
        assert!(err.to_string().contains("name is required"));
    }

    #[test]
    fn numeric_year_becomes_text() {
        let m = RequestValidator::new_movie(&body(json!({
            "name": "Alien", "year": 1979, "genre": "Horror"
        })))
        .unwrap();
        assert_eq!(m.year, "1979");
    }

    #[test]
    fn genre_longer_than_ten_chars_rejected() {
        let err = RequestValidator::new_movie(&body(json!({
            "name": "X", "year": "2000", "genre": "Documentary"
        })))
        .unwrap_err();
        assert_eq!(field_of(err), "genre");
    }

    #[test]
    fn object_where_string_expected() {
        let err = RequestValidator::new_movie(&body(json!({
            "name": {"first": "x"}, "year": "2000", "genre": "Drama"
        })))
        .unwrap_err();
        assert!(err.to_string().contains("name must be a string"));
    }

    #[test]
    fn human_year_born_string_parsed() {
        let h = RequestValidator::new_human(&body(json!({"name": "Ada", "year_born": "1815"}))).unwrap();
        assert_eq!(h.year_born, 1815);
    }

    #[test]
    fn human_year_born_not_a_number() {
        let err = RequestValidator::new_human(&body(json!({"name": "Ada", "year_born": "soon"}))).unwrap_err();
        assert_eq!(field_of(err), "year_born");
    }

    #[test]
    fn casting_requires_role() {
        let err = RequestValidator::new_casting(&body(json!({"human_id": 1}))).unwrap_err();
        assert_eq!(field_of(err), "role");
    }
}

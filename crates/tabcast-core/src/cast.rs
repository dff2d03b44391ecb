//! Raw-to-typed value conversion.
//!
//! Int, float, and bool columns consult the column's [`TypePolicy`] on
//! parse failure. Date and datetime columns never fail the job: a bad
//! value falls back to the parsed default, and a bad default to the epoch.
//! String columns are identity after default substitution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use tabcast_model::{
    ColumnSpec, ColumnType, DATE_FORMAT, DATETIME_FORMAT, TypePolicy, TypedValue,
};

use crate::error::CastError;

/// Convert one raw field according to `spec`.
///
/// Empty input takes the declared default before any interpretation. Only
/// a strict-policy parse failure returns `Err`; every other path yields a
/// value, possibly [`TypedValue::Null`].
pub fn cast_value(raw: &str, spec: &ColumnSpec) -> Result<TypedValue, CastError> {
    let value = if raw.is_empty() {
        spec.default.as_str()
    } else {
        raw
    };
    match spec.ty {
        ColumnType::Int => with_policy(value, spec, |v| v.parse::<i64>().ok().map(TypedValue::Int)),
        ColumnType::Float => {
            with_policy(value, spec, |v| v.parse::<f64>().ok().map(TypedValue::Float))
        }
        ColumnType::Bool => with_policy(value, spec, |v| parse_bool(v).map(TypedValue::Bool)),
        ColumnType::Date => Ok(TypedValue::Date(parse_date(value, spec))),
        ColumnType::DateTime => Ok(TypedValue::DateTime(parse_datetime(value, spec))),
        ColumnType::String => Ok(TypedValue::Text(value.to_string())),
    }
}

/// Apply the column policy to a parse attempt that may fail.
fn with_policy(
    value: &str,
    spec: &ColumnSpec,
    parse: impl Fn(&str) -> Option<TypedValue>,
) -> Result<TypedValue, CastError> {
    if let Some(parsed) = parse(value) {
        return Ok(parsed);
    }
    match spec.policy {
        TypePolicy::Strict => Err(CastError {
            field: spec.field.clone(),
            ty: spec.ty,
            value: value.to_string(),
        }),
        TypePolicy::Nullable => Ok(TypedValue::Null),
        // Substitute the declared default. An unparsable default degrades
        // to Null rather than an invented zero.
        TypePolicy::Flexible => Ok(parse(&spec.default).unwrap_or(TypedValue::Null)),
    }
}

/// Boolean literals: true/false/t/f (ASCII case-insensitive) and 1/0.
fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("t") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("f") || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

fn parse_date(value: &str, spec: &ColumnSpec) -> NaiveDate {
    let pattern = spec.format.as_deref().unwrap_or(DATE_FORMAT);
    NaiveDate::parse_from_str(value, pattern)
        .or_else(|_| NaiveDate::parse_from_str(&spec.default, pattern))
        .unwrap_or_default()
}

fn parse_datetime(value: &str, spec: &ColumnSpec) -> DateTime<Utc> {
    let pattern = spec.format.as_deref().unwrap_or(DATETIME_FORMAT);
    parse_instant(value, pattern)
        .or_else(|| parse_instant(&spec.default, pattern))
        .unwrap_or_default()
}

fn parse_instant(value: &str, pattern: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, pattern)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(ty: ColumnType, policy: TypePolicy, default: &str) -> ColumnSpec {
        ColumnSpec {
            index: 0,
            field: "field".to_string(),
            label: "Field".to_string(),
            ty,
            policy,
            default: default.to_string(),
            format: None,
        }
    }

    #[test]
    fn test_int_parses() {
        let spec = spec(ColumnType::Int, TypePolicy::Strict, "0");
        assert_eq!(cast_value("42", &spec).unwrap(), TypedValue::Int(42));
        assert_eq!(cast_value("-7", &spec).unwrap(), TypedValue::Int(-7));
    }

    #[test]
    fn test_empty_takes_default() {
        let spec = spec(ColumnType::Int, TypePolicy::Strict, "50000");
        assert_eq!(cast_value("", &spec).unwrap(), TypedValue::Int(50000));
    }

    #[test]
    fn test_int_strict_failure() {
        let spec = spec(ColumnType::Int, TypePolicy::Strict, "0");
        let error = cast_value("abc", &spec).unwrap_err();
        assert_eq!(error.ty, ColumnType::Int);
        assert_eq!(error.value, "abc");
        assert_eq!(error.field, "field");
    }

    #[test]
    fn test_int_nullable_failure() {
        let spec = spec(ColumnType::Int, TypePolicy::Nullable, "0");
        assert_eq!(cast_value("abc", &spec).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_int_flexible_uses_parsed_default() {
        let spec = spec(ColumnType::Int, TypePolicy::Flexible, "99");
        assert_eq!(cast_value("abc", &spec).unwrap(), TypedValue::Int(99));
    }

    #[test]
    fn test_flexible_unparsable_default_is_null() {
        let spec = spec(ColumnType::Int, TypePolicy::Flexible, "not-a-number");
        assert_eq!(cast_value("abc", &spec).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_float_parses() {
        let spec = spec(ColumnType::Float, TypePolicy::Strict, "0.0");
        assert_eq!(cast_value("2.5", &spec).unwrap(), TypedValue::Float(2.5));
        assert_eq!(cast_value("", &spec).unwrap(), TypedValue::Float(0.0));
    }

    #[test]
    fn test_bool_literals() {
        let spec = spec(ColumnType::Bool, TypePolicy::Strict, "false");
        for raw in ["true", "TRUE", "True", "t", "T", "1"] {
            assert_eq!(cast_value(raw, &spec).unwrap(), TypedValue::Bool(true), "{raw}");
        }
        for raw in ["false", "FALSE", "False", "f", "F", "0"] {
            assert_eq!(cast_value(raw, &spec).unwrap(), TypedValue::Bool(false), "{raw}");
        }
    }

    #[test]
    fn test_bool_strict_failure() {
        let spec = spec(ColumnType::Bool, TypePolicy::Strict, "false");
        assert!(cast_value("yes", &spec).is_err());
    }

    #[test]
    fn test_bool_nullable_failure() {
        let spec = spec(ColumnType::Bool, TypePolicy::Nullable, "false");
        assert_eq!(cast_value("yes", &spec).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_date_parses() {
        let spec = spec(ColumnType::Date, TypePolicy::Strict, "1970-01-01");
        assert_eq!(
            cast_value("2024-03-09", &spec).unwrap(),
            TypedValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
    }

    #[test]
    fn test_date_falls_back_to_default() {
        // Date failures never abort, regardless of policy.
        let spec = spec(ColumnType::Date, TypePolicy::Strict, "1970-01-01");
        assert_eq!(
            cast_value("not-a-date", &spec).unwrap(),
            TypedValue::Date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_date_bad_default_is_epoch() {
        let spec = spec(ColumnType::Date, TypePolicy::Strict, "also-bad");
        assert_eq!(
            cast_value("not-a-date", &spec).unwrap(),
            TypedValue::Date(NaiveDate::default())
        );
    }

    #[test]
    fn test_datetime_parses() {
        let spec = spec(
            ColumnType::DateTime,
            TypePolicy::Strict,
            "1970-01-01T00:00:00Z",
        );
        let expected = NaiveDateTime::parse_from_str("2024-03-09T12:30:00Z", DATETIME_FORMAT)
            .unwrap()
            .and_utc();
        assert_eq!(
            cast_value("2024-03-09T12:30:00Z", &spec).unwrap(),
            TypedValue::DateTime(expected)
        );
    }

    #[test]
    fn test_datetime_falls_back_to_default() {
        let spec = spec(
            ColumnType::DateTime,
            TypePolicy::Strict,
            "2000-01-01T00:00:00Z",
        );
        let expected = NaiveDateTime::parse_from_str("2000-01-01T00:00:00Z", DATETIME_FORMAT)
            .unwrap()
            .and_utc();
        assert_eq!(
            cast_value("garbage", &spec).unwrap(),
            TypedValue::DateTime(expected)
        );
    }

    #[test]
    fn test_datetime_bad_default_is_epoch() {
        let spec = spec(ColumnType::DateTime, TypePolicy::Strict, "");
        assert_eq!(
            cast_value("garbage", &spec).unwrap(),
            TypedValue::DateTime(DateTime::<Utc>::default())
        );
    }

    #[test]
    fn test_date_custom_format() {
        let mut spec = spec(ColumnType::Date, TypePolicy::Strict, "01/01/1970");
        spec.format = Some("%d/%m/%Y".to_string());
        assert_eq!(
            cast_value("09/03/2024", &spec).unwrap(),
            TypedValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
    }

    #[test]
    fn test_string_identity() {
        let spec = spec(ColumnType::String, TypePolicy::Strict, "fallback");
        assert_eq!(
            cast_value("anything", &spec).unwrap(),
            TypedValue::Text("anything".to_string())
        );
        assert_eq!(
            cast_value("", &spec).unwrap(),
            TypedValue::Text("fallback".to_string())
        );
    }
}

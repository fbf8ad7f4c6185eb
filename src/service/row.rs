//! Map database rows to JSON objects through the field mapping and the
//! value-coercion policy: temporals become ISO-8601 strings, NUMERIC becomes
//! a float, everything else passes through JSON-safe. A column missing from
//! the result set maps to null.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Build the response object for one row: keys are the API field names in
/// declared mapping order, values are the coerced column values.
pub fn map_row(row: &PgRow, mapping: &[(String, String)]) -> Value {
    let mut obj = serde_json::Map::with_capacity(mapping.len());
    for (api_field, db_column) in mapping {
        obj.insert(api_field.clone(), cell_to_value(row, db_column));
    }
    Value::Object(obj)
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    if let Ok(v) = row.try_get::<Option<i16>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<i32>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<f32>, _>(name) {
        if let Some(n) = v {
            return float_to_json(n as f64);
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = v {
            return float_to_json(n);
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<BigDecimal>, _>(name) {
        if let Some(d) = v {
            return decimal_to_json(&d);
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(name) {
        if let Some(b) = v {
            return Value::Bool(b);
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<uuid::Uuid>, _>(name) {
        if let Some(u) = v {
            return Value::String(u.to_string());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        if let Some(d) = v {
            return Value::String(d.to_rfc3339());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        if let Some(d) = v {
            return Value::String(naive_datetime_iso(&d));
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        if let Some(d) = v {
            return Value::String(d.format("%Y-%m-%d").to_string());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveTime>, _>(name) {
        if let Some(t) = v {
            return Value::String(t.format("%H:%M:%S%.f").to_string());
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(name) {
        if let Some(s) = v {
            return Value::String(s);
        }
        return Value::Null;
    }
    if let Ok(v) = row.try_get::<Option<Value>, _>(name) {
        if let Some(j) = v {
            return j;
        }
    }
    // Unknown column or undecodable type: absent maps to null, not an error.
    Value::Null
}

fn float_to_json(f: f64) -> Value {
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn decimal_to_json(d: &BigDecimal) -> Value {
    d.to_f64().map(float_to_json).unwrap_or(Value::Null)
}

fn naive_datetime_iso(d: &chrono::NaiveDateTime) -> String {
    d.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

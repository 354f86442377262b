//! Forgiving conversions from loosely typed JSON fields.
//!
//! Every function here is total: the wrong type maps to the field's default.

use serde_json::Value;

pub(crate) fn string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

pub(crate) fn opt_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Non-negative count. Accepts numbers and numeric strings.
pub(crate) fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|i| i.max(0) as u64))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.max(0.0) as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.max(0.0) as u64)
            })
        }
        _ => None,
    }
}

pub(crate) fn float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

pub(crate) fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_forms() {
        assert_eq!(count(&json!(1200)), Some(1200));
        assert_eq!(count(&json!("1200")), Some(1200));
        assert_eq!(count(&json!(-4)), Some(0));
        assert_eq!(count(&json!(12.7)), Some(12));
        assert_eq!(count(&json!("lots")), None);
        assert_eq!(count(&Value::Null), None);
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(float(&json!(4.8)), Some(4.8));
        assert_eq!(float(&json!("4.2")), Some(4.2));
        assert_eq!(float(&json!("NaN")), None);
        assert_eq!(float(&json!(true)), None);
    }

    #[test]
    fn test_wrong_types_default() {
        assert_eq!(string(&json!(17)), "");
        assert_eq!(opt_string(&json!("")), None);
        assert_eq!(string_list(&json!(["a", 3, "b"])), vec!["a", "b"]);
        assert!(string_list(&json!("a")).is_empty());
    }
}

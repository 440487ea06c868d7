// Record extraction from fetched JSON bodies

use pivotgrid_core::Record;

/// Pull the record list out of a JSON body.
///
/// `path` is a dotted path to the list ("data.records"); an empty path
/// means the body itself is the list. Every element must be an object
/// of scalars; field order inside each object is preserved. Any shape
/// mismatch is a descriptive error for the fetch boundary to report.
pub fn records_at_path(body: &serde_json::Value, path: &str) -> Result<Vec<Record>, String> {
    let mut node = body;
    if !path.is_empty() {
        for segment in path.split('.') {
            node = node
                .get(segment)
                .ok_or_else(|| format!("no '{segment}' in response body (path '{path}')"))?;
        }
    }

    let list = node
        .as_array()
        .ok_or_else(|| format!("expected a list at '{path}', got {}", kind(node)))?;

    let mut records = Vec::with_capacity(list.len());
    for (i, entry) in list.iter().enumerate() {
        let map = entry
            .as_object()
            .ok_or_else(|| format!("entry {i} is {}, expected an object", kind(entry)))?;
        let record =
            Record::from_json_object(map).map_err(|e| format!("entry {i}: {e}"))?;
        records.push(record);
    }

    Ok(records)
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivotgrid_core::Value;

    fn body(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn root_list() {
        let records = records_at_path(
            &body(r#"[{"hubId":"H4015","f2Port":85},{"hubId":"H4016","f2Port":86}]"#),
            "",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("hubId"), Some(&Value::Text("H4015".into())));
        assert_eq!(records[1].get("f2Port"), Some(&Value::Number(86.0)));
    }

    #[test]
    fn nested_path() {
        let records = records_at_path(
            &body(r#"{"data":{"records":[{"hubId":"H4015"}]}}"#),
            "data.records",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn field_order_survives() {
        let records =
            records_at_path(&body(r#"[{"zeta":1,"alpha":2,"midpoint":3}]"#), "").unwrap();
        let names: Vec<&str> = records[0].field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "midpoint"]);
    }

    #[test]
    fn missing_path_segment() {
        let err = records_at_path(&body(r#"{"data":{}}"#), "data.records").unwrap_err();
        assert!(err.contains("records"), "{err}");
    }

    #[test]
    fn non_list_at_path() {
        let err = records_at_path(&body(r#"{"data":42}"#), "data").unwrap_err();
        assert!(err.contains("expected a list"), "{err}");
    }

    #[test]
    fn non_object_entry() {
        let err = records_at_path(&body(r#"[{"a":1},17]"#), "").unwrap_err();
        assert!(err.contains("entry 1"), "{err}");
    }

    #[test]
    fn empty_list_is_fine() {
        assert!(records_at_path(&body("[]"), "").unwrap().is_empty());
    }
}

// Record-to-matrix transform for the pivot/chart/export consumers

use crate::humanize::humanize_label;
use crate::record::{Record, Value};

/// A record's shape disagrees with the header derived from the first
/// record. Row indices are zero-based into the input record list.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A record lacks a field named in the header.
    MissingField { row: usize, field: String },
    /// A record has a different number of fields than the header.
    FieldCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::MissingField { row, field } => {
                write!(f, "record {row} is missing field '{field}'")
            }
            SchemaError::FieldCountMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "record {row} has {found} fields, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Header-plus-rows tabular form: row 0 is the header labels, rows 1..N
/// hold one record each. Every row has the same width. A fresh Matrix
/// wholesale-replaces the previous one on each dataset load; nothing is
/// updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Matrix {
    /// The empty matrix: zero rows, no header. Distinguishes "no data"
    /// from "data with zero columns".
    pub fn empty() -> Self {
        Matrix {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Transform records into a matrix. The header comes from the first
    /// record's field order, humanized when `humanize` is set. Each row
    /// is assembled by looking values up by header name, so a record
    /// with missing, extra, or differently-named fields is a
    /// `SchemaError` rather than a silently misaligned row.
    pub fn from_records(records: &[Record], humanize: bool) -> Result<Self, SchemaError> {
        let Some(first) = records.first() else {
            return Ok(Matrix::empty());
        };

        let field_names: Vec<String> =
            first.field_names().map(str::to_string).collect();
        let header: Vec<String> = if humanize {
            field_names.iter().map(|n| humanize_label(n)).collect()
        } else {
            field_names.clone()
        };

        let mut rows = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if record.len() != field_names.len() {
                return Err(SchemaError::FieldCountMismatch {
                    row,
                    expected: field_names.len(),
                    found: record.len(),
                });
            }
            let mut values = Vec::with_capacity(field_names.len());
            for name in &field_names {
                match record.get(name) {
                    Some(value) => values.push(value.clone()),
                    None => {
                        return Err(SchemaError::MissingField {
                            row,
                            field: name.clone(),
                        })
                    }
                }
            }
            rows.push(values);
        }

        Ok(Matrix { header, rows })
    }

    /// Rebuild a matrix from already-tabular data (CSV import path).
    /// All rows must match the header width.
    pub fn from_parts(header: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, SchemaError> {
        for (row, values) in rows.iter().enumerate() {
            if values.len() != header.len() {
                return Err(SchemaError::FieldCountMismatch {
                    row,
                    expected: header.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Matrix { header, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Total row count including the header (0 for the empty matrix).
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows.len() + 1
        }
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn data_rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, Value)]) -> Record {
        Record::new(
            fields
                .iter()
                .map(|(n, v)| (n.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn empty_input_yields_empty_matrix() {
        let matrix = Matrix::from_records(&[], true).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
        assert!(matrix.header().is_empty());
    }

    #[test]
    fn header_from_first_record_humanized() {
        let records = vec![
            record(&[
                ("hubId", Value::Text("H4015".into())),
                ("f2Port", Value::Number(85.0)),
            ]),
            record(&[
                ("hubId", Value::Text("H4016".into())),
                ("f2Port", Value::Number(86.0)),
            ]),
        ];
        let matrix = Matrix::from_records(&records, true).unwrap();
        assert_eq!(matrix.header(), &["Hub Id".to_string(), "F2 Port".to_string()]);
        assert_eq!(matrix.len(), 3);
        assert_eq!(
            matrix.data_rows()[0],
            vec![Value::Text("H4015".into()), Value::Number(85.0)]
        );
        assert_eq!(
            matrix.data_rows()[1],
            vec![Value::Text("H4016".into()), Value::Number(86.0)]
        );
    }

    #[test]
    fn raw_headers_keep_field_names() {
        let records = vec![record(&[("hubId", Value::Text("H4015".into()))])];
        let matrix = Matrix::from_records(&records, false).unwrap();
        assert_eq!(matrix.header(), &["hubId".to_string()]);
    }

    #[test]
    fn reordered_fields_still_align_by_name() {
        let records = vec![
            record(&[
                ("hubId", Value::Text("H4015".into())),
                ("f2Port", Value::Number(85.0)),
            ]),
            record(&[
                ("f2Port", Value::Number(86.0)),
                ("hubId", Value::Text("H4016".into())),
            ]),
        ];
        let matrix = Matrix::from_records(&records, false).unwrap();
        // Row 1 follows the header order, not its own field order
        assert_eq!(
            matrix.data_rows()[1],
            vec![Value::Text("H4016".into()), Value::Number(86.0)]
        );
    }

    #[test]
    fn missing_field_is_an_error() {
        let records = vec![
            record(&[
                ("hubId", Value::Text("H4015".into())),
                ("f2Port", Value::Number(85.0)),
            ]),
            record(&[
                ("hubId", Value::Text("H4016".into())),
                ("portStatus", Value::Number(86.0)),
            ]),
        ];
        let err = Matrix::from_records(&records, false).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                row: 1,
                field: "f2Port".into()
            }
        );
    }

    #[test]
    fn extra_field_is_an_error() {
        let records = vec![
            record(&[("hubId", Value::Text("H4015".into()))]),
            record(&[
                ("hubId", Value::Text("H4016".into())),
                ("f2Port", Value::Number(86.0)),
            ]),
        ];
        let err = Matrix::from_records(&records, false).unwrap_err();
        assert_eq!(
            err,
            SchemaError::FieldCountMismatch {
                row: 1,
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn from_parts_checks_row_width() {
        let err = Matrix::from_parts(
            vec!["A".into(), "B".into()],
            vec![vec![Value::Number(1.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::FieldCountMismatch { row: 0, .. }));
    }
}

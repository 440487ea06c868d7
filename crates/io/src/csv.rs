// CSV export/import for matrices

use std::io::Write;
use std::path::Path;

use pivotgrid_core::{Matrix, Value};

pub fn export(matrix: &Matrix, path: &Path) -> Result<(), String> {
    let file = std::fs::File::create(path).map_err(|e| e.to_string())?;
    export_to_writer(matrix, file)
}

/// Serialize the matrix as CSV: header line first, then one line per
/// data row, RFC 4180 quoting handled by the csv crate. The empty
/// matrix produces empty output (no header line).
pub fn export_to_writer(matrix: &Matrix, writer: impl Write) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);

    if matrix.is_empty() {
        return writer.flush().map_err(|e| e.to_string());
    }

    writer
        .write_record(matrix.header())
        .map_err(|e| e.to_string())?;

    for row in matrix.data_rows() {
        let record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writer.write_record(&record).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())
}

pub fn to_csv_string(matrix: &Matrix) -> Result<String, String> {
    let mut buf = Vec::new();
    export_to_writer(matrix, &mut buf)?;
    String::from_utf8(buf).map_err(|e| e.to_string())
}

pub fn import(path: &Path) -> Result<Matrix, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    import_from_string(&content)
}

/// Parse CSV back into a matrix. The first line is the header; field
/// values are re-coerced to scalars (numeric text to Number, true/false
/// to Bool, the rest stays Text), so export followed by import
/// round-trips modulo scalar-to-text coercion.
pub fn import_from_string(content: &str) -> Result<Matrix, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Value>> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        match &header {
            None => {
                header = Some(record.iter().map(str::to_string).collect());
            }
            Some(_) => {
                rows.push(record.iter().map(Value::from_input).collect());
            }
        }
    }

    match header {
        None => Ok(Matrix::empty()),
        Some(header) => Matrix::from_parts(header, rows).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivotgrid_core::Record;
    use tempfile::tempdir;

    fn sample_matrix() -> Matrix {
        let records = vec![
            Record::new(vec![
                ("hubId".into(), Value::Text("H4015".into())),
                ("f2Port".into(), Value::Number(85.0)),
            ]),
            Record::new(vec![
                ("hubId".into(), Value::Text("H4016".into())),
                ("f2Port".into(), Value::Number(86.0)),
            ]),
        ];
        Matrix::from_records(&records, true).unwrap()
    }

    #[test]
    fn export_writes_header_then_rows() {
        let csv = to_csv_string(&sample_matrix()).unwrap();
        assert_eq!(csv, "Hub Id,F2 Port\nH4015,85\nH4016,86\n");
    }

    #[test]
    fn empty_matrix_exports_nothing() {
        let csv = to_csv_string(&Matrix::empty()).unwrap();
        assert_eq!(csv, "");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let records = vec![Record::new(vec![
            ("vendor".into(), Value::Text("Cables, Inc.".into())),
            ("note".into(), Value::Text("say \"hi\"".into())),
        ])];
        let matrix = Matrix::from_records(&records, false).unwrap();
        let csv = to_csv_string(&matrix).unwrap();
        assert_eq!(csv, "vendor,note\n\"Cables, Inc.\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let matrix = sample_matrix();
        export(&matrix, &path).unwrap();
        let reparsed = import(&path).unwrap();

        assert_eq!(reparsed, matrix);
    }

    #[test]
    fn import_coerces_scalars() {
        let matrix = import_from_string("Name,Count,Active\nAlice,3,true\n").unwrap();
        assert_eq!(
            matrix.data_rows()[0],
            vec![
                Value::Text("Alice".into()),
                Value::Number(3.0),
                Value::Bool(true)
            ]
        );
    }

    #[test]
    fn import_empty_input() {
        let matrix = import_from_string("").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn import_rejects_ragged_rows() {
        assert!(import_from_string("A,B\n1,2,3\n").is_err());
    }
}

// pgrid export — load, transform, write CSV

use std::io::Write;
use std::path::{Path, PathBuf};

use pivotgrid_core::Matrix;
use pivotgrid_source::DataSource;

use crate::exit_codes::EXIT_SCHEMA;
use crate::CliError;

pub fn cmd_export(
    source: Box<dyn DataSource>,
    out: PathBuf,
    humanize: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let records = source
        .load()
        .map_err(|e| CliError::from_source(source.name(), e))?;

    if !quiet {
        eprintln!("loaded {} records from {}", records.len(), source.name());
    }

    let matrix = Matrix::from_records(&records, humanize).map_err(|e| CliError {
        code: EXIT_SCHEMA,
        message: format!("schema mismatch: {e}"),
        hint: Some("every record must expose the same fields as the first one".into()),
    })?;

    write_output(&matrix, &out, quiet)
}

fn write_output(matrix: &Matrix, out: &Path, quiet: bool) -> Result<(), CliError> {
    if out.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        pivotgrid_io::csv::export_to_writer(matrix, &mut handle).map_err(CliError::io)?;
        handle.flush().map_err(|e| CliError::io(e.to_string()))?;
    } else {
        pivotgrid_io::csv::export(matrix, out).map_err(CliError::io)?;
        if !quiet {
            eprintln!("wrote {} rows to {}", matrix.len(), out.display());
        }
    }

    Ok(())
}

// pgrid show — aligned terminal preview of the matrix
// Header cells are tinted by the deterministic color hash, the same
// tagging the pivot widget uses, so a column keeps its color across
// datasets and runs.

use pivotgrid_config::palette;
use pivotgrid_core::Matrix;
use pivotgrid_source::DataSource;

use crate::exit_codes::EXIT_SCHEMA;
use crate::util::{display_width, pad};
use crate::CliError;

const MAX_COL_WIDTH: usize = 24;

pub fn cmd_show(
    source: Box<dyn DataSource>,
    limit: usize,
    color: bool,
    humanize: bool,
) -> Result<(), CliError> {
    let records = source
        .load()
        .map_err(|e| CliError::from_source(source.name(), e))?;

    let matrix = Matrix::from_records(&records, humanize).map_err(|e| CliError {
        code: EXIT_SCHEMA,
        message: format!("schema mismatch: {e}"),
        hint: None,
    })?;

    if matrix.is_empty() {
        eprintln!("(no data)");
        return Ok(());
    }

    let shown = matrix.data_rows().len().min(limit);
    print!("{}", render(&matrix, shown, color));

    let hidden = matrix.data_rows().len() - shown;
    if hidden > 0 {
        eprintln!("({hidden} more rows, use --limit to see them)");
    }

    Ok(())
}

fn render(matrix: &Matrix, shown: usize, color: bool) -> String {
    let rows: Vec<Vec<String>> = matrix.data_rows()[..shown]
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    // Column widths: widest of header and shown cells, capped
    let widths: Vec<usize> = matrix
        .header()
        .iter()
        .enumerate()
        .map(|(col, label)| {
            let cells = rows.iter().map(|r| display_width(&r[col]));
            display_width(label)
                .max(cells.max().unwrap_or(0))
                .min(MAX_COL_WIDTH)
        })
        .collect();

    let mut out = String::new();

    for (col, label) in matrix.header().iter().enumerate() {
        if col > 0 {
            out.push_str("  ");
        }
        let padded = pad(label, widths[col]);
        if color {
            let (r, g, b) = palette::token_for(label).color().to_rgb8();
            out.push_str(&format!("\x1b[1;38;2;{r};{g};{b}m{padded}\x1b[0m"));
        } else {
            out.push_str(&padded);
        }
    }
    out.push('\n');

    for (col, width) in widths.iter().enumerate() {
        if col > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');

    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push_str("  ");
            }
            out.push_str(&pad(cell, widths[col]));
        }
        out.push('\n');
    }

    out
}

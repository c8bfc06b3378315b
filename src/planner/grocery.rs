use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::{GroceryLine, Unit, Week};

/// Sum every ingredient of the week by (lower-cased item, unit), ignoring ownership.
///
/// Sorted by item name (then unit); quantities rounded to whole units.
pub fn aggregate_groceries(week: &Week) -> Vec<GroceryLine> {
    let mut totals: BTreeMap<(String, Unit), f64> = BTreeMap::new();
    for ing in week.ingredients() {
        *totals
            .entry((ing.item.to_lowercase(), ing.unit))
            .or_insert(0.0) += ing.quantity;
    }

    totals
        .into_iter()
        .map(|((item, unit), qty)| GroceryLine::new(item, unit, qty.round()))
        .collect()
}

/// Write the list as CSV with an `Item,Quantity,Unit` header.
///
/// Fields containing commas, quotes or newlines are quoted, inner quotes doubled.
pub fn write_grocery_csv<W: Write>(lines: &[GroceryLine], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(["Item", "Quantity", "Unit"])?;
    for line in lines {
        let quantity = line.quantity.to_string();
        wtr.write_record([line.item.as_str(), quantity.as_str(), line.unit.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn grocery_csv_string(lines: &[GroceryLine]) -> Result<String> {
    let mut buf = Vec::new();
    write_grocery_csv(lines, &mut buf)?;
    String::from_utf8(buf).map_err(|e| PlannerError::InvalidInput(e.to_string()))
}

pub fn export_grocery_csv<P: AsRef<Path>>(lines: &[GroceryLine], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_grocery_csv(lines, file)
}

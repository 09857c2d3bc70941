//! Point loading and table output (polars).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use duohull::PointSet;

/// Read columns `x` and `y` from a CSV file with a header row.
pub fn read_points_csv(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut coords = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => coords.push((x, y)),
            _ => bail!("{}: row {} has a missing coordinate", path.display(), row + 1),
        }
    }
    let points = PointSet::try_from_xy(coords)
        .with_context(|| format!("invalid point in {}", path.display()))?;
    Ok(points)
}

/// Write `df` as Parquet when `path` ends in `.parquet`, CSV otherwise.
pub fn write_table(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(df)?;
    }
    Ok(())
}

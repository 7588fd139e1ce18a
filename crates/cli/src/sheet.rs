use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gcloud_helpers::providers::sheets::SpreadsheetProvider;
use gcloud_helpers::{add_sheet_rows, get_sheet_data, overwrite_sheet_data, Row, SheetRef};

#[derive(Parser, Debug)]
pub struct SheetArgs {
    #[command(subcommand)]
    command: SheetCommands,
}

#[derive(Subcommand, Debug)]
enum SheetCommands {
    /// Print the values of a range as JSON
    Get(RangeArgs),
    /// Append rows after the last row of a range
    Append(WriteArgs),
    /// Replace the contents of a range
    Overwrite(WriteArgs),
}

#[derive(Parser, Debug)]
struct RangeArgs {
    /// The spreadsheet ID, as found in its URL
    #[arg(long, required = true)]
    spreadsheet_id: String,
    /// The A1-notation range, e.g. `Sheet1!A1:C10`
    #[arg(long, required = true)]
    range: String,
}

#[derive(Parser, Debug)]
struct WriteArgs {
    #[command(flatten)]
    target: RangeArgs,
    /// Rows as a JSON array of arrays, e.g. `[["a", 1], ["b", 2]]`
    #[arg(long, required = true)]
    rows: String,
}

impl RangeArgs {
    fn sheet_ref(&self) -> SheetRef {
        SheetRef::new(&self.spreadsheet_id, &self.range)
    }
}

fn parse_rows(raw: &str) -> Result<Vec<Row>> {
    serde_json::from_str(raw).context("--rows must be a JSON array of arrays")
}

pub async fn handle_sheet(sheets: &dyn SpreadsheetProvider, args: &SheetArgs) -> Result<()> {
    match &args.command {
        SheetCommands::Get(range) => {
            let rows = get_sheet_data(sheets, &range.sheet_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        SheetCommands::Append(write) => {
            let rows = parse_rows(&write.rows)?;
            let response = add_sheet_rows(sheets, &write.target.sheet_ref(), rows).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        SheetCommands::Overwrite(write) => {
            let rows = parse_rows(&write.rows)?;
            let response = overwrite_sheet_data(sheets, &write.target.sheet_ref(), rows).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

//! Handler for the `check` command.

use serde_json::json;

use super::command::DataArgs;
use super::{load, output};
use crate::application::ledger::LedgerService;
use crate::error::Result;

/// Execute the check command.
///
/// Loads every file; a rejected row has already been rendered by the loader
/// when this returns an error.
pub fn execute(ledger: &LedgerService, args: &DataArgs) -> Result<()> {
    let loaded = load::load_all(ledger, &args.files)?;
    let total: usize = loaded.iter().map(|file| file.rows).sum();

    if output::is_json() {
        let files: Vec<_> = loaded
            .iter()
            .map(|file| {
                json!({
                    "path": file.path.display().to_string(),
                    "rows": file.rows,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "check",
            "status": "ok",
            "files": files,
            "rows": total,
        }));
        return Ok(());
    }

    for file in &loaded {
        output::success(&format!("{} ({} rows)", file.path.display(), file.rows));
    }
    output::field("Total rows", total);
    Ok(())
}

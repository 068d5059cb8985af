//! Handler for the `delete` command.

use serde_json::json;

use super::command::DeleteArgs;
use super::{load, output};
use crate::application::ledger::LedgerService;
use crate::error::Result;

/// Execute the delete command.
pub fn execute(ledger: &LedgerService, args: &DeleteArgs) -> Result<()> {
    load::load_all(ledger, &args.data.files)?;

    let removed = ledger.delete_by_customer(&args.customer_name)?;
    let remaining = ledger.len()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "delete",
            "customer_name": args.customer_name,
            "removed": removed,
            "remaining": remaining,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Deleted {} purchase(s) of {}",
        removed,
        output::highlight(&args.customer_name)
    ));
    output::field("Remaining", remaining);
    Ok(())
}

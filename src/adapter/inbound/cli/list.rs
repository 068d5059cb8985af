//! Handler for the `list` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ListArgs;
use super::{load, output};
use crate::application::ledger::LedgerService;
use crate::domain::{Purchase, PurchaseFilter};
use crate::error::Result;

#[derive(Tabled)]
struct PurchaseRowView {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Purchase> for PurchaseRowView {
    fn from(purchase: &Purchase) -> Self {
        Self {
            date: purchase.purchase_date().to_string(),
            customer: purchase.customer_name().to_string(),
            country: purchase.country().to_string(),
            amount: purchase.amount().to_string(),
        }
    }
}

/// Execute the list command.
pub fn execute(ledger: &LedgerService, args: &ListArgs) -> Result<()> {
    load::load_all(ledger, &args.data.files)?;

    let filter = filter_from(args);
    let purchases = ledger.query(&filter)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "count": purchases.len(),
            "purchases": purchases,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    if purchases.is_empty() {
        output::note("No purchases match");
        return Ok(());
    }

    output::section(&format!("Purchases ({})", purchases.len()));
    let rows: Vec<PurchaseRowView> = purchases.iter().map(PurchaseRowView::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

fn filter_from(args: &ListArgs) -> PurchaseFilter {
    PurchaseFilter {
        country: args.country.clone(),
        start_date: args.from,
        end_date: args.to,
    }
}

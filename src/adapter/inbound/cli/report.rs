//! Handler for the `report` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ReportArgs;
use super::{load, output};
use crate::application::analytics::AnalyticsService;
use crate::application::ledger::LedgerService;
use crate::domain::{Report, SalesForecast};
use crate::error::Result;

#[derive(Tabled)]
struct ClientMeanRow {
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Average purchase")]
    mean: String,
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Clients")]
    clients: usize,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Day")]
    label: String,
    #[tabled(rename = "Projected sales")]
    value: String,
}

/// Execute the report command.
pub fn execute(
    ledger: &LedgerService,
    analytics: &AnalyticsService,
    args: &ReportArgs,
) -> Result<()> {
    load::load_all(ledger, &args.data.files)?;
    let report = analytics.build_report(args.forecast_days)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report",
            "report": serde_json::to_value(&report)?,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    render(&report);
    Ok(())
}

fn render(report: &Report) {
    output::section("Average purchase per client");
    let means: Vec<ClientMeanRow> = report
        .mean_purchases_per_client
        .iter()
        .map(|(customer, mean)| ClientMeanRow {
            customer: customer.clone(),
            mean: format!("{mean:.2}"),
        })
        .collect();
    output::lines(&Table::new(means).to_string());

    output::section("Clients per country");
    let countries: Vec<CountryRow> = report
        .clients_per_country
        .iter()
        .map(|(country, clients)| CountryRow {
            country: country.clone(),
            clients: *clients,
        })
        .collect();
    output::lines(&Table::new(countries).to_string());

    output::section("Sales forecast");
    match &report.sales_forecast {
        SalesForecast::NotRequested => output::note("No sales forecast requested"),
        SalesForecast::Computed(forecast) => {
            let rows: Vec<ForecastRow> = forecast
                .points()
                .iter()
                .map(|point| ForecastRow {
                    label: point.label.clone(),
                    value: format!("{:.2}", point.value),
                })
                .collect();
            output::lines(&Table::new(rows).to_string());
        }
    }
}

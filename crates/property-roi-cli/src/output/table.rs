use colored::Colorize;
use property_roi_core::formatting::{format_number, format_percent, format_years};
use property_roi_core::property_roi::LedgerRow;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::Alignment;
use tabled::Table;

use super::labels::{Labels, Locale};
use super::Report;

/// Print the summary record, the monthly ledger, then any warnings.
pub fn print_report(report: &Report, locale: Locale) {
    let labels = locale.labels();

    println!("{}", summary_table(report, labels));
    println!("{}", ledger_table(&report.output.result.schedule.rows, labels));

    let warnings = &report.output.warnings;
    if !warnings.is_empty() {
        println!("\n{}:", labels.warnings);
        for w in warnings {
            println!("  - {}", w);
        }
    }

    println!("\n{}: {}", labels.methodology, report.output.methodology);
}

fn summary_table(report: &Report, labels: &Labels) -> Table {
    let mut builder = Builder::default();
    builder.push_record([labels.field, labels.value]);
    for (label, value) in summary_fields(report, labels) {
        builder.push_record([label.to_string(), value]);
    }

    let mut table = builder.build();
    table.modify(Columns::single(1), Alignment::right());
    table
}

fn summary_fields(report: &Report, labels: &Labels) -> Vec<(&'static str, String)> {
    let params = &report.params;
    let analysis = &report.output.result;
    let summary = &analysis.summary;

    vec![
        (labels.purchase_price, format_number(Some(params.purchase_price))),
        (labels.holding_years, format_years(summary.own_years)),
        (labels.down_payment, format_number(Some(analysis.down_payment))),
        (labels.loan_term, params.loan_term_months.to_string()),
        (labels.loan_rate, format_percent(params.loan_rate)),
        (labels.total_interest, format_number(Some(summary.total_interest))),
        (labels.annual_rent, format_number(Some(params.annual_rent))),
        (labels.rental_yield_roi, format_percent(summary.rental_yield_roi)),
        (labels.resale_price, format_number(Some(params.resale_price))),
        (labels.appreciation_roi, format_percent(summary.appreciation_roi)),
        (labels.combined_roi, format_percent(summary.combined_roi)),
    ]
}

fn ledger_table(rows: &[LedgerRow], labels: &Labels) -> Table {
    let mut builder = Builder::default();
    builder.push_record(labels.columns);
    for row in rows {
        builder.push_record(ledger_record(row));
    }

    let mut table = builder.build();
    table.modify(Columns::new(..), Alignment::right());
    table
}

/// Every 12th period closes a year and is highlighted.
fn ledger_record(row: &LedgerRow) -> [String; 6] {
    let period = row.month.to_string();
    let period = if row.month % 12 == 0 {
        period.green().to_string()
    } else {
        period
    };

    [
        period,
        format_number(Some(row.principal_repayment)),
        format_number(Some(row.interest)),
        format_number(Some(row.total_payment)),
        format_number(Some(row.rent)),
        format_number(Some(row.net_cash_flow)),
    ]
}

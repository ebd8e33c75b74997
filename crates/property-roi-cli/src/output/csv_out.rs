use property_roi_core::property_roi::LedgerRow;
use rust_decimal::Decimal;
use std::io;

const HEADERS: [&str; 7] = [
    "month",
    "principal_repayment",
    "interest",
    "total_payment",
    "rent",
    "net_cash_flow",
    "rent_to_interest_ratio",
];

/// Write the ledger as CSV to stdout, one record per month.
pub fn print_csv(rows: &[LedgerRow]) {
    let stdout = io::stdout();
    if let Err(e) = write_ledger(stdout.lock(), rows) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_ledger<W: io::Write>(writer: W, rows: &[LedgerRow]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;

    for row in rows {
        wtr.write_record([
            row.month.to_string(),
            plain(row.principal_repayment),
            plain(row.interest),
            plain(row.total_payment),
            plain(row.rent),
            plain(row.net_cash_flow),
            row.rent_to_interest_ratio.map(plain).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_roi_core::property_roi::{build_schedule, InvestmentParams};

    fn render(params: &InvestmentParams) -> String {
        let schedule = build_schedule(params).unwrap();
        let mut buf = Vec::new();
        write_ledger(&mut buf, &schedule.rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_first_month() {
        let csv = render(&InvestmentParams::default());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "month,principal_repayment,interest,total_payment,rent,net_cash_flow,rent_to_interest_ratio"
        );
        assert_eq!(lines.next().unwrap(), "1,22222,12667,34889,25000,-9889,197");
        assert_eq!(csv.lines().count(), 241);
    }

    #[test]
    fn test_undefined_ratio_is_empty_field() {
        let params = InvestmentParams {
            loan_term_months: 1,
            holding_months: 2,
            ..Default::default()
        };
        let csv = render(&params);
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "2,0,0,0,25000,25000,");
    }
}

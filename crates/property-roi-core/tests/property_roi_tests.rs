use pretty_assertions::assert_eq;
use property_roi_core::property_roi::{
    analyze_investment, build_schedule, compute_summary, InvestmentParams,
};
use property_roi_core::RoiError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference scenario: 10M purchase, 20% down, 30-year loan at 1.9%, 20-year hold
// ===========================================================================

#[test]
fn test_reference_totals() {
    let params = InvestmentParams::default();
    let schedule = build_schedule(&params).unwrap();

    assert_eq!(schedule.rows.len(), 240);
    assert_eq!(schedule.total_interest, dec!(2_030_899));
    assert_eq!(schedule.rows[239].interest, dec!(4257));
    // 8,000,000 - 240 * 22,222
    assert_eq!(schedule.outstanding_balance, dec!(2_666_720));

    let summary = compute_summary(&params, schedule.total_interest).unwrap();
    assert_eq!(summary.total_cost, dec!(12_030_899));
    assert_eq!(summary.rental_yield_roi, dec!(2.49));
    assert_eq!(summary.appreciation_roi, dec!(-0.01));
    assert_eq!(summary.combined_roi, dec!(2.48));
}

#[test]
fn test_total_interest_is_row_sum() {
    for holding_months in [1, 12, 240, 360, 400] {
        let params = InvestmentParams {
            holding_months,
            ..Default::default()
        };
        let schedule = build_schedule(&params).unwrap();
        let summed: Decimal = schedule.rows.iter().map(|r| r.interest).sum();
        assert_eq!(summed, schedule.total_interest, "holding_months={holding_months}");
        assert_eq!(schedule.rows.len(), holding_months as usize);
    }
}

#[test]
fn test_rows_are_in_month_order() {
    let schedule = build_schedule(&InvestmentParams::default()).unwrap();
    let months: Vec<u32> = schedule.rows.iter().map(|r| r.month).collect();
    let expected: Vec<u32> = (1..=240).collect();
    assert_eq!(months, expected);
}

#[test]
fn test_rent_is_constant() {
    let params = InvestmentParams {
        annual_rent: dec!(100_000),
        holding_months: 400,
        ..Default::default()
    };
    let schedule = build_schedule(&params).unwrap();
    // 100,000 / 12 = 8,333.33
    assert!(schedule.rows.iter().all(|r| r.rent == dec!(8333)));
}

// ===========================================================================
// Loan term vs holding period
// ===========================================================================

#[test]
fn test_holding_shorter_than_term() {
    let params = InvestmentParams {
        holding_months: 120,
        ..Default::default()
    };
    let schedule = build_schedule(&params).unwrap();
    assert!(schedule
        .rows
        .iter()
        .all(|r| r.principal_repayment > Decimal::ZERO && r.interest > Decimal::ZERO));
    assert!(schedule.outstanding_balance > schedule.average_principal_repayment);
}

#[test]
fn test_holding_longer_than_term() {
    let params = InvestmentParams {
        holding_months: 400,
        ..Default::default()
    };
    let schedule = build_schedule(&params).unwrap();
    assert_eq!(schedule.rows.len(), 400);
    assert_eq!(schedule.total_interest, dec!(2_286_356));

    for row in &schedule.rows[360..] {
        assert_eq!(row.principal_repayment, Decimal::ZERO);
        assert_eq!(row.interest, Decimal::ZERO);
        assert_eq!(row.rent_to_interest_ratio, None);
    }
    assert!(schedule.rows[359].interest > Decimal::ZERO);
}

#[test]
fn test_balance_non_increasing_and_residual_small() {
    let params = InvestmentParams {
        holding_months: 360,
        ..Default::default()
    };
    let schedule = build_schedule(&params).unwrap();

    let mut balance = params.loan_principal();
    for row in &schedule.rows {
        let next = balance - row.principal_repayment;
        assert!(next <= balance);
        balance = next;
    }
    assert_eq!(balance, schedule.outstanding_balance);
    // 8,000,000 - 360 * 22,222 = 80, never amortized away
    assert_eq!(schedule.outstanding_balance, dec!(80));
    assert!(schedule.outstanding_balance >= Decimal::ZERO);
    assert!(schedule.outstanding_balance < schedule.average_principal_repayment);
}

#[test]
fn test_short_term_loan_fully_repaid() {
    let params = InvestmentParams {
        purchase_price: dec!(1_200_000),
        down_payment_rate: dec!(0),
        loan_term_months: 12,
        loan_rate: dec!(12),
        annual_rent: dec!(120_000),
        holding_months: 24,
        resale_price: dec!(1_500_000),
    };
    let output = analyze_investment(&params).unwrap();
    let result = &output.result;

    assert_eq!(result.schedule.total_interest, dec!(78_000));
    assert_eq!(result.schedule.outstanding_balance, Decimal::ZERO);
    assert_eq!(result.summary.combined_roi, dec!(18.08));
    assert!(output.warnings.is_empty());
}

// ===========================================================================
// Purity and errors
// ===========================================================================

#[test]
fn test_idempotent() {
    let params = InvestmentParams::default();
    let first = analyze_investment(&params).unwrap();
    let second = analyze_investment(&params).unwrap();
    assert_eq!(first.result, second.result);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_invalid_parameter_names_field() {
    let params = InvestmentParams {
        loan_rate: dec!(100),
        ..Default::default()
    };
    match build_schedule(&params).unwrap_err() {
        RoiError::InvalidParameter { field, .. } => assert_eq!(field, "loan_rate"),
        other => panic!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_oversized_inputs_rejected_without_panic() {
    let huge = Decimal::from_i128_with_scale(10_i128.pow(28), 0);
    let params = InvestmentParams {
        purchase_price: huge,
        annual_rent: huge,
        ..Default::default()
    };
    assert!(matches!(
        build_schedule(&params).unwrap_err(),
        RoiError::InvalidParameter { .. }
    ));
    assert!(analyze_investment(&params).is_err());

    let params = InvestmentParams {
        holding_months: u32::MAX,
        ..Default::default()
    };
    match build_schedule(&params).unwrap_err() {
        RoiError::InvalidParameter { field, .. } => assert_eq!(field, "holding_months"),
        other => panic!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_longest_accepted_hold() {
    let params = InvestmentParams {
        holding_months: 1200,
        ..Default::default()
    };
    let schedule = build_schedule(&params).unwrap();
    assert_eq!(schedule.rows.len(), 1200);
    assert_eq!(schedule.total_interest, dec!(2_286_356));
}

#[test]
fn test_error_display() {
    let err = RoiError::DivisionUndefined {
        context: "ROI on a zero total cost".into(),
    };
    assert_eq!(err.to_string(), "Division undefined in ROI on a zero total cost");
}

#[test]
fn test_output_serializes_to_json() {
    let output = analyze_investment(&InvestmentParams::default()).unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["result"]["schedule"]["rows"].as_array().unwrap().len(), 240);
    assert_eq!(value["result"]["schedule"]["rows"][0]["month"], 1);
    assert!(value["methodology"].as_str().unwrap().contains("Flat-Principal"));
}

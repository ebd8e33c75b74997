use clap::ValueEnum;

/// Language used for report labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Traditional Chinese (Taiwan)
    ZhTw,
    /// English
    En,
}

/// Display labels for the summary record and ledger table.
pub struct Labels {
    pub field: &'static str,
    pub value: &'static str,
    pub purchase_price: &'static str,
    pub holding_years: &'static str,
    pub down_payment: &'static str,
    pub loan_term: &'static str,
    pub loan_rate: &'static str,
    pub total_interest: &'static str,
    pub annual_rent: &'static str,
    pub rental_yield_roi: &'static str,
    pub resale_price: &'static str,
    pub appreciation_roi: &'static str,
    pub combined_roi: &'static str,
    /// Period, principal due, interest due, total due, income, income less payment
    pub columns: [&'static str; 6],
    pub warnings: &'static str,
    pub methodology: &'static str,
}

const ZH_TW: Labels = Labels {
    field: "項目",
    value: "數值",
    purchase_price: "買入價格",
    holding_years: "持有年數",
    down_payment: "頭期款",
    loan_term: "房貸期數",
    loan_rate: "房貸利率",
    total_interest: "利息總額",
    annual_rent: "每年租金收入",
    rental_yield_roi: "租金年投報率",
    resale_price: "售出價格",
    appreciation_roi: "價差年投報率",
    combined_roi: "總額年投報率",
    columns: [
        "期數",
        "應還本金",
        "應付利息",
        "應付本息金額",
        "收入",
        "收入-房貸",
    ],
    warnings: "注意事項",
    methodology: "計算方式",
};

const EN: Labels = Labels {
    field: "Field",
    value: "Value",
    purchase_price: "Purchase price",
    holding_years: "Holding years",
    down_payment: "Down payment",
    loan_term: "Loan term (months)",
    loan_rate: "Loan rate",
    total_interest: "Total interest",
    annual_rent: "Annual rent",
    rental_yield_roi: "Rental yield ROI (annual)",
    resale_price: "Resale price",
    appreciation_roi: "Appreciation ROI (annual)",
    combined_roi: "Combined ROI (annual)",
    columns: [
        "Period",
        "Principal due",
        "Interest due",
        "Total due",
        "Income",
        "Income - payment",
    ],
    warnings: "Warnings",
    methodology: "Methodology",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::ZhTw => &ZH_TW,
            Locale::En => &EN,
        }
    }
}

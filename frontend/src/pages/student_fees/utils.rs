use crate::{
    api::StudentFee,
    utils::format::is_overdue,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeSummary {
    pub total_billed: f64,
    pub outstanding: f64,
    pub paid: f64,
}

pub fn summarize_fees(fees: &[StudentFee]) -> FeeSummary {
    fees.iter().fold(FeeSummary::default(), |mut summary, fee| {
        summary.total_billed += fee.amount;
        summary.outstanding += fee.outstanding();
        summary.paid += fee.paid_amount;
        summary
    })
}

/// Unsettled fees whose due date has passed.
pub fn fee_is_overdue(fee: &StudentFee, today: NaiveDate) -> bool {
    !fee.status.is_settled() && is_overdue(fee.due_date, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FeeStatus;
    use wasm_bindgen_test::*;

    fn fee(id: i64, amount: f64, paid: f64, status: FeeStatus, due: Option<NaiveDate>) -> StudentFee {
        StudentFee {
            id,
            amount,
            paid_amount: paid,
            status,
            due_date: due,
            ..StudentFee::default()
        }
    }

    #[wasm_bindgen_test]
    fn summary_skips_settled_balances() {
        let fees = vec![
            fee(1, 1500.0, 500.0, FeeStatus::Partial, None),
            fee(2, 200.0, 0.0, FeeStatus::Waived, None),
            fee(3, 300.0, 300.0, FeeStatus::Paid, None),
        ];
        let summary = summarize_fees(&fees);
        assert_eq!(summary.total_billed, 2000.0);
        assert_eq!(summary.outstanding, 1000.0);
        assert_eq!(summary.paid, 800.0);
    }

    #[wasm_bindgen_test]
    fn only_unsettled_past_due_fees_are_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(fee_is_overdue(&fee(1, 10.0, 0.0, FeeStatus::Pending, past), today));
        assert!(!fee_is_overdue(&fee(2, 10.0, 10.0, FeeStatus::Paid, past), today));
        assert!(!fee_is_overdue(&fee(3, 10.0, 0.0, FeeStatus::Pending, None), today));
    }
}

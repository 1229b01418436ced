use crate::{
    api::{ApiError, Fee, FeePayload, FeeType, Id, StudentFee},
    utils::input::optional_text,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeeTab {
    #[default]
    Fees,
    StudentFees,
    Payments,
    Reports,
}

impl FeeTab {
    pub const ALL: [FeeTab; 4] = [
        FeeTab::Fees,
        FeeTab::StudentFees,
        FeeTab::Payments,
        FeeTab::Reports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeeTab::Fees => "Fee catalog",
            FeeTab::StudentFees => "Student fees",
            FeeTab::Payments => "Payments",
            FeeTab::Reports => "Reports",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Fee(Id),
    StudentFee(Id),
    Payment(Id),
}

impl DeleteTarget {
    pub fn noun(&self) -> &'static str {
        match self {
            DeleteTarget::Fee(_) => "fee",
            DeleteTarget::StudentFee(_) => "student fee",
            DeleteTarget::Payment(_) => "payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeFormState {
    pub fee_code: String,
    pub fee_name: String,
    pub description: String,
    pub amount: String,
    pub fee_type: FeeType,
    pub is_active: bool,
}

impl Default for FeeFormState {
    fn default() -> Self {
        Self {
            fee_code: String::new(),
            fee_name: String::new(),
            description: String::new(),
            amount: String::new(),
            fee_type: FeeType::Tuition,
            is_active: true,
        }
    }
}

impl FeeFormState {
    pub fn to_request(&self) -> Result<FeePayload, ApiError> {
        let fee_code = self.fee_code.trim();
        let fee_name = self.fee_name.trim();
        if fee_code.is_empty() || fee_name.is_empty() {
            return Err(ApiError::validation("Fee code and name are required"));
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or_else(|| ApiError::validation("Amount must be greater than 0"))?;
        Ok(FeePayload {
            fee_code: fee_code.to_string(),
            fee_name: fee_name.to_string(),
            description: optional_text(&self.description),
            amount,
            fee_type: self.fee_type,
            is_active: self.is_active,
        })
    }
}

pub fn total_billed(fees: &[StudentFee]) -> f64 {
    fees.iter().map(|fee| fee.amount).sum()
}

pub fn total_outstanding(fees: &[StudentFee]) -> f64 {
    fees.iter().map(StudentFee::outstanding).sum()
}

pub fn active_fee_count(fees: &[Fee]) -> usize {
    fees.iter().filter(|fee| fee.is_active).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FeeStatus;
    use wasm_bindgen_test::*;

    fn filled() -> FeeFormState {
        FeeFormState {
            fee_code: "TUI-2025".into(),
            fee_name: "Tuition".into(),
            amount: "45000".into(),
            ..FeeFormState::default()
        }
    }

    #[wasm_bindgen_test]
    fn fee_needs_code_name_and_positive_amount() {
        let missing = FeeFormState {
            fee_name: String::new(),
            ..filled()
        };
        assert_eq!(
            missing.to_request().unwrap_err().error,
            "Fee code and name are required"
        );
        for amount in ["0", "-5", "", "abc"] {
            let form = FeeFormState {
                amount: amount.into(),
                ..filled()
            };
            assert_eq!(
                form.to_request().unwrap_err().error,
                "Amount must be greater than 0"
            );
        }
        let payload = filled().to_request().unwrap();
        assert_eq!(payload.amount, 45000.0);
        assert_eq!(payload.description, None);
    }

    #[wasm_bindgen_test]
    fn totals_skip_settled_fees() {
        let fees = vec![
            StudentFee {
                id: 1,
                amount: 1000.0,
                paid_amount: 400.0,
                status: FeeStatus::Partial,
                ..StudentFee::default()
            },
            StudentFee {
                id: 2,
                amount: 300.0,
                status: FeeStatus::Waived,
                ..StudentFee::default()
            },
        ];
        assert_eq!(total_billed(&fees), 1300.0);
        assert_eq!(total_outstanding(&fees), 600.0);
    }
}

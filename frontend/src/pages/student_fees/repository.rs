use crate::api::{ApiClient, ApiError, Id, Payment, StudentFee};
use std::rc::Rc;

/// Balance figures as computed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceTotals {
    pub outstanding: f64,
    pub paid: f64,
}

#[derive(Clone)]
pub struct StudentFeesRepository {
    client: Rc<ApiClient>,
}

impl Default for StudentFeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentFeesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_fees(&self) -> Result<Vec<StudentFee>, ApiError> {
        self.client.list_my_fees().await
    }

    pub async fn fetch_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.client.list_my_payments().await
    }

    pub async fn fetch_totals(&self, student_id: Id) -> Result<BalanceTotals, ApiError> {
        Ok(BalanceTotals {
            outstanding: self.client.get_outstanding_amount(student_id).await?,
            paid: self.client.get_paid_amount(student_id).await?,
        })
    }
}

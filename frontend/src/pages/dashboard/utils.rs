use crate::api::{EnrollmentRequest, Payment, RequestStatus, User};

pub const RECENT_PAYMENTS: usize = 5;

pub fn greeting(user: Option<&User>) -> String {
    let name = user.and_then(|user| {
        user.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| Some(user.display_name()))
    });
    match name {
        Some(name) => format!("Welcome back, {}!", name),
        None => "Welcome back!".to_string(),
    }
}

/// Newest payments first; undated payments sort last.
pub fn recent_payments(payments: &[Payment], limit: usize) -> Vec<Payment> {
    let mut sorted = payments.to_vec();
    sorted.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
    sorted.truncate(limit);
    sorted
}

pub fn pending_request_count(requests: &[EnrollmentRequest]) -> usize {
    requests
        .iter()
        .filter(|request| request.status == RequestStatus::Pending)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    fn payment(id: i64, day: Option<u32>) -> Payment {
        Payment {
            id,
            amount: 100.0,
            payment_date: day.and_then(|d| {
                NaiveDate::from_ymd_opt(2024, 3, d).and_then(|date| date.and_hms_opt(9, 0, 0))
            }),
            ..Payment::default()
        }
    }

    #[wasm_bindgen_test]
    fn greeting_prefers_first_name() {
        let user = User {
            first_name: Some("Jane".into()),
            full_name: Some("Jane Wanjiru".into()),
            ..User::default()
        };
        assert_eq!(greeting(Some(&user)), "Welcome back, Jane!");
        let unnamed = User {
            id: 9,
            registration_number: Some("STU009".into()),
            ..User::default()
        };
        assert_eq!(greeting(Some(&unnamed)), "Welcome back, STU009!");
        assert_eq!(greeting(None), "Welcome back!");
    }

    #[wasm_bindgen_test]
    fn recent_payments_are_newest_first_and_capped() {
        let payments = vec![
            payment(1, Some(2)),
            payment(2, None),
            payment(3, Some(20)),
            payment(4, Some(11)),
        ];
        let recent = recent_payments(&payments, 3);
        let ids: Vec<i64> = recent.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 1]);
    }

    #[wasm_bindgen_test]
    fn counts_only_pending_requests() {
        let requests = vec![
            EnrollmentRequest {
                id: 1,
                status: RequestStatus::Pending,
                ..EnrollmentRequest::default()
            },
            EnrollmentRequest {
                id: 2,
                status: RequestStatus::Approved,
                ..EnrollmentRequest::default()
            },
        ];
        assert_eq!(pending_request_count(&requests), 1);
    }
}

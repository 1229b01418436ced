use crate::api::{EnrollmentRequest, Id, RequestStatus};

/// The student's newest request for `program_id`, if any.
pub fn latest_request_for(
    requests: &[EnrollmentRequest],
    program_id: Id,
) -> Option<&EnrollmentRequest> {
    requests
        .iter()
        .filter(|request| request.program.id == program_id)
        .max_by(|a, b| a.requested_at.cmp(&b.requested_at).then(a.id.cmp(&b.id)))
}

/// A rejected request may be followed by a new one; pending or approved may not.
pub fn can_open_wizard(latest: Option<&EnrollmentRequest>) -> bool {
    !matches!(
        latest.map(|request| request.status),
        Some(RequestStatus::Pending) | Some(RequestStatus::Approved)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Program;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    fn request(id: Id, program_id: Id, day: u32, status: RequestStatus) -> EnrollmentRequest {
        EnrollmentRequest {
            id,
            program: Program {
                id: program_id,
                ..Program::default()
            },
            status,
            requested_at: NaiveDate::from_ymd_opt(2024, 1, day)
                .and_then(|date| date.and_hms_opt(8, 0, 0)),
            ..EnrollmentRequest::default()
        }
    }

    #[wasm_bindgen_test]
    fn newest_request_wins() {
        let requests = vec![
            request(1, 2, 3, RequestStatus::Rejected),
            request(2, 2, 9, RequestStatus::Pending),
            request(3, 4, 20, RequestStatus::Approved),
        ];
        assert_eq!(latest_request_for(&requests, 2).map(|r| r.id), Some(2));
        assert!(latest_request_for(&requests, 7).is_none());
    }

    #[wasm_bindgen_test]
    fn only_rejected_or_missing_requests_allow_new_one() {
        let rejected = request(1, 2, 3, RequestStatus::Rejected);
        let pending = request(2, 2, 3, RequestStatus::Pending);
        assert!(can_open_wizard(None));
        assert!(can_open_wizard(Some(&rejected)));
        assert!(!can_open_wizard(Some(&pending)));
    }
}

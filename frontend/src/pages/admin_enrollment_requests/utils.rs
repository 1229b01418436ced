use crate::api::{EnrollmentRequest, RequestStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Decision::Approve => "approved",
            Decision::Reject => "rejected",
        }
    }
}

/// A decision waiting for confirmation, with the notes typed so far.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDecision {
    pub request: EnrollmentRequest,
    pub decision: Decision,
    pub notes: String,
}

/// `None` shows every request.
pub type StatusFilter = Option<RequestStatus>;

pub const FILTERS: [StatusFilter; 4] = [
    None,
    Some(RequestStatus::Pending),
    Some(RequestStatus::Approved),
    Some(RequestStatus::Rejected),
];

pub fn filter_label(filter: StatusFilter) -> &'static str {
    filter.map(|status| status.label()).unwrap_or("All")
}

pub fn matches_filter(request: &EnrollmentRequest, filter: StatusFilter) -> bool {
    filter.map_or(true, |status| request.status == status)
}

pub fn count_for(requests: &[EnrollmentRequest], filter: StatusFilter) -> usize {
    requests
        .iter()
        .filter(|request| matches_filter(request, filter))
        .count()
}

pub fn filter_requests(requests: &[EnrollmentRequest], filter: StatusFilter) -> Vec<EnrollmentRequest> {
    requests
        .iter()
        .filter(|request| matches_filter(request, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn request(id: i64, status: RequestStatus) -> EnrollmentRequest {
        EnrollmentRequest {
            id,
            status,
            ..EnrollmentRequest::default()
        }
    }

    #[wasm_bindgen_test]
    fn counts_follow_filters() {
        let requests = vec![
            request(1, RequestStatus::Pending),
            request(2, RequestStatus::Pending),
            request(3, RequestStatus::Approved),
            request(4, RequestStatus::Rejected),
        ];
        let counts: Vec<usize> = FILTERS.iter().map(|f| count_for(&requests, *f)).collect();
        assert_eq!(counts, vec![4, 2, 1, 1]);
        let pending = filter_requests(&requests, Some(RequestStatus::Pending));
        assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[wasm_bindgen_test]
    fn labels_read_naturally() {
        assert_eq!(filter_label(None), "All");
        assert_eq!(filter_label(Some(RequestStatus::Rejected)), "Rejected");
        assert_eq!(Decision::Approve.past_tense(), "approved");
    }
}

use kernel::model::booking::lifecycle::BookingRejection;
use serde::Serialize;

pub mod auth;
pub mod booking;
pub mod service;
pub mod user;

pub const SUCCESS_CODE: u32 = 1000;

/// すべての業務系エンドポイントの共通封筒。
/// 業務上の却下は HTTP 200 のままこの code / message で種別を伝え、
/// 認可の拒否だけがトランスポートレベルのエラーになる。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: None,
            result: Some(result),
        }
    }

    pub fn rejected(rejection: BookingRejection) -> Self {
        Self {
            code: rejection_code(rejection),
            message: Some(rejection.to_string()),
            result: None,
        }
    }
}

/// 却下種別ごとに固有のアプリケーションコードを割り当てる
pub fn rejection_code(rejection: BookingRejection) -> u32 {
    match rejection {
        BookingRejection::AccountNotActive => 1004,
        BookingRejection::ServiceNotFound => 1005,
        BookingRejection::BookingNotFound => 1006,
        BookingRejection::InvalidBookingStatus => 1007,
        BookingRejection::CannotCancel => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_code_1000() {
        let res = ApiResponse::ok("done".to_string());
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["code"], 1000);
        assert_eq!(json["result"], "done");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn each_rejection_kind_has_a_distinct_code() {
        let all = [
            BookingRejection::AccountNotActive,
            BookingRejection::ServiceNotFound,
            BookingRejection::BookingNotFound,
            BookingRejection::InvalidBookingStatus,
            BookingRejection::CannotCancel,
        ];
        let mut codes: Vec<u32> = all.into_iter().map(rejection_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
        assert!(!codes.contains(&SUCCESS_CODE));
    }

    #[test]
    fn rejection_envelope_is_a_success_response_with_a_message() {
        let res: ApiResponse<String> =
            ApiResponse::rejected(BookingRejection::ServiceNotFound);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["code"], 1005);
        assert_eq!(json["message"], "Service not found");
        assert!(json.get("result").is_none());
    }
}

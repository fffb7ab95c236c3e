//! The `{success, data, error}` wrapper around every API response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page metadata attached to paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PaginationInfo {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

/// Body of the liveness check. Flat rather than wrapped in `data`, so
/// monitors can read `success` and `message` at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct HealthStatus {
    pub success: bool,
    pub message: String,
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: None,
            total: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            pagination: None,
            total: None,
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationInfo) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total as u64);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful listing with `total` set to the number of rows.
    pub fn list(data: Vec<T>) -> Self {
        let total = data.len();
        Self::ok(data).with_total(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    #[test]
    fn test_failure_omits_absent_fields() {
        let resp: ApiResponse<()> = ApiResponse::failure("Department not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Department not found"}));
    }

    #[test]
    fn test_list_sets_total() {
        let resp = ApiResponse::list(vec![1, 2, 3]);
        assert_eq!(resp.total, Some(3));
        assert!(resp.pagination.is_none());
    }

    #[test]
    fn test_parse_paginated_envelope() {
        let json = r#"{"success":true,"data":[1,2],"pagination":{"page":1,"pageSize":2,"total":8}}"#;
        let resp: ApiResponse<Vec<u8>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, Some(vec![1, 2]));
        assert_eq!(
            resp.pagination,
            Some(PaginationInfo { page: 1, page_size: 2, total: 8 })
        );
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_parse_single_record_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "id": 2,
                "nameHi": "हृदय रोग विभाग",
                "nameEn": "Cardiology",
                "descriptionHi": "दिल से संबंधित बीमारियों का इलाज",
                "descriptionEn": "Treatment of heart-related diseases",
                "opdTimings": "Mon-Sat 9:00 AM - 1:00 PM",
                "locationText": "Block B, First Floor",
                "locationTextHi": "ब्लॉक B, पहली मंज़िल",
                "order": 2
            }
        }"#;
        let resp: ApiResponse<Department> = serde_json::from_str(json).unwrap();
        let department = resp.data.unwrap();
        assert_eq!(department.id, 2);
        assert_eq!(department.name_en, "Cardiology");
        assert!(resp.pagination.is_none());
        assert!(resp.total.is_none());

        let failure: ApiResponse<Department> =
            serde_json::from_str(r#"{"success":false,"error":"Department not found"}"#).unwrap();
        assert!(failure.data.is_none());
        assert_eq!(failure.error.as_deref(), Some("Department not found"));
    }

    #[test]
    fn test_parse_health_status() {
        let json = r#"{"success":true,"message":"PMCH API is running","timestamp":"2024-01-15T10:30:00Z"}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(health.success);
        assert_eq!(health.message, "PMCH API is running");
        assert_eq!(health.timestamp.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}

//! Dashboard Requests

use serde::Deserialize;

use super::ApiClient;
use crate::models::{DashboardSummary, StandardFees};

/// The standard-wise fees endpoint nests its rows under `data`
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<T>,
}

impl ApiClient {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, String> {
        self.get_json("/dashboard").await
    }

    pub async fn standard_wise_fees(&self) -> Result<Vec<StandardFees>, String> {
        let payload: DataEnvelope<Vec<StandardFees>> =
            self.get_json("/dashboard/fees/standard-wise").await?;
        Ok(payload.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope_unwraps_rows() {
        let json = r#"{"data":[{"standard":"5","totalFee":12000}]}"#;
        let payload: DataEnvelope<Vec<StandardFees>> = serde_json::from_str(json).unwrap();
        let rows = payload.data.unwrap_or_default();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].standard, "5");
        assert_eq!(rows[0].total_fee, 12000.0);

        let payload: DataEnvelope<Vec<StandardFees>> = serde_json::from_str("{}").unwrap();
        assert!(payload.data.unwrap_or_default().is_empty());
    }
}

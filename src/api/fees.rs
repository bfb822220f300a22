//! Fee Requests
//!
//! Structure, payments, per-student status, pending list and analytics.
//! All fee arithmetic happens server-side; this module only moves the
//! numbers.

use serde::Serialize;

use super::ApiClient;
use crate::models::{FeeAnalytics, FeeStatus, FeeStructure, PaymentMode, PendingFeeRow};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StructureArgs<'a> {
    standard: &'a str,
    yearly_fee: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayArgs<'a> {
    student_id: &'a str,
    amount: &'a str,
    payment_mode: PaymentMode,
    note: &'a str,
}

impl ApiClient {
    pub async fn set_fee_structure(&self, standard: &str, yearly_fee: &str) -> Result<(), String> {
        self.post_unit(
            "/fees/structure",
            &StructureArgs {
                standard,
                yearly_fee,
            },
        )
        .await
    }

    pub async fn list_fee_structures(&self) -> Result<Vec<FeeStructure>, String> {
        self.get_json("/fees/structure").await
    }

    /// Record a payment; payments are additive, never a replacement
    pub async fn pay_fee(
        &self,
        student_id: &str,
        amount: &str,
        payment_mode: PaymentMode,
        note: &str,
    ) -> Result<(), String> {
        self.post_unit(
            "/fees/pay",
            &PayArgs {
                student_id,
                amount,
                payment_mode,
                note,
            },
        )
        .await
    }

    pub async fn fee_status(&self, student_id: &str) -> Result<FeeStatus, String> {
        self.get_json(&format!("/fees/status/{}", Self::seg(student_id)))
            .await
    }

    pub async fn pending_fees(&self, standard: &str) -> Result<Vec<PendingFeeRow>, String> {
        self.get_json_query("/fees/pending", &[("standard", standard)])
            .await
    }

    pub async fn fee_analytics(&self) -> Result<FeeAnalytics, String> {
        self.get_json("/fees/analytics").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_args_wire_names() {
        let args = PayArgs {
            student_id: "s1",
            amount: "500",
            payment_mode: PaymentMode::Cheque,
            note: "",
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            json,
            r#"{"studentId":"s1","amount":"500","paymentMode":"Cheque","note":""}"#
        );
    }
}

//! JSON-RPC ledger connection
//!
//! Implements [`LedgerConnection`] against a Solana-style JSON-RPC
//! endpoint: `getBalance` for balance queries and polled
//! `getSignatureStatuses` for confirmation. Transport only — no retry
//! logic beyond the confirmation poll, no request batching.

use crate::domain::collaborators::LedgerConnection;
use crate::shared::constants::{CONFIRMATION_POLL_INTERVAL_MS, CONFIRMATION_TIMEOUT_MS};
use crate::shared::error::TransferError;
use crate::shared::types::{Address, CommitmentLevel};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Ledger connection over HTTP JSON-RPC
pub struct HttpLedgerConnection {
    client: Client,
    rpc_url: String,
}

impl HttpLedgerConnection {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, TransferError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let resp = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransferError::network(format!("{} request failed: {}", method, e)))?;
        let resp_json: Value = resp
            .json()
            .await
            .map_err(|e| TransferError::network(format!("invalid {} response: {}", method, e)))?;
        if let Some(error) = resp_json.get("error") {
            return Err(TransferError::network(format!(
                "{} RPC error: {}",
                method, error
            )));
        }
        resp_json
            .get("result")
            .cloned()
            .ok_or_else(|| TransferError::network(format!("no result in {} response", method)))
    }
}

#[async_trait]
impl LedgerConnection for HttpLedgerConnection {
    async fn get_balance(&self, address: &Address) -> Result<u64, TransferError> {
        let result = self
            .rpc_call("getBalance", json!([address.as_str()]))
            .await?;
        parse_balance(&result)
    }

    async fn confirm_transaction(
        &self,
        signature: &str,
        commitment: CommitmentLevel,
    ) -> Result<(), TransferError> {
        let deadline = Instant::now() + Duration::from_millis(CONFIRMATION_TIMEOUT_MS);
        loop {
            let result = self
                .rpc_call("getSignatureStatuses", json!([[signature]]))
                .await?;

            match signature_status(&result, commitment)? {
                SignatureStatus::Satisfied => return Ok(()),
                SignatureStatus::Pending => {}
            }

            if Instant::now() >= deadline {
                return Err(TransferError::confirmation(format!(
                    "timed out waiting for {} commitment on {}",
                    commitment.as_str(),
                    signature
                )));
            }
            sleep(Duration::from_millis(CONFIRMATION_POLL_INTERVAL_MS)).await;
        }
    }
}

#[derive(Debug)]
enum SignatureStatus {
    Satisfied,
    Pending,
}

fn parse_balance(result: &Value) -> Result<u64, TransferError> {
    result
        .get("value")
        .and_then(Value::as_u64)
        .ok_or_else(|| TransferError::network("malformed getBalance response"))
}

/// Interpret one `getSignatureStatuses` result against the wanted
/// commitment. A transaction that landed with an on-chain error is a
/// confirmation failure, not a pending state.
fn signature_status(
    result: &Value,
    commitment: CommitmentLevel,
) -> Result<SignatureStatus, TransferError> {
    let status = match result.get("value").and_then(|v| v.get(0)) {
        Some(status) if !status.is_null() => status,
        _ => return Ok(SignatureStatus::Pending),
    };

    if let Some(err) = status.get("err") {
        if !err.is_null() {
            return Err(TransferError::confirmation(format!(
                "transaction failed on chain: {}",
                err
            )));
        }
    }

    let reached = status
        .get("confirmationStatus")
        .and_then(Value::as_str)
        .unwrap_or("processed");
    if commitment_satisfied(commitment, reached) {
        Ok(SignatureStatus::Satisfied)
    } else {
        Ok(SignatureStatus::Pending)
    }
}

fn commitment_satisfied(wanted: CommitmentLevel, reached: &str) -> bool {
    match wanted {
        CommitmentLevel::Processed => {
            matches!(reached, "processed" | "confirmed" | "finalized")
        }
        CommitmentLevel::Confirmed => matches!(reached, "confirmed" | "finalized"),
        CommitmentLevel::Finalized => reached == "finalized",
    }
}

//! Dashboard state and its text rendering

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Write;

/// Last successfully polled view of the relay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub latest_utxo: Value,
    pub address_balances: Value,
    pub total_balance: Value,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            latest_utxo: json!([]),
            address_balances: json!([]),
            total_balance: json!(0),
            updated_at: None,
        }
    }
}

impl DashboardSnapshot {
    /// Build a snapshot from the three poll results
    pub fn from_parts(latest_utxo: Value, address_balances: Value, total_balances: Value) -> Self {
        Self {
            latest_utxo,
            address_balances,
            total_balance: Self::extract_total(total_balances),
            updated_at: Some(Utc::now()),
        }
    }

    /// `gettotalbalances` may answer `{"total": x, ..}` or a bare amount
    fn extract_total(total_balances: Value) -> Value {
        match total_balances {
            Value::Object(mut fields) if fields.contains_key("total") => {
                fields.remove("total").unwrap_or(Value::Null)
            }
            Value::Null => json!(0),
            other => other,
        }
    }
}

/// Render a snapshot as a plain-text dashboard
pub fn render(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let updated = snapshot
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let _ = writeln!(out, "Bitcoin Dashboard (updated {})", updated);
    render_section(&mut out, "Latest UTXO in Last Block", &snapshot.latest_utxo);
    render_section(&mut out, "Top Balances", &snapshot.address_balances);
    render_section(&mut out, "Total Valid Balance", &snapshot.total_balance);
    out
}

fn render_section(out: &mut String, title: &str, value: &Value) {
    let _ = writeln!(out);
    let _ = writeln!(out, "== {} ==", title);
    match value {
        Value::Array(items) if items.is_empty() => {
            let _ = writeln!(out, "(none)");
        }
        Value::Array(items) => {
            for item in items {
                let _ = writeln!(out, "- {}", item);
            }
        }
        Value::Object(_) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            let _ = writeln!(out, "{}", pretty);
        }
        Value::String(text) => {
            let _ = writeln!(out, "{}", text);
        }
        other => {
            let _ = writeln!(out, "{}", other);
        }
    }
}

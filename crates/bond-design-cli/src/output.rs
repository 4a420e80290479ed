use serde_json::Value;
use std::io;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Render the payload as a two-column field/value table. Enveloped results
/// show the `result` section first, then warnings and methodology.
fn print_table(value: &Value) {
    let (payload, envelope) = split_envelope(value);

    match payload {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &render_scalar(val)]);
            }
            println!("{}", Table::from(builder));
        }
        other => println!("{}", render_scalar(other)),
    }

    if let Some(env) = envelope {
        if let Some(Value::Array(warnings)) = env.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for w in warnings {
                    if let Value::String(s) = w {
                        println!("  - {}", s);
                    }
                }
            }
        }
        if let Some(Value::String(methodology)) = env.get("methodology") {
            println!("\nMethodology: {}", methodology);
        }
    }
}

/// Two-column CSV of the payload fields.
fn print_csv(value: &Value) {
    let (payload, _) = split_envelope(value);
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(map) = payload {
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &render_scalar(val)]);
        }
    } else {
        let _ = wtr.write_record(["value", &render_scalar(payload)]);
    }
    let _ = wtr.flush();
}

/// Print just the headline figure: the rating for predictions, the score
/// for score reports, the implied benchmark for market snapshots.
fn print_minimal(value: &Value) {
    let (payload, _) = split_envelope(value);

    const PRIORITY_KEYS: [&str; 4] = [
        "credit_rating",
        "credit_score",
        "implied_market_rate",
        "coupon_rate",
    ];

    if let Value::Object(map) = payload {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", render_scalar(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, render_scalar(val));
            return;
        }
    }
    println!("{}", render_scalar(payload));
}

/// If `value` is a computation envelope, return its `result` payload and
/// the envelope itself; otherwise the value alone.
fn split_envelope(value: &Value) -> (&Value, Option<&serde_json::Map<String, Value>>) {
    match value {
        Value::Object(map) if map.contains_key("result") && map.contains_key("metadata") => {
            (map.get("result").unwrap(), Some(map))
        }
        other => (other, None),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

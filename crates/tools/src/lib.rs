pub mod sim_host;

use hotkey_core::{BindingTable, EquipOutcome, KeyReport};

use crate::sim_host::{SimHost, SimItemId};

fn name(host: &SimHost, id: SimItemId) -> &str {
    host.name_of(id).unwrap_or("<gone>")
}

/// One line describing what a fired key did.
pub fn describe_report(host: &SimHost, report: &KeyReport<SimItemId>) -> String {
    let key = report.key;
    let outcome = match &report.result {
        Ok(Some(outcome)) => outcome,
        Ok(None) => return format!("{key}: no matching item"),
        Err(err) => return format!("{key}: failed: {err}"),
    };

    match *outcome {
        EquipOutcome::Equipped { item } => format!("{key}: equipped {}", name(host, item)),
        EquipOutcome::PutOn { item, slot, replaced } => {
            let mut line = format!("{key}: put on {} at {slot}", name(host, item));
            if let Some(prev) = replaced {
                line.push_str(&format!(", took off {}", name(host, prev)));
            }
            line
        }
        EquipOutcome::TookOff { item, slot, restored } => {
            let mut line = format!("{key}: took off {} at {slot}", name(host, item));
            if let Some(prev) = restored {
                line.push_str(&format!(", restored {}", name(host, prev)));
            }
            line
        }
    }
}

/// `KEY: pattern, pattern` per binding, in key order.
pub fn format_bindings(table: &BindingTable) -> Vec<String> {
    table
        .iter()
        .map(|(key, patterns)| {
            let patterns: Vec<String> = patterns.iter().map(ToString::to_string).collect();
            format!("{key}: {}", patterns.join(", "))
        })
        .collect()
}

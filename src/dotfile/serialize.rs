use crate::record::{AliasRecord, Kind};

use super::DISABLED_PREFIX;

/// Render records back to dotfile text.
///
/// Disabled entries get [`DISABLED_PREFIX`] on every line. Blank lines are
/// dropped from the output and every kept line ends with `\n`.
pub fn serialize(records: &[AliasRecord]) -> String {
    let mut raw = String::new();

    for record in records {
        match (record.kind, record.active) {
            (Kind::Function, true) => {
                raw.push_str(&record.body);
                if !record.body.ends_with('\n') {
                    raw.push('\n');
                }
            }
            (Kind::Function, false) => {
                let commented: Vec<String> = record
                    .body
                    .lines()
                    .map(|line| format!("{DISABLED_PREFIX}{line}"))
                    .collect();
                raw.push_str(&commented.join("\n"));
                raw.push('\n');
            }
            (Kind::Alias, true) => {
                raw.push_str(record.body.trim());
                raw.push('\n');
            }
            (Kind::Alias, false) => {
                raw.push_str(DISABLED_PREFIX);
                raw.push_str(record.body.trim());
                raw.push('\n');
            }
        }
    }

    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .fold(String::with_capacity(raw.len()), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

use crate::record::{AliasRecord, Kind, FUNCTION_OPENER};

use super::DISABLED_PREFIX;

/// Function block being accumulated.
struct OpenBlock {
    active: bool,
    body: String,
    opener: String,
}

/// Parse dotfile text into records, preserving file order.
///
/// Lines that are neither aliases nor part of a function block are dropped.
/// A function block that is never closed produces no record. `\r\n` line
/// endings are accepted and stored bodies always use `\n`.
pub fn parse(text: &str) -> Vec<AliasRecord> {
    let mut records = Vec::new();
    let mut block: Option<OpenBlock> = None;

    for line in text.lines() {
        if line.contains(FUNCTION_OPENER) {
            if let Some(dangling) = block.take() {
                tracing::warn!(opener = %dangling.opener, "function block never closed; dropping it");
            }
            let (active, first) = split_marker(line);
            block = Some(OpenBlock {
                active,
                body: format!("{first}\n"),
                opener: line.to_string(),
            });
            continue;
        }

        if let Some(open) = block.as_mut() {
            let stored = if open.active {
                line
            } else {
                line.strip_prefix(DISABLED_PREFIX).unwrap_or(line)
            };
            open.body.push_str(stored);
            open.body.push('\n');

            let closer = if open.active { "}" } else { "# }" };
            if line.trim() == closer {
                if let Some(done) = block.take() {
                    records.push(AliasRecord {
                        active: done.active,
                        kind: Kind::Function,
                        body: done.body,
                    });
                }
            }
            continue;
        }

        if line.starts_with("alias") || line.starts_with("# alias") {
            let (active, body) = split_marker(line);
            records.push(AliasRecord {
                active,
                kind: Kind::Alias,
                body: body.to_string(),
            });
        }
    }

    if let Some(dangling) = block {
        tracing::warn!(opener = %dangling.opener, "function block never closed; dropping it");
    }

    records
}

/// Strip the disabled marker, reporting whether the line was enabled.
fn split_marker(line: &str) -> (bool, &str) {
    line.strip_prefix(DISABLED_PREFIX)
        .map_or((true, line), |rest| (false, rest))
}

use crate::dotfile::DISABLED_PREFIX;

/// Rewrite `script` so it contains exactly one copy of `source_line`,
/// commented out unless `enabled`.
///
/// Every existing line mentioning `source_line` is removed first, so applying
/// this twice with the same arguments gives the same text as applying it once.
pub fn set_integration(script: &str, source_line: &str, enabled: bool) -> String {
    let kept: Vec<&str> = script
        .split('\n')
        .filter(|line| !line.contains(source_line))
        .collect();
    let mut out = kept.join("\n").trim_end_matches('\n').to_string();

    if !out.is_empty() {
        out.push('\n');
    }
    if !enabled {
        out.push_str(DISABLED_PREFIX);
    }
    out.push_str(source_line);
    out.push('\n');
    out
}

/// True iff `script` has a line equal to `source_line`, i.e. present and not commented out.
pub fn check_integration(script: &str, source_line: &str) -> bool {
    script.lines().any(|line| line == source_line)
}

//! The entries managed in the dotfile.

/// Substring that opens a function block.
pub(crate) const FUNCTION_OPENER: &str = "() {";

/// Whether an entry is a one-line alias or a multi-line shell function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `alias name='command'`
    Alias,
    /// `name() { ... }`
    Function,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alias => f.pad("alias"),
            Self::Function => f.pad("function"),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "alias" => Ok(Self::Alias),
            "function" | "fn" => Ok(Self::Function),
            _ => anyhow::bail!("Unknown entry kind: {s} (expected alias or function)"),
        }
    }
}

/// One alias or function definition, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// Enabled entries are written as-is; disabled ones are commented out line by line.
    pub active: bool,
    /// Alias or function.
    pub kind: Kind,
    /// Raw definition text without any comment marker. Function bodies are
    /// newline-terminated and run from the `name() {` line through the closing `}`.
    pub body: String,
}

impl AliasRecord {
    /// An enabled alias line.
    pub fn alias(body: impl Into<String>) -> Self {
        Self { active: true, kind: Kind::Alias, body: body.into() }
    }

    /// An enabled function block.
    pub fn function(body: impl Into<String>) -> Self {
        Self { active: true, kind: Kind::Function, body: body.into() }
    }

    /// Name being defined, e.g. `ll` for `alias ll='ls -la'` or `greet` for
    /// `greet() {`. Returns `None` when the body does not look like either form.
    pub fn name(&self) -> Option<&str> {
        let first = self.body.lines().next()?.trim();
        let name = match self.kind {
            Kind::Alias => {
                let rest = first.strip_prefix("alias")?.trim_start();
                let rest = rest.strip_prefix("--").map_or(rest, str::trim_start);
                rest.split_once('=')?.0
            }
            Kind::Function => first.split_once("()")?.0,
        };
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Check that the body has the shape its kind requires, so that it comes
    /// back unchanged when the dotfile is parsed again.
    ///
    /// An alias is a single line starting with `alias`. A function starts with
    /// a line containing `() {`, ends with a line that trims to `}`, and has no
    /// other line that would open or close a block.
    ///
    /// # Errors
    ///
    /// Fails with a message naming the offending line.
    pub fn validate(&self) -> anyhow::Result<()> {
        let body = self.body.trim();
        if body.is_empty() {
            anyhow::bail!("Refusing an empty {}", self.kind);
        }
        match self.kind {
            Kind::Alias => {
                if body.contains('\n') {
                    anyhow::bail!("An alias must be a single line; use --function for multi-line definitions");
                }
                if !body.starts_with("alias") {
                    anyhow::bail!("An alias must start with `alias`, got: {body}");
                }
                if body.contains(FUNCTION_OPENER) {
                    anyhow::bail!("An alias must not contain `{FUNCTION_OPENER}`: {body}");
                }
            }
            Kind::Function => {
                let lines: Vec<&str> = body.lines().collect();
                let (first, last) = (lines[0], lines[lines.len() - 1]);
                if !first.contains(FUNCTION_OPENER) {
                    anyhow::bail!("A function must start with `name() {{`, got: {first}");
                }
                if lines.len() < 2 || last.trim() != "}" {
                    anyhow::bail!("A function must end with a line containing only `}}`");
                }
                for line in &lines[1..lines.len() - 1] {
                    if line.contains(FUNCTION_OPENER) {
                        anyhow::bail!("Nested function openers are not supported: {}", line.trim());
                    }
                    if line.trim() == "}" {
                        anyhow::bail!("Only the last line of a function may be a lone `}}`");
                    }
                }
            }
        }
        Ok(())
    }

    /// One-line summary used when listing entries.
    pub fn summary(&self) -> &str {
        self.body.lines().next().unwrap_or("").trim()
    }
}

use alias_d::{config::Config, AliasRecord, AliasStore, Kind};
use anyhow::{bail, Context, Result};

fn open_store() -> Result<AliasStore> {
    AliasStore::from_config(&Config::load()?)
}

/// Resolve a 1-based position or a defined name to an index into the store.
fn resolve(store: &AliasStore, entry: &str) -> Result<usize> {
    if let Ok(n) = entry.parse::<usize>() {
        if n == 0 || n > store.len() {
            bail!("No entry #{n} ({} entries)", store.len());
        }
        return Ok(n - 1);
    }
    store
        .find(entry)
        .with_context(|| format!("No alias or function named {entry}"))
}

/// `-` means read the body from stdin, which is the practical way to pass a
/// multi-line function.
fn read_body(body: String) -> Result<String> {
    if body != "-" {
        return Ok(body);
    }
    let mut buf = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
        .context("Failed to read body from stdin")?;
    Ok(buf)
}

pub fn cmd_list() -> Result<()> {
    let store = open_store()?;
    if store.is_empty() {
        eprintln!("No entries in {}", store.path().display());
        return Ok(());
    }
    for (i, record) in store.records().iter().enumerate() {
        let mark = if record.active { "x" } else { " " };
        println!("{:>3}. [{mark}] {:<8} {}", i + 1, record.kind, record.summary());
    }
    Ok(())
}

pub fn cmd_show(entry: &str) -> Result<()> {
    let store = open_store()?;
    let index = resolve(&store, entry)?;
    if let Some(record) = store.get(index) {
        print!("{}", record.body);
        if !record.body.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

pub fn cmd_add(body: String, function: bool) -> Result<()> {
    let mut store = open_store()?;
    let body = read_body(body)?;
    let record = if function {
        AliasRecord::function(body)
    } else {
        AliasRecord::alias(body.trim())
    };
    let index = store.push(record)?;
    store.save()?;
    eprintln!("Added entry #{} to {}", index + 1, store.path().display());
    Ok(())
}

pub fn cmd_remove(entry: &str) -> Result<()> {
    let mut store = open_store()?;
    let index = resolve(&store, entry)?;
    let removed = store.remove(index)?;
    store.save()?;
    eprintln!("Removed {} `{}`", removed.kind, removed.summary());
    Ok(())
}

pub fn cmd_set_active(entry: &str, active: bool) -> Result<()> {
    let mut store = open_store()?;
    let index = resolve(&store, entry)?;
    store.set_active(index, active)?;
    store.save()?;
    let verb = if active { "Enabled" } else { "Disabled" };
    eprintln!("{verb} entry #{}", index + 1);
    Ok(())
}

pub fn cmd_edit(entry: &str, body: String, kind: Option<Kind>) -> Result<()> {
    let mut store = open_store()?;
    let index = resolve(&store, entry)?;
    let body = read_body(body)?;
    match kind {
        Some(kind) => store.set_definition(index, kind, body)?,
        None => store.set_body(index, body)?,
    }
    store.save()?;
    eprintln!("Updated entry #{}", index + 1);
    Ok(())
}

pub fn cmd_path() -> Result<()> {
    let path = Config::load()?.dotfile_path()?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(not created yet; it is written on the first change)");
    }
    Ok(())
}

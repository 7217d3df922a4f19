//! Reading statement inputs: fragment dumps or already-reconstructed text.

use anyhow::{Context, Result};
use log::info;
use mutasi_ingest::{DocumentText, FragmentDump, SourceError, load_pages, reconstruct_document};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

pub const MAX_PASSPHRASE_ATTEMPTS: usize = 3;

fn is_fragment_dump(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Ask on the terminal. Returns `None` when stdin is not interactive or the
/// user enters nothing.
fn prompt_passphrase(path: &Path, err: &SourceError) -> Option<String> {
    if !io::stdin().is_terminal() {
        return None;
    }
    eprint!("{} ({}). Passphrase: ", path.display(), err);
    io::stderr().flush().ok();
    let mut s = String::new();
    io::stdin().lock().read_line(&mut s).ok()?;
    let s = s.trim_end_matches(['\r', '\n']).to_string();
    (!s.is_empty()).then_some(s)
}

/// Load one input as document text. `.json` files are fragment dumps and go
/// through line reconstruction; anything else is read as text verbatim.
pub fn load_document(path: &Path, password: Option<&str>) -> Result<DocumentText> {
    if !is_fragment_dump(path) {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        return Ok(DocumentText::from(text));
    }

    let mut source = FragmentDump::from_path(path).with_context(|| format!("load {}", path.display()))?;
    let pages = load_pages(
        &mut source,
        password.map(str::to_string),
        |err| prompt_passphrase(path, err),
        MAX_PASSPHRASE_ATTEMPTS,
    )
    .with_context(|| format!("decode {}", path.display()))?;

    info!("{}: {} pages", path.display(), pages.len());
    Ok(reconstruct_document(&pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_dump_inputs() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("statement.txt");
        fs::write(&txt, "line one\nline two\n").unwrap();
        assert_eq!(load_document(&txt, None).unwrap().as_str(), "line one\nline two\n");

        let json = dir.path().join("statement.JSON");
        fs::write(
            &json,
            r#"{"pages": [[{"text": "b", "x": 50, "y": 700}, {"text": "a", "x": 10, "y": 700}]]}"#,
        )
        .unwrap();
        assert_eq!(load_document(&json, None).unwrap().as_str(), "a b\n");
    }

    #[test]
    fn test_missing_input_has_context() {
        let err = load_document(Path::new("/nonexistent/mutasi.txt"), None).unwrap_err();
        assert!(format!("{err:#}").contains("read /nonexistent/mutasi.txt"));
    }
}

//! Contract with the PDF text extractor.
//!
//! Decoding PDFs happens outside this crate. A [`PageSource`] hands over
//! positioned fragments per page and reports an encrypted document as
//! [`SourceError::PasswordRequired`], distinct from any other decode failure,
//! so the caller can ask for a passphrase and try again.

use mutasi_core::PositionedFragment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub type Pages = Vec<Vec<PositionedFragment>>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document is encrypted; a passphrase is required")]
    PasswordRequired,

    #[error("incorrect passphrase")]
    IncorrectPassword,

    #[error("corrupt document: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid fragment dump: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    /// Whether supplying (another) passphrase could fix this.
    pub fn needs_passphrase(&self) -> bool {
        matches!(
            self,
            SourceError::PasswordRequired | SourceError::IncorrectPassword
        )
    }
}

pub trait PageSource {
    /// Decode every page. Each call starts from scratch.
    fn pages(&mut self, passphrase: Option<&str>) -> Result<Pages, SourceError>;
}

/// Decode pages, asking `prompt` for a passphrase whenever the source
/// reports one is needed. `prompt` returning `None` gives up with the
/// source's error. At most `max_attempts` passphrases are tried.
pub fn load_pages<S, F>(
    source: &mut S,
    passphrase: Option<String>,
    mut prompt: F,
    max_attempts: usize,
) -> Result<Pages, SourceError>
where
    S: PageSource + ?Sized,
    F: FnMut(&SourceError) -> Option<String>,
{
    let mut passphrase = passphrase;
    let mut attempts = 0;

    loop {
        match source.pages(passphrase.as_deref()) {
            Ok(pages) => return Ok(pages),
            Err(err) if err.needs_passphrase() && attempts < max_attempts => {
                attempts += 1;
                match prompt(&err) {
                    Some(p) => passphrase = Some(p),
                    None => return Err(err),
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// Fragments already extracted by a renderer and saved as JSON:
/// `{"pages": [[{"text": "...", "x": 40, "y": 700}, ...], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentDump {
    pub pages: Pages,
}

impl FragmentDump {
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}

impl PageSource for FragmentDump {
    fn pages(&mut self, _passphrase: Option<&str>) -> Result<Pages, SourceError> {
        Ok(self.pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Behaves like an encrypted PDF unlocked by one passphrase.
    struct Locked {
        secret: &'static str,
        calls: usize,
    }

    impl PageSource for Locked {
        fn pages(&mut self, passphrase: Option<&str>) -> Result<Pages, SourceError> {
            self.calls += 1;
            match passphrase {
                None => Err(SourceError::PasswordRequired),
                Some(p) if p == self.secret => {
                    Ok(vec![vec![PositionedFragment::new("unlocked", 0, 700)]])
                }
                Some(_) => Err(SourceError::IncorrectPassword),
            }
        }
    }

    #[test]
    fn test_prompts_until_unlocked() {
        let mut src = Locked { secret: "rahasia", calls: 0 };
        let mut answers = vec!["salah".to_string(), "rahasia".to_string()].into_iter();
        let mut seen = Vec::new();

        let pages = load_pages(
            &mut src,
            None,
            |err| {
                seen.push(err.to_string());
                answers.next()
            },
            3,
        )
        .unwrap();

        assert_eq!(pages[0][0].text, "unlocked");
        assert_eq!(src.calls, 3);
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("passphrase is required"));
        assert!(seen[1].contains("incorrect"));
    }

    #[test]
    fn test_given_passphrase_skips_prompt() {
        let mut src = Locked { secret: "rahasia", calls: 0 };
        let pages = load_pages(&mut src, Some("rahasia".into()), |_| None, 3).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(src.calls, 1);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut src = Locked { secret: "rahasia", calls: 0 };
        let err = load_pages(&mut src, None, |_| Some("salah".into()), 2).unwrap_err();
        assert!(matches!(err, SourceError::IncorrectPassword));
        assert!(err.needs_passphrase());
        assert_eq!(src.calls, 3);
    }

    #[test]
    fn test_cancelled_prompt_returns_source_error() {
        let mut src = Locked { secret: "rahasia", calls: 0 };
        let err = load_pages(&mut src, None, |_| None, 3).unwrap_err();
        assert!(matches!(err, SourceError::PasswordRequired));
    }

    #[test]
    fn test_other_errors_not_retried() {
        struct Broken;
        impl PageSource for Broken {
            fn pages(&mut self, _: Option<&str>) -> Result<Pages, SourceError> {
                Err(SourceError::Corrupt("xref table missing".into()))
            }
        }
        let mut prompted = false;
        let err = load_pages(
            &mut Broken,
            None,
            |_| {
                prompted = true;
                None
            },
            3,
        )
        .unwrap_err();
        assert!(!err.needs_passphrase());
        assert!(!prompted);
    }

    #[test]
    fn test_fragment_dump_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pages": [[{{"text": "Saldo", "x": 10, "y": 700}}], []]}}"#
        )
        .unwrap();

        let mut dump = FragmentDump::from_path(file.path()).unwrap();
        let pages = dump.pages(None).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0][0], PositionedFragment::new("Saldo", 10, 700));
        assert!(pages[1].is_empty());
    }

    #[test]
    fn test_fragment_dump_rejects_bad_json() {
        let err = FragmentDump::from_json("{\"pages\": 3}").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }
}

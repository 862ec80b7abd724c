// Licensed under the Apache-2.0 license

//! Output mode selection.

use crate::error::{PingenError, PingenResult};
use log::warn;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// How many times [`Mode::prompt`] asks before giving up.
pub const MODE_PROMPT_ATTEMPTS: usize = 3;

const KCONFIG_SPELLINGS: &[&str] = &["k", "K", "kconfig", "Kconfig"];
const HEADER_SPELLINGS: &[&str] = &["c", "C"];

/// Which artifact to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Kconfig `choice` blocks for TX and RX pin selection.
    Kconfig,
    /// C preprocessor chains defining `TX_PIN`/`RX_PIN`.
    Header,
}

impl FromStr for Mode {
    type Err = PingenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if KCONFIG_SPELLINGS.contains(&s) {
            Ok(Mode::Kconfig)
        } else if HEADER_SPELLINGS.contains(&s) {
            Ok(Mode::Header)
        } else {
            Err(PingenError::InvalidMode(s.to_string()))
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Kconfig => write!(f, "Kconfig"),
            Mode::Header => write!(f, "C"),
        }
    }
}

impl Mode {
    /// Ask for a mode on `output` and read answers from `input`.
    ///
    /// Gives up after `attempts` invalid answers, or as soon as `input` is
    /// exhausted, returning the last [`PingenError::InvalidMode`].
    pub fn prompt<R: BufRead, W: Write>(
        mut input: R,
        mut output: W,
        attempts: usize,
    ) -> PingenResult<Self> {
        let mut last = String::new();
        for _ in 0..attempts {
            write!(output, "Kconfig or C: ")?;
            output.flush()?;

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                break;
            }
            match answer.parse::<Mode>() {
                Ok(mode) => return Ok(mode),
                Err(_) => {
                    warn!("unrecognized mode `{}`", answer.trim());
                    last = answer.trim().to_string();
                }
            }
        }
        Err(PingenError::InvalidMode(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_spellings() {
        for s in ["k", "K", "kconfig", "Kconfig", " kconfig\n"] {
            assert_eq!(s.parse::<Mode>().unwrap(), Mode::Kconfig, "{s:?}");
        }
        for s in ["c", "C"] {
            assert_eq!(s.parse::<Mode>().unwrap(), Mode::Header, "{s:?}");
        }
    }

    #[test]
    fn test_rejected_spellings() {
        for s in ["xml", "KCONFIG", "header", ""] {
            let err = s.parse::<Mode>().unwrap_err();
            assert!(matches!(err, PingenError::InvalidMode(_)), "{s:?}");
        }
    }

    #[test]
    fn test_prompt_retries() {
        let mut out = Vec::new();
        let mode = Mode::prompt("xml\nC\n".as_bytes(), &mut out, MODE_PROMPT_ATTEMPTS).unwrap();
        assert_eq!(mode, Mode::Header);
        assert_eq!(String::from_utf8(out).unwrap(), "Kconfig or C: Kconfig or C: ");
    }

    #[test]
    fn test_prompt_gives_up() {
        let err = Mode::prompt("a\nb\nc\n".as_bytes(), Vec::new(), 2).unwrap_err();
        match err {
            PingenError::InvalidMode(last) => assert_eq!(last, "b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_prompt_eof() {
        let err = Mode::prompt("".as_bytes(), Vec::new(), MODE_PROMPT_ATTEMPTS).unwrap_err();
        assert!(matches!(err, PingenError::InvalidMode(_)));
    }
}

use std::collections::BTreeSet;
use std::io::{self, Write};
use serde_json::json;
use crate::config::Config;
use crate::lexer::Lexer;
use crate::token::{Kind, LexItem};

/// Everything the driver prints about one scanning session.
#[derive(Debug, Default)]
pub struct Report {
    pub lines: usize,
    pub tokens: usize,
    pub items: Vec<LexItem>,
    pub identifiers: BTreeSet<String>,
    pub iconsts: BTreeSet<String>,
    pub rconsts: BTreeSet<String>,
    pub sconsts: BTreeSet<String>,
    pub error: Option<LexItem>,
}

impl Report {
    /// Drains `lexer` up to its first `Err` or `Done` item.
    pub fn collect(lexer: &mut Lexer) -> Self {
        let mut report = Report::default();
        for item in lexer.by_ref() {
            match item.kind {
                Kind::Done => break,
                Kind::Err => {
                    report.error = Some(item);
                    break;
                }
                Kind::Ident => {
                    report.identifiers.insert(item.lexeme.clone());
                }
                Kind::Iconst => {
                    report.iconsts.insert(item.lexeme.clone());
                }
                Kind::Rconst => {
                    report.rconsts.insert(item.lexeme.clone());
                }
                Kind::Sconst => {
                    report.sconsts.insert(item.lexeme.clone());
                }
                _ => {}
            }
            report.tokens += 1;
            report.items.push(item);
        }
        report.lines = lexer.line();
        report
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn write_tokens<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }

    /// Summary block; only printed for a session that finished cleanly.
    pub fn write_summary<W: Write>(&self, out: &mut W, config: &Config) -> io::Result<()> {
        writeln!(out, "Lines: {}", self.lines)?;
        if self.lines == 0 {
            return Ok(());
        }
        writeln!(out, "Tokens: {}", self.tokens)?;

        let listings = [
            (config.sconsts, "STRINGS", &self.sconsts),
            (config.iconsts, "INTEGERS", &self.iconsts),
            (config.rconsts, "REALS", &self.rconsts),
            (config.ids, "IDENTIFIERS", &self.identifiers),
        ];
        for (enabled, title, values) in listings {
            if enabled && !values.is_empty() {
                writeln!(out, "{}:", title)?;
                let joined: Vec<&str> = values.iter().map(String::as_str).collect();
                writeln!(out, "{}", joined.join(", "))?;
            }
        }
        Ok(())
    }

    pub fn to_json(&self, config: &Config) -> serde_json::Value {
        let mut value = json!({
            "lines": self.lines,
            "tokens": self.tokens,
        });
        if config.verbose {
            value["items"] = json!(self.items);
        }
        if config.ids {
            value["identifiers"] = json!(self.identifiers);
        }
        if config.iconsts {
            value["iconsts"] = json!(self.iconsts);
        }
        if config.rconsts {
            value["rconsts"] = json!(self.rconsts);
        }
        if config.sconsts {
            value["sconsts"] = json!(self.sconsts);
        }
        if let Some(error) = &self.error {
            value["error"] = json!(error);
        }
        value
    }
}

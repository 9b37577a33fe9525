//! Pattern templates.
//!
//! Locale records carry their number patterns as template strings with
//! placeholder tokens (`{sign}`, `{number}`, `{symbol}`, `{code}`, or the
//! bare `0` slot of compact patterns). Templates are parsed once at locale
//! load and expanded per format call without rescanning the string.

mod parse;

use parse::RawPiece;
use winnow::Parser;

/// One element of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    /// The formatted number string
    Number,
    /// The resolved sign glyph
    Sign,
    /// Percent or currency display text
    Symbol,
    /// ISO 4217 currency code
    Code,
    /// Verbatim text between placeholders
    Literal(String),
}

/// Replacement values for [`Template::expand`]. Slots a template does not
/// mention are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Substitutions<'a> {
    pub number: &'a str,
    pub sign: &'a str,
    pub symbol: &'a str,
    pub code: &'a str,
}

impl Default for Substitutions<'_> {
    fn default() -> Self {
        Substitutions {
            number: "",
            sign: "",
            symbol: "",
            code: "",
        }
    }
}

/// A parsed pattern template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parses a placeholder template. Unknown brace sequences fall through
    /// as literal text; parsing never fails.
    pub fn parse(pattern: &str) -> Template {
        match parse::parse_template.parse(pattern) {
            Ok(raw) => Template {
                pieces: coalesce(raw),
            },
            Err(_) => Template::literal(pattern),
        }
    }

    /// Parses a compact pattern, where a bare `0` is the numeric slot.
    pub fn parse_compact(pattern: &str) -> Template {
        match parse::parse_compact_template.parse(pattern) {
            Ok(raw) => Template {
                pieces: coalesce(raw),
            },
            Err(_) => Template::literal(pattern),
        }
    }

    fn literal(text: &str) -> Template {
        Template {
            pieces: vec![Piece::Literal(text.to_string())],
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Renders the template with the given replacement values.
    pub fn expand(&self, subs: &Substitutions<'_>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Number => out.push_str(subs.number),
                Piece::Sign => out.push_str(subs.sign),
                Piece::Symbol => out.push_str(subs.symbol),
                Piece::Code => out.push_str(subs.code),
                Piece::Literal(text) => out.push_str(text),
            }
        }
        out
    }
}

fn coalesce(raw: Vec<RawPiece>) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut run = String::new();
    for item in raw {
        match item {
            RawPiece::Char(c) => run.push(c),
            other => {
                if !run.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut run)));
                }
                pieces.push(match other {
                    RawPiece::Number => Piece::Number,
                    RawPiece::Sign => Piece::Sign,
                    RawPiece::Symbol => Piece::Symbol,
                    RawPiece::Code => Piece::Code,
                    RawPiece::Char(_) => unreachable!(),
                });
            }
        }
    }
    if !run.is_empty() {
        pieces.push(Piece::Literal(run));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sign_template() {
        let template = Template::parse("{sign}{number}");
        assert_eq!(template.pieces(), &[Piece::Sign, Piece::Number]);
    }

    #[test]
    fn parse_currency_template() {
        let template = Template::parse("{number} {symbol}");
        assert_eq!(
            template.pieces(),
            &[
                Piece::Number,
                Piece::Literal(" ".to_string()),
                Piece::Symbol,
            ]
        );
    }

    #[test]
    fn unknown_placeholder_stays_literal() {
        let template = Template::parse("{nope}{number}");
        assert_eq!(
            template.pieces(),
            &[Piece::Literal("{nope}".to_string()), Piece::Number]
        );
    }

    #[test]
    fn parse_compact_slot() {
        let template = Template::parse_compact("0 тыс.");
        assert_eq!(
            template.pieces(),
            &[Piece::Number, Piece::Literal(" тыс.".to_string())]
        );
    }

    #[test]
    fn expand_fills_slots() {
        let template = Template::parse("{symbol}{number}");
        let out = template.expand(&Substitutions {
            number: "1,234.56",
            symbol: "$",
            ..Default::default()
        });
        assert_eq!(out, "$1,234.56");
    }

    #[test]
    fn expand_ignores_missing_slots() {
        let template = Template::parse("{sign}{number}");
        let out = template.expand(&Substitutions {
            number: "42",
            ..Default::default()
        });
        assert_eq!(out, "42");
    }
}

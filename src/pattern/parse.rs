use winnow::combinator::{alt, repeat};
use winnow::token::{any, literal};
use winnow::{ModalResult, Parser};

/// Raw parse output; consecutive `Char` pieces are coalesced by the caller.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum RawPiece {
    Number,
    Sign,
    Symbol,
    Code,
    Char(char),
}

pub(super) fn parse_number_slot(input: &mut &str) -> ModalResult<RawPiece> {
    literal("{number}")
        .value(RawPiece::Number)
        .parse_next(input)
}

pub(super) fn parse_sign_slot(input: &mut &str) -> ModalResult<RawPiece> {
    literal("{sign}").value(RawPiece::Sign).parse_next(input)
}

pub(super) fn parse_symbol_slot(input: &mut &str) -> ModalResult<RawPiece> {
    literal("{symbol}")
        .value(RawPiece::Symbol)
        .parse_next(input)
}

pub(super) fn parse_code_slot(input: &mut &str) -> ModalResult<RawPiece> {
    literal("{code}").value(RawPiece::Code).parse_next(input)
}

/// Any character not consumed by a placeholder passes through verbatim.
pub(super) fn parse_literal_char(input: &mut &str) -> ModalResult<RawPiece> {
    any.map(RawPiece::Char).parse_next(input)
}

/// The numeric slot of compact patterns is a bare `0`.
pub(super) fn parse_compact_slot(input: &mut &str) -> ModalResult<RawPiece> {
    literal("0").value(RawPiece::Number).parse_next(input)
}

pub(super) fn parse_template(input: &mut &str) -> ModalResult<Vec<RawPiece>> {
    repeat(
        0..,
        alt((
            parse_number_slot,
            parse_sign_slot,
            parse_symbol_slot,
            parse_code_slot,
            parse_literal_char,
        )),
    )
    .parse_next(input)
}

pub(super) fn parse_compact_template(input: &mut &str) -> ModalResult<Vec<RawPiece>> {
    repeat(0.., alt((parse_compact_slot, parse_literal_char))).parse_next(input)
}

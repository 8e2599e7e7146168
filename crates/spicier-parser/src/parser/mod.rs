//! Netlist grammar (§6.1): dot commands and the twelve element kinds.

mod waveforms;

use spicier_core::units::parse_value;
use spicier_core::{Element, ElementExtra, ElementKind, Netlist};

use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token};
use crate::types::{AnalysisCommand, ParseResult};

/// A cursor over one line's tokens.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.pos).cloned().unwrap_or(Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let t = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn expect_word(&mut self, line: usize, what: &str) -> Result<String> {
        match self.advance() {
            Token::Word(w) => Ok(w),
            _ => Err(Error::ParseError {
                line,
                message: format!("expected {what}"),
            }),
        }
    }

    /// Consumes a `Word` token if, and only if, it parses as a numeric
    /// literal (§6.2); otherwise leaves the cursor untouched.
    fn try_expect_value(&mut self) -> Option<f64> {
        if let Token::Word(w) = self.peek() {
            if let Ok(v) = parse_value(&w, 0) {
                self.advance();
                return Some(v);
            }
        }
        None
    }

    fn expect_value(&mut self, line: usize) -> Result<f64> {
        self.try_expect_value().ok_or_else(|| Error::ParseError {
            line,
            message: "expected a numeric value".to_string(),
        })
    }

    fn at_eof(&self) -> bool {
        matches!(self.peek(), Token::Eof)
    }
}

/// Parses an entire netlist file (including the ignored title line).
pub fn parse(text: &str) -> Result<ParseResult> {
    let mut netlist = Netlist::new();
    let mut analysis = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line_no == 1 {
            continue; // title line, always ignored
        }
        let tokens = tokenize(raw_line);
        if tokens.is_empty() {
            continue;
        }

        let first_word = match &tokens[0] {
            Token::Word(w) => w.clone(),
            _ => {
                return Err(Error::ParseError {
                    line: line_no,
                    message: "line does not start with a label or command".to_string(),
                })
            }
        };

        if let Some(stripped) = first_word.strip_prefix('.') {
            let mut p = Parser::new(&tokens[1..]);
            match stripped.to_ascii_lowercase().as_str() {
                "op" => analysis = Some(AnalysisCommand::Op),
                "tran" => {
                    let tstep = p.expect_value(line_no)?;
                    let tstop = p.expect_value(line_no)?;
                    analysis = Some(AnalysisCommand::Tran { tstep, tstop });
                }
                other => {
                    return Err(Error::ParseError {
                        line: line_no,
                        message: format!("unrecognized command '.{other}'"),
                    })
                }
            }
            continue;
        }

        let element = parse_element_line(&first_word, &tokens, line_no, &mut netlist)?;
        netlist.push(element);
    }

    netlist.finalize()?;
    Ok(ParseResult { netlist, analysis })
}

fn parse_element_line(
    label: &str,
    tokens: &[Token],
    line: usize,
    netlist: &mut Netlist,
) -> Result<Element> {
    let kind = match label
        .chars()
        .next()
        .ok_or_else(|| Error::ParseError {
            line,
            message: "empty element label".to_string(),
        })?
        .to_ascii_lowercase()
    {
        'r' => ElementKind::Resistor,
        'c' => ElementKind::Capacitor,
        'l' => ElementKind::Inductor,
        'v' => ElementKind::IndependentVoltage,
        'i' => ElementKind::IndependentCurrent,
        'e' => ElementKind::Vcvs,
        'g' => ElementKind::Vccs,
        'f' => ElementKind::Cccs,
        'h' => ElementKind::Ccvs,
        'd' => ElementKind::Diode,
        'q' => ElementKind::Bjt,
        'm' => ElementKind::Mosfet,
        other => {
            return Err(Error::ParseError {
                line,
                message: format!("unrecognized element prefix '{other}'"),
            })
        }
    };

    let mut p = Parser::new(&tokens[1..]);

    let node_count = match kind {
        ElementKind::Vcvs | ElementKind::Vccs => 4,
        ElementKind::Cccs | ElementKind::Ccvs => 2,
        ElementKind::Bjt | ElementKind::Mosfet => 3,
        ElementKind::Diode => 2,
        _ => 2,
    };
    let mut nodes = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let name = p.expect_word(line, "a node name")?;
        nodes.push(netlist.nodes.resolve(&name));
    }

    let (value, extra) = match kind {
        ElementKind::IndependentVoltage | ElementKind::IndependentCurrent => {
            parse_source_field(&mut p, line)?
        }
        ElementKind::Resistor | ElementKind::Inductor | ElementKind::Capacitor => {
            let value = p.expect_value(line)?;
            let extra = match parse_initial_condition(&mut p, line)? {
                Some(ic) => ElementExtra::InitialCondition(ic),
                None => ElementExtra::None,
            };
            (value, extra)
        }
        ElementKind::Vcvs | ElementKind::Vccs => {
            let value = p.expect_value(line)?;
            (value, ElementExtra::None)
        }
        ElementKind::Cccs | ElementKind::Ccvs => {
            let controller = p.expect_word(line, "a controller label")?;
            let value = p.expect_value(line)?;
            (value, ElementExtra::Controller(controller))
        }
        ElementKind::Diode | ElementKind::Bjt | ElementKind::Mosfet => {
            let model = p.expect_word(line, "a model name")?;
            (0.0, ElementExtra::Model(model))
        }
    };

    if !p.at_eof() {
        return Err(Error::ParseError {
            line,
            message: "unexpected trailing tokens".to_string(),
        });
    }

    Ok(Element::new(kind, label.to_string(), nodes, value, extra, line))
}

fn parse_initial_condition(p: &mut Parser<'_>, line: usize) -> Result<Option<f64>> {
    if let Token::Word(w) = p.peek() {
        if let Some(rest) = w.to_ascii_lowercase().strip_prefix("ic=") {
            let ic = parse_value(rest, line)?;
            p.advance();
            return Ok(Some(ic));
        }
    }
    Ok(None)
}

fn parse_source_field(p: &mut Parser<'_>, line: usize) -> Result<(f64, ElementExtra)> {
    if let Token::Word(w) = p.peek() {
        match w.to_ascii_lowercase().as_str() {
            "sin" => {
                p.advance();
                return Ok((0.0, p.parse_sin_waveform(line)?));
            }
            "pwl" => {
                p.advance();
                return Ok((0.0, p.parse_pwl_waveform(line)?));
            }
            _ => {}
        }
    }
    let value = p.expect_value(line)?;
    Ok((value, ElementExtra::Constant))
}

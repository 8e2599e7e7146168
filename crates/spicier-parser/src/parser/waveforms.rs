//! Source-waveform descriptor parsing: `sin(...)` and `pwl(...)` (§6.1).
//! PULSE is not part of this grammar.

use spicier_core::{ElementExtra, PwlPoint, SinParams};

use crate::error::{Error, Result};
use crate::lexer::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parses `sin( v0 va freq [td] )`.
    pub(crate) fn parse_sin_waveform(&mut self, line: usize) -> Result<ElementExtra> {
        self.expect_lparen(line, "sin")?;

        let v0 = self.expect_value(line)?;
        let va = self.expect_value(line)?;
        let freq = self.expect_value(line)?;
        let td = self.try_expect_value().unwrap_or(0.0);

        self.expect_rparen(line, "sin")?;
        Ok(ElementExtra::Sinusoidal(SinParams { v0, va, freq, td }))
    }

    /// Parses `pwl( t1 x1 t2 x2 ... )`.
    pub(crate) fn parse_pwl_waveform(&mut self, line: usize) -> Result<ElementExtra> {
        self.expect_lparen(line, "pwl")?;

        let mut points = Vec::new();
        while let Some(t) = self.try_expect_value() {
            let x = self.expect_value(line)?;
            points.push(PwlPoint { t, x });
        }

        if points.is_empty() {
            return Err(Error::ParseError {
                line,
                message: "pwl requires at least one time-value pair".to_string(),
            });
        }

        self.expect_rparen(line, "pwl")?;
        Ok(ElementExtra::Pwl(points))
    }

    fn expect_lparen(&mut self, line: usize, keyword: &str) -> Result<()> {
        if !matches!(self.peek(), Token::LParen) {
            return Err(Error::ParseError {
                line,
                message: format!("expected '(' after {keyword}"),
            });
        }
        self.advance();
        Ok(())
    }

    fn expect_rparen(&mut self, line: usize, keyword: &str) -> Result<()> {
        if !matches!(self.peek(), Token::RParen) {
            return Err(Error::ParseError {
                line,
                message: format!("expected ')' closing {keyword}"),
            });
        }
        self.advance();
        Ok(())
    }
}

// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text front end for the algebra.
//!
//! Grammar, loosest-binding first: `+` (disjunction), `*` (conjunction),
//! `^` (exclusive-or), then prefix `~` and postfix `'` negation. Atoms are
//! parenthesized expressions, the constants `0` and `1`, and single-letter
//! literal names. Names are interned into the caller's [`VarTable`] on first
//! use, so positions follow the order of first appearance.

use crate::{cube::Cube, errors::Error, sop::Sop, vars::VarTable};
use std::iter::Peekable;
use std::str::CharIndices;

/// Parses `input` into an SOP, interning literal names into `vars`.
pub fn parse<const N: usize>(input: &str, vars: &mut VarTable<N>) -> Result<Sop<N>, Error> {
    let mut parser = Parser {
        chars: input.char_indices().peekable(),
        vars,
    };
    let sop = parser.expr()?;
    match parser.next_significant() {
        Some((position, found)) => Err(Error::UnexpectedCharacter { found, position }),
        None => Ok(sop),
    }
}

struct Parser<'a, const N: usize> {
    chars: Peekable<CharIndices<'a>>,
    vars: &'a mut VarTable<N>,
}

impl<'a, const N: usize> Parser<'a, N> {
    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn next_significant(&mut self) -> Option<(usize, char)> {
        self.skip_whitespace();
        self.chars.next()
    }

    /// Consumes `wanted` if it is the next significant character.
    fn eat(&mut self, wanted: char) -> bool {
        self.skip_whitespace();
        if matches!(self.chars.peek(), Some(&(_, c)) if c == wanted) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<Sop<N>, Error> {
        let mut sum = self.term()?;
        while self.eat('+') {
            sum = &sum | &self.term()?;
        }
        Ok(sum)
    }

    fn term(&mut self) -> Result<Sop<N>, Error> {
        let mut product = self.factor()?;
        while self.eat('*') {
            product = &product & &self.factor()?;
        }
        Ok(product)
    }

    fn factor(&mut self) -> Result<Sop<N>, Error> {
        let mut lhs = self.unary()?;
        while self.eat('^') {
            let rhs = self.unary()?;
            lhs = &(&lhs & &!&rhs) | &(&!&lhs & &rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Sop<N>, Error> {
        if self.eat('~') {
            return Ok(!&self.unary()?);
        }
        let mut value = self.atom()?;
        while self.eat('\'') {
            value = !&value;
        }
        Ok(value)
    }

    fn atom(&mut self) -> Result<Sop<N>, Error> {
        match self.next_significant() {
            Some((_, '(')) => {
                let inner = self.expr()?;
                match self.next_significant() {
                    Some((_, ')')) => Ok(inner),
                    Some((position, found)) => {
                        Err(Error::UnexpectedCharacter { found, position })
                    }
                    None => Err(Error::UnexpectedEnd),
                }
            }
            Some((_, '0')) => Ok(Sop::zero()),
            Some((_, '1')) => Ok(Sop::one()),
            Some((_, c)) if c.is_ascii_alphabetic() => {
                let index = self.vars.intern(&c.to_string())?;
                Ok(Sop::from(Cube::positive_half_space(index)))
            }
            Some((position, found)) => Err(Error::UnexpectedCharacter { found, position }),
            None => Err(Error::UnexpectedEnd),
        }
    }
}

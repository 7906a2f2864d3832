//! Recursive-descent parser producing a resolved [`Expr`].
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary)*
//! unary   := ("-" | "+") unary | power
//! power   := primary ("^" unary)?
//! primary := NUMBER | IDENT | IDENT "(" expr ("," expr)* ")" | "(" expr ")"
//! ```
//!
//! Nesting is capped at [`MAX_DEPTH`]. Parentheses, calls, signs, and each
//! operator in a chain count as one level, which also bounds the depth of the
//! resulting tree.

use crate::{
    ast::{BinaryOp, Expr},
    builtin::{Builtin, Constant},
    error::{ParseError, ParseErrorKind},
    token::{Spanned, Token, tokenize},
};

/// Deepest nesting the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Parses `text` as a function of `variable`.
pub(crate) fn parse(text: &str, variable: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        text,
        variable,
        tokens,
        cursor: 0,
        depth: 0,
    };

    if parser.peek() == &Token::End {
        return Err(parser.error(ParseErrorKind::Empty));
    }

    let expr = parser.expr()?;
    match parser.peek() {
        Token::End => Ok(expr),
        _ => Err(parser.unexpected()),
    }
}

struct Parser<'a> {
    text: &'a str,
    variable: &'a str,
    tokens: Vec<Spanned>,
    cursor: usize,
    depth: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.descend()?;
            self.advance();
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = outer;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                _ => break,
            };
            self.descend()?;
            self.advance();
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = outer;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Token::Minus => {
                let inner = self.nested(|parser| {
                    parser.advance();
                    parser.unary()
                })?;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Token::Plus => self.nested(|parser| {
                parser.advance();
                parser.unary()
            }),
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.peek() == &Token::Caret {
            self.advance();
            // Recursing through `unary` makes `^` right-associative and
            // allows a signed exponent such as `2^-1`.
            let exponent = self.nested(Self::unary)?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().clone() {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(value))
            }
            Token::Ident(name) => {
                let position = self.position();
                self.advance();
                if self.peek() == &Token::LParen {
                    self.call(&name, position)
                } else {
                    self.symbol(&name, position)
                }
            }
            Token::LParen => self.nested(|parser| {
                parser.advance();
                let inner = parser.expr()?;
                parser.expect(&Token::RParen)?;
                Ok(inner)
            }),
            _ => Err(self.unexpected()),
        }
    }

    fn call(&mut self, name: &str, position: usize) -> Result<Expr, ParseError> {
        let func = Builtin::lookup(name).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownFunction(name.to_owned()),
                position,
                self.text,
            )
        })?;

        self.expect(&Token::LParen)?;
        let args = self.nested(|parser| {
            let mut args = vec![parser.expr()?];
            while parser.peek() == &Token::Comma {
                parser.advance();
                args.push(parser.expr()?);
            }
            Ok(args)
        })?;
        self.expect(&Token::RParen)?;

        func.check_arity(args.len()).map_err(|expected| {
            ParseError::new(
                ParseErrorKind::Arity {
                    name: func.name(),
                    expected,
                    found: args.len(),
                },
                position,
                self.text,
            )
        })?;

        Ok(Expr::Call { func, args })
    }

    fn symbol(&self, name: &str, position: usize) -> Result<Expr, ParseError> {
        if name == self.variable {
            return Ok(Expr::Variable);
        }
        Constant::lookup(name).map(Expr::Constant).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownSymbol(name.to_owned()),
                position,
                self.text,
            )
        })
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.descend()?;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(ParseErrorKind::TooDeep(MAX_DEPTH)));
        }
        self.depth += 1;
        Ok(())
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.cursor].token
    }

    fn position(&self) -> usize {
        self.tokens[self.cursor].position
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
    }

    fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.peek() == token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Token::End => self.error(ParseErrorKind::UnexpectedEnd),
            token => self.error(ParseErrorKind::UnexpectedToken(token.describe())),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position(), self.text)
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

//! Expression precedence chain.
//!
//! From loosest to tightest:
//!
//! | level          | operators              | associativity |
//! |----------------|------------------------|---------------|
//! | conditional    | `a ? b : c`            | right         |
//! | logical or     | `\|\|`                 | left          |
//! | logical and    | `&&`                   | left          |
//! | equality       | `==` `!=`              | left          |
//! | relational     | `<` `>` `<=` `>=`      | left          |
//! | additive       | `+` `-`                | left          |
//! | multiplicative | `*` `/` `%`            | left          |
//! | unary          | `!` `+` `-` (prefix)   | right         |
//!
//! Whitespace is allowed between operands and operators. Postfix forms
//! (`id[...]`, `id[.key]`, `id(...)`) must follow the identifier directly.
//! Variables (`$name`), globals (`@name`) and `~` take no postfix.

use rowan::TextRange;

use crate::ast::{BinaryOperator, Expression, Identifier, LogicalOperator, UnaryOperator};
use crate::diagnostics::ErrorKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::cursor::Lead;

const EQUALITY: &[(&str, BinaryOperator)] =
    &[("==", BinaryOperator::Eq), ("!=", BinaryOperator::NotEq)];

// Two-character tokens first.
const RELATIONAL: &[(&str, BinaryOperator)] = &[
    ("<=", BinaryOperator::LtEq),
    (">=", BinaryOperator::GtEq),
    ("<", BinaryOperator::Lt),
    (">", BinaryOperator::Gt),
];

const ADDITIVE: &[(&str, BinaryOperator)] =
    &[("+", BinaryOperator::Add), ("-", BinaryOperator::Sub)];

const MULTIPLICATIVE: &[(&str, BinaryOperator)] = &[
    ("*", BinaryOperator::Mul),
    ("/", BinaryOperator::Div),
    ("%", BinaryOperator::Rem),
];

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) -> PResult<Expression> {
        self.enter_recursion()?;
        let expr = self.parse_conditional();
        self.exit_recursion();
        expr
    }

    /// `test ? consequent : alternate`
    fn parse_conditional(&mut self) -> PResult<Expression> {
        let test = self.parse_logical_or()?;

        self.cursor.skip_whitespace();
        if !self.eat('?') {
            return Ok(test);
        }

        self.cursor.skip_whitespace();
        let consequent = self.parse_expression()?;
        self.cursor.skip_whitespace();
        self.expect(':', ErrorKind::MalformedExpression)?;
        self.cursor.skip_whitespace();
        let alternate = self.parse_expression()?;

        let range = TextRange::new(test.range().start(), alternate.range().end());
        Ok(Expression::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            range,
        })
    }

    fn parse_logical_or(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(
            &[("||", LogicalOperator::Or)],
            Self::parse_logical_and,
            logical,
        )
    }

    fn parse_logical_and(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(&[("&&", LogicalOperator::And)], Self::parse_equality, logical)
    }

    fn parse_equality(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(EQUALITY, Self::parse_relational, binary)
    }

    fn parse_relational(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(RELATIONAL, Self::parse_additive, binary)
    }

    fn parse_additive(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(ADDITIVE, Self::parse_multiplicative, binary)
    }

    fn parse_multiplicative(&mut self) -> PResult<Expression> {
        self.parse_left_assoc(MULTIPLICATIVE, Self::parse_unary, binary)
    }

    /// `operand { op operand }`, folded to the left.
    fn parse_left_assoc<Op: Copy>(
        &mut self,
        ops: &[(&str, Op)],
        operand: fn(&mut Self) -> PResult<Expression>,
        build: fn(Op, Expression, Expression) -> Expression,
    ) -> PResult<Expression> {
        let mut left = operand(self)?;

        loop {
            self.cursor.skip_whitespace();
            let Some(&(token, op)) = ops.iter().find(|(token, _)| self.cursor.starts_with(token))
            else {
                break;
            };
            self.cursor.advance(token.len());
            self.cursor.skip_whitespace();
            let right = operand(self)?;
            left = build(op, left, right);
        }

        Ok(left)
    }

    /// `! arg` | `+ arg` | `- arg` | primary
    fn parse_unary(&mut self) -> PResult<Expression> {
        let start = self.cursor.offset();
        let op = match self.cursor.peek() {
            Some('!') => UnaryOperator::Not,
            Some('+') => UnaryOperator::Plus,
            Some('-') => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };
        self.cursor.bump();
        self.cursor.skip_whitespace();

        self.enter_recursion()?;
        let arg = self.parse_unary();
        self.exit_recursion();
        let arg = arg?;

        Ok(Expression::Unary {
            op,
            range: TextRange::new(start, arg.range().end()),
            arg: Box::new(arg),
        })
    }

    fn parse_primary(&mut self) -> PResult<Expression> {
        match self.lead() {
            Lead::ParenOpen => self.parse_parenthesis(),
            Lead::Digit => self.parse_integer(),
            Lead::Quote(_) | Lead::BracketOpen | Lead::BraceOpen => {
                self.parse_value().map(Expression::Value)
            }
            Lead::Word => {
                let id = self.match_identifier()?;
                self.parse_identifier_postfix(id)
            }
            Lead::Other('$') => {
                self.parse_reference(|id, range| Expression::Variable { id, range })
            }
            Lead::Other('@') => {
                self.parse_reference(|id, range| Expression::Global { id, range })
            }
            Lead::Other('~') => {
                let start = self.cursor.offset();
                self.cursor.bump();
                Ok(Expression::This {
                    range: self.range_from(start),
                })
            }
            Lead::Other(_) | Lead::Eof => Err(self.unexpected(ErrorKind::MalformedExpression)),
        }
    }

    /// `$name` | `@name`
    fn parse_reference(
        &mut self,
        build: fn(Identifier, TextRange) -> Expression,
    ) -> PResult<Expression> {
        let start = self.cursor.offset();
        self.cursor.bump();
        let id = self.match_identifier()?;
        Ok(build(id, self.range_from(start)))
    }

    /// `( expression )`
    fn parse_parenthesis(&mut self) -> PResult<Expression> {
        let start = self.cursor.offset();
        self.cursor.bump();
        self.cursor.skip_whitespace();
        let inner = self.parse_expression()?;
        self.cursor.skip_whitespace();
        self.expect(')', ErrorKind::MalformedExpression)?;

        Ok(Expression::Parenthesis {
            inner: Box::new(inner),
            range: self.range_from(start),
        })
    }

    fn parse_integer(&mut self) -> PResult<Expression> {
        let start = self.cursor.offset();
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        let range = self.range_from(start);

        let value = digits.parse::<u64>().map_err(|_| {
            self.error(ErrorKind::MalformedExpression, range)
                .detail("integer literal out of range")
                .finish()
        })?;

        Ok(Expression::Integer { value, range })
    }

    /// `id[.key]` | `id[index]` | `id(args)` | `id`
    fn parse_identifier_postfix(&mut self, base: Identifier) -> PResult<Expression> {
        let start = base.range.start();

        if self.cursor.peek2() == Some(['[', '.']) {
            self.cursor.advance(2);
            let key = self.parse_bracketed()?;
            return Ok(Expression::Attribute {
                base,
                key: Box::new(key),
                range: self.range_from(start),
            });
        }

        if self.cursor.starts_with("[") {
            self.cursor.bump();
            let index = self.parse_bracketed()?;
            return Ok(Expression::Member {
                base,
                index: Box::new(index),
                range: self.range_from(start),
            });
        }

        if self.cursor.starts_with("(") {
            let args = self.parse_call_args()?;
            return Ok(Expression::Call {
                callee: base,
                args,
                range: self.range_from(start),
            });
        }

        Ok(Expression::Identifier(base))
    }

    /// `ws expression ws ]`, after the opening bracket.
    fn parse_bracketed(&mut self) -> PResult<Expression> {
        self.cursor.skip_whitespace();
        let expr = self.parse_expression()?;
        self.cursor.skip_whitespace();
        self.expect(']', ErrorKind::MalformedExpression)?;
        Ok(expr)
    }

    /// `( [expression { , expression }] )`
    fn parse_call_args(&mut self) -> PResult<Vec<Expression>> {
        self.cursor.bump();
        self.cursor.skip_whitespace();

        let mut args = Vec::new();
        if self.eat(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            self.cursor.skip_whitespace();
            if self.eat(')') {
                return Ok(args);
            }
            self.expect(',', ErrorKind::MalformedExpression)?;
            self.cursor.skip_whitespace();
        }
    }
}

fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    let range = TextRange::new(left.range().start(), right.range().end());
    Expression::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        range,
    }
}

fn logical(op: LogicalOperator, left: Expression, right: Expression) -> Expression {
    let range = TextRange::new(left.range().start(), right.range().end());
    Expression::Logical {
        op,
        left: Box::new(left),
        right: Box::new(right),
        range,
    }
}

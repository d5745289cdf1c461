//! The Pratt expression driver: prefix/infix dispatch and the per-node
//! parsers for every [`Expression`] variant.
//!
//! Dispatch is a plain `match` over [`TokenType`] rather than a table of
//! function pointers — with on the order of sixty token kinds to cover, a
//! `match` compiles to the same jump table a dispatch array would give, and
//! stays readable without the indirection.

use conchc_lex::TokenType;

use crate::ast::*;
use crate::error::ParserError;
use crate::precedence::Precedence;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parse one expression, absorbing infix operators that bind tighter
    /// than `precedence` into the left-hand side.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression<'a>, ()> {
        let mut left = self.parse_prefix()?;
        // After `parse_prefix` returns, `current` already sits on whatever
        // comes next — if that is an infix operator binding tighter than
        // `precedence`, absorb it into `left` and repeat. Each
        // `parse_infix` arm consumes its own operator token as its first
        // step, so the loop itself never advances.
        while !self.current_is(TokenType::Semicolon)
            && !self.current_is(TokenType::End)
            && has_infix(self.current.ty)
            && precedence < Precedence::of(self.current.ty)
        {
            left = self.parse_infix(left)?;
        }
        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expression<'a>, ()> {
        use TokenType::*;
        match self.current.ty {
            Ident => self.parse_identifier(),
            String | MultilineString => self.parse_string_literal(),
            Float => self.parse_float_literal(),
            Byte => self.parse_byte_literal(),
            True | False => self.parse_bool_literal(),
            Bang | Tilde | Minus | Ampersand => self.parse_prefix_expr(),
            Dot => self.parse_implicit_access(),
            LParen => self.parse_grouped_expr(),
            If => self.parse_if_expr(),
            Match => self.parse_match_expr(),
            LBracket => self.parse_array_expr(),
            For => self.parse_for_expr(),
            While => self.parse_while_expr(),
            Do => self.parse_do_while_expr(),
            Loop => self.parse_infinite_loop_expr(),
            Fn => self.parse_function_expr(),
            Struct | Packed => self.parse_struct_expr(),
            Enum => self.parse_enum_expr(),
            Mut => self.parse_type_expr(),
            t if t.is_integer() && t.is_unsigned_integer() => self.parse_unsigned_int(),
            t if t.is_integer() => self.parse_signed_int(),
            t if t.is_primitive() || t.is_builtin() => self.parse_identifier(),
            _ => {
                self.push_error(ParserError::MissingPrefixParser);
                Err(())
            }
        }
    }

    fn parse_infix(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        use TokenType::*;
        match self.current.ty {
            LParen => self.parse_call_expr(left),
            LBracket => self.parse_index_expr(left),
            ColonColon => self.parse_scope_resolution_expr(left),
            Dot => self.parse_dot_expr(left),
            DotDot | DotDotEq => self.parse_range_expr(left),
            Orelse => self.parse_orelse_expr(left),
            Assign | PlusAssign | MinusAssign | StarAssign | SlashAssign | PercentAssign
            | AmpAssign | PipeAssign | CaretAssign | ShlAssign | ShrAssign => {
                self.parse_assignment_expr(left)
            }
            _ => self.parse_binary_expr(left),
        }
    }

    // -- literals ---------------------------------------------------------

    fn parse_identifier(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.advance();
        Ok(Expression::Identifier(IdentifierExpr {
            start_token: token,
            name: token,
        }))
    }

    fn parse_string_literal(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        if token.promote().is_err() {
            self.push_error(ParserError::MalformedString);
        }
        self.advance();
        Ok(Expression::String(StringExpr { start_token: token }))
    }

    fn parse_byte_literal(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        self.advance();
        match token.promote_byte() {
            Ok(value) => Ok(Expression::Byte(ByteExpr {
                start_token: token,
                value,
            })),
            Err(conchc_lex::TokenError::UnexpectedChar) => {
                self.push_error_at(ParserError::UnknownCharacterEscape, token.location);
                Err(())
            }
            Err(_) => {
                self.push_error_at(ParserError::MalformedCharacter, token.location);
                Err(())
            }
        }
    }

    fn parse_float_literal(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        self.advance();
        match token.text().parse::<f64>() {
            Ok(value) if value.is_infinite() => {
                self.push_error_at(ParserError::FloatOverflow, token.location);
                Err(())
            }
            Ok(value) => Ok(Expression::Float(FloatExpr {
                start_token: token,
                value,
            })),
            Err(_) => {
                self.push_error_at(ParserError::MalformedFloat, token.location);
                Err(())
            }
        }
    }

    fn parse_signed_int(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        self.advance();
        let base = int_base(token.ty);
        let digits = strip_integer_suffix(token.text());
        let digits = strip_base_prefix(digits, base);
        if digits.is_empty() {
            self.push_error_with_message_at(
                ParserError::MalformedInteger,
                format!("'{}' has no digits after its prefix/suffix", token.text()),
                token.location,
            );
            return Err(());
        }
        let width = int_width(token.ty);
        let fits = |value: i64| match width {
            IntWidth::Base => i32::try_from(value).is_ok(),
            IntWidth::Long => true,
            IntWidth::Size => isize::try_from(value).is_ok(),
        };
        match i64::from_str_radix(digits, base) {
            Ok(value) if fits(value) => Ok(Expression::SignedInt(SignedIntExpr {
                start_token: token,
                value,
                width,
            })),
            _ => {
                self.push_error_with_message_at(
                    ParserError::IntegerOverflow,
                    format!(
                        "'{}' does not fit in a signed {} integer",
                        token.text(),
                        width.describe()
                    ),
                    token.location,
                );
                Err(())
            }
        }
    }

    fn parse_unsigned_int(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        self.advance();
        let base = int_base(token.ty);
        let digits = strip_integer_suffix(token.text());
        let digits = strip_base_prefix(digits, base);
        if digits.is_empty() {
            self.push_error_with_message_at(
                ParserError::MalformedInteger,
                format!("'{}' has no digits after its prefix/suffix", token.text()),
                token.location,
            );
            return Err(());
        }
        let width = int_width(token.ty);
        let fits = |value: u64| match width {
            IntWidth::Base => u32::try_from(value).is_ok(),
            IntWidth::Long => true,
            IntWidth::Size => usize::try_from(value).is_ok(),
        };
        match u64::from_str_radix(digits, base) {
            Ok(value) if fits(value) => Ok(Expression::UnsignedInt(UnsignedIntExpr {
                start_token: token,
                value,
                width,
            })),
            _ => {
                self.push_error_with_message_at(
                    ParserError::IntegerOverflow,
                    format!(
                        "'{}' does not fit in an unsigned {} integer",
                        token.text(),
                        width.describe()
                    ),
                    token.location,
                );
                Err(())
            }
        }
    }

    fn parse_bool_literal(&mut self) -> Result<Expression<'a>, ()> {
        let token = self.current;
        let value = token.ty == TokenType::True;
        self.advance();
        Ok(Expression::Bool(BoolExpr {
            start_token: token,
            value,
        }))
    }

    // -- prefix -------------------------------------------------------------

    fn parse_prefix_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        let op = match start.ty {
            TokenType::Bang => {
                self.advance();
                PrefixOp::Not
            }
            TokenType::Tilde => {
                self.advance();
                PrefixOp::BitNot
            }
            TokenType::Minus => {
                self.advance();
                PrefixOp::Negate
            }
            TokenType::Ampersand => {
                self.advance();
                if self.current_is(TokenType::Mut) {
                    self.advance();
                    PrefixOp::MutAddressOf
                } else {
                    PrefixOp::AddressOf
                }
            }
            _ => unreachable!("parse_prefix_expr dispatched on a non-prefix token"),
        };
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::PrefixMissingOperand, start.location);
            return Err(());
        }
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpr {
            start_token: start,
            op,
            operand: Box::new(operand),
        }))
    }

    fn parse_implicit_access(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::PrefixMissingOperand, start.location);
            return Err(());
        }
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpr {
            start_token: start,
            op: PrefixOp::ImplicitAccess,
            operand: Box::new(operand),
        }))
    }

    fn parse_grouped_expr(&mut self) -> Result<Expression<'a>, ()> {
        self.advance(); // '('
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenType::RParen)?;
        // `Grouped` is explicitly not an AST node: parentheses only affect
        // how the inner expression was parsed, not what it parses to.
        Ok(inner)
    }

    // -- control-flow expressions --------------------------------------------

    fn parse_if_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'if'
        let condition = self.parse_expression(Precedence::Lowest)?;
        let consequence = self.parse_restricted_statement(ParserError::IllegalIfBranch)?;
        let alternative = if self.current_is(TokenType::Else) {
            self.advance();
            Some(Box::new(self.parse_restricted_statement(ParserError::IllegalIfBranch)?))
        } else {
            None
        };
        Ok(Expression::If(IfExpr {
            start_token: start,
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative,
        }))
    }

    fn parse_match_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'match'
        if self.current_is(TokenType::LBrace) {
            self.push_error_at(ParserError::MatchExprMissingCondition, start.location);
            return Err(());
        }
        let subject = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenType::LBrace)?;
        let mut arms = Vec::new();
        while !self.current_is(TokenType::RBrace) && !self.current_is(TokenType::End) {
            arms.push(self.parse_match_arm()?);
            if self.current_is(TokenType::Comma) {
                self.advance();
            }
        }
        self.expect(TokenType::RBrace)?;
        if arms.is_empty() {
            self.push_error_at(ParserError::ArmlessMatchExpr, start.location);
            return Err(());
        }
        if let Some(pos) = arms.iter().position(|arm| arm.is_catch_all) {
            if pos != arms.len() - 1 {
                self.push_error_at(ParserError::IllegalMatchCatchAll, start.location);
                return Err(());
            }
        }
        Ok(Expression::Match(MatchExpr {
            start_token: start,
            subject: Box::new(subject),
            arms,
        }))
    }

    fn parse_match_arm(&mut self) -> Result<MatchArm<'a>, ()> {
        let is_catch_all = self.current_is(TokenType::Underscore);
        let mut patterns = Vec::new();
        if is_catch_all {
            self.advance();
        } else {
            loop {
                patterns.push(self.parse_expression(Precedence::Lowest)?);
                if self.current_is(TokenType::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        if !self.current_is(TokenType::FatArrow) {
            self.push_error(ParserError::IllegalMatchArm);
            return Err(());
        }
        self.advance(); // '=>'
        let body = self.parse_restricted_statement(ParserError::IllegalMatchArm)?;
        Ok(MatchArm {
            patterns,
            is_catch_all,
            body,
        })
    }

    fn parse_array_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // '['
        let size = if self.current_is(TokenType::Underscore) {
            self.advance();
            None
        } else if self.current_is(TokenType::RBracket) {
            self.push_error(ParserError::MissingArraySizeToken);
            return Err(());
        } else {
            Some(Box::new(self.parse_expression(Precedence::Lowest)?))
        };
        self.expect(TokenType::RBracket)?;
        self.expect(TokenType::LBrace)?;
        let mut items = Vec::new();
        while !self.current_is(TokenType::RBrace) && !self.current_is(TokenType::End) {
            items.push(self.parse_expression(Precedence::Lowest)?);
            if self.current_is(TokenType::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(TokenType::RBrace)?;

        if items.is_empty() {
            self.push_error_at(ParserError::EmptyArray, start.location);
            return Err(());
        }
        if let Some(size_expr) = &size {
            let declared = match size_expr.as_ref() {
                Expression::UnsignedInt(e) => Some(e.value as usize),
                Expression::SignedInt(e) if e.value >= 0 => Some(e.value as usize),
                _ => None,
            };
            match declared {
                Some(n) if n == items.len() => {}
                Some(_) => {
                    self.push_error_at(ParserError::IncorrectExplicitArraySize, start.location);
                    return Err(());
                }
                None => {
                    self.push_error_at(ParserError::UnexpectedArraySizeToken, start.location);
                    return Err(());
                }
            }
        }

        Ok(Expression::Array(ArrayExpr {
            start_token: start,
            size,
            items,
        }))
    }

    fn parse_for_capture(&mut self) -> Result<Expression<'a>, ()> {
        match self.current.ty {
            TokenType::Ident | TokenType::Underscore => {
                let token = self.advance();
                Ok(Expression::Identifier(IdentifierExpr {
                    start_token: token,
                    name: token,
                }))
            }
            _ => {
                self.push_error(ParserError::IllegalForLoopCapture);
                Err(())
            }
        }
    }

    fn parse_for_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'for'
        let mut captures = vec![self.parse_for_capture()?];
        while self.current_is(TokenType::Comma) {
            self.advance();
            captures.push(self.parse_for_capture()?);
        }
        self.expect(TokenType::In)?;
        let mut iterables = vec![self.parse_expression(Precedence::Lowest)?];
        while self.current_is(TokenType::Comma) {
            self.advance();
            iterables.push(self.parse_expression(Precedence::Lowest)?);
        }
        if captures.len() != iterables.len() {
            self.push_error_at(ParserError::ForIterableCaptureMismatch, start.location);
            return Err(());
        }
        if captures.iter().all(is_discard_capture) {
            self.push_error_at(ParserError::IllegalForLoopDiscard, start.location);
            return Err(());
        }
        let body = self.parse_restricted_statement(ParserError::IllegalLoopNonBreak)?;
        if is_empty_block(&body) {
            self.push_error_at(ParserError::EmptyForLoop, start.location);
            return Err(());
        }
        Ok(Expression::For(ForExpr {
            start_token: start,
            captures,
            iterables,
            body: Box::new(body),
        }))
    }

    fn parse_while_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'while'
        if self.current_is(TokenType::LBrace) {
            self.push_error_at(ParserError::WhileMissingCondition, start.location);
            return Err(());
        }
        let condition = self.parse_expression(Precedence::Lowest)?;
        let continuation = if self.current_is(TokenType::Colon) {
            self.advance();
            Some(Box::new(self.parse_restricted_statement(ParserError::IllegalLoopNonBreak)?))
        } else {
            None
        };
        if let Some(cont) = &continuation {
            if let Statement::Jump(j) = cont.as_ref() {
                if j.kind == JumpKind::Break {
                    self.push_error_at(ParserError::ImproperWhileContinuation, start.location);
                    return Err(());
                }
            }
        }
        let body = self.parse_restricted_statement(ParserError::IllegalLoopNonBreak)?;
        if is_empty_block(&body) {
            self.push_error_at(ParserError::EmptyWhileLoop, start.location);
            return Err(());
        }
        Ok(Expression::While(WhileExpr {
            start_token: start,
            condition: Box::new(condition),
            continuation,
            body: Box::new(body),
        }))
    }

    fn parse_do_while_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'do'
        let body = self.parse_restricted_statement(ParserError::IllegalLoopNonBreak)?;
        self.expect(TokenType::While)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        Ok(Expression::DoWhile(DoWhileExpr {
            start_token: start,
            body: Box::new(body),
            condition: Box::new(condition),
        }))
    }

    fn parse_infinite_loop_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'loop'
        let body = self.parse_restricted_statement(ParserError::IllegalLoopNonBreak)?;
        if is_empty_block(&body) {
            self.push_error_at(ParserError::EmptyLoop, start.location);
            return Err(());
        }
        Ok(Expression::InfiniteLoop(InfiniteLoopExpr {
            start_token: start,
            body: Box::new(body),
        }))
    }

    // -- call / index / scope / dot / range / assignment / binary -----------

    fn parse_call_expr(&mut self, callee: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current; // '('
        self.advance();
        let mut arguments = Vec::new();
        if !self.current_is(TokenType::RParen) {
            loop {
                arguments.push(self.parse_expression(Precedence::Lowest)?);
                if self.current_is(TokenType::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenType::RParen)?;
        Ok(Expression::Call(CallExpr {
            start_token: start,
            callee: Box::new(callee),
            arguments,
        }))
    }

    fn parse_index_expr(&mut self, receiver: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current; // '['
        self.advance();
        if self.current_is(TokenType::RBracket) {
            self.push_error(ParserError::IndexMissingExpression);
            return Err(());
        }
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenType::RBracket)?;
        Ok(Expression::Index(IndexExpr {
            start_token: start,
            receiver: Box::new(receiver),
            index: Box::new(index),
        }))
    }

    fn parse_scope_resolution_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current; // '::'
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        let right = self.parse_expression(Precedence::ScopeResolution)?;
        Ok(Expression::ScopeResolution(ScopeResolutionExpr {
            start_token: start,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_dot_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current; // '.'
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        let right = self.parse_expression(Precedence::CallIdx)?;
        Ok(Expression::Infix(InfixExpr {
            start_token: start,
            kind: InfixKind::Dot,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_range_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current;
        let inclusive = start.ty == TokenType::DotDotEq;
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        let right = self.parse_expression(Precedence::Range)?;
        Ok(Expression::Infix(InfixExpr {
            start_token: start,
            kind: InfixKind::Range { inclusive },
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_orelse_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        // Right-associative: recurse one level below `Assignment` so a
        // following `orelse`/assignment binds into the right-hand side
        // instead of bubbling back to the outer loop.
        let right = self.parse_expression(Precedence::Range)?;
        Ok(Expression::Infix(InfixExpr {
            start_token: start,
            kind: InfixKind::Orelse,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_assignment_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current;
        let op = assign_op_of(start.ty);
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        let right = self.parse_expression(Precedence::Range)?;
        Ok(Expression::Infix(InfixExpr {
            start_token: start,
            kind: InfixKind::Assignment(op),
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_binary_expr(&mut self, left: Expression<'a>) -> Result<Expression<'a>, ()> {
        let start = self.current;
        let op = binary_op_of(start.ty);
        let prec = Precedence::of(start.ty);
        self.advance();
        if self.current_is(TokenType::End) {
            self.push_error_at(ParserError::InfixMissingRhs, start.location);
            return Err(());
        }
        let right = self.parse_expression(prec)?;
        Ok(Expression::Infix(InfixExpr {
            start_token: start,
            kind: InfixKind::Binary(op),
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    // -- function / struct / enum --------------------------------------------

    fn parse_function_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'fn'
        if !self.current_is(TokenType::LParen) {
            self.push_error(ParserError::IllegalFunctionDefinition);
            return Err(());
        }
        self.advance();
        let mut parameters = Vec::new();
        if !self.current_is(TokenType::RParen) {
            loop {
                if !self.current_is(TokenType::Ident) {
                    self.push_error(ParserError::IllegalFunctionDefinition);
                    return Err(());
                }
                let name = self.advance();
                if !self.current_is(TokenType::Colon) {
                    self.push_error_at(ParserError::IllegalFunctionParameterType, name.location);
                    return Err(());
                }
                self.advance(); // ':'
                let declared_type = self.parse_type_clause()?;
                parameters.push(Parameter {
                    name,
                    declared_type: Some(declared_type),
                });
                if self.current_is(TokenType::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenType::RParen)?;
        let return_type = if !self.current_is(TokenType::LBrace) && !self.current_is(TokenType::Semicolon) {
            Some(Box::new(self.parse_type_clause()?))
        } else {
            None
        };
        let body = if self.current_is(TokenType::LBrace) {
            Some(Box::new(self.parse_block_statement()?))
        } else {
            None
        };
        Ok(Expression::Function(FunctionExpr {
            start_token: start,
            parameters,
            return_type,
            body,
        }))
    }

    fn parse_struct_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        let packed = self.current_is(TokenType::Packed);
        if packed {
            self.advance(); // 'packed'
        }
        self.expect(TokenType::Struct)?;
        self.expect(TokenType::LBrace)?;
        let mut members = Vec::new();
        while !self.current_is(TokenType::RBrace) && !self.current_is(TokenType::End) {
            if !self.current_is(TokenType::Ident) {
                self.push_error(ParserError::InvalidStructMember);
                return Err(());
            }
            let name = self.advance();
            if !self.current_is(TokenType::Colon) {
                self.push_error_at(ParserError::InvalidStructMember, name.location);
                return Err(());
            }
            self.advance(); // ':'
            let declared_type = self.parse_type_clause()?;
            members.push(StructMember { name, declared_type });
            if self.current_is(TokenType::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(TokenType::RBrace)?;
        if members.is_empty() {
            self.push_error_at(ParserError::EmptyStruct, start.location);
            return Err(());
        }
        Ok(Expression::Struct(StructExpr {
            start_token: start,
            members,
            packed,
        }))
    }

    fn parse_enum_expr(&mut self) -> Result<Expression<'a>, ()> {
        let start = self.current;
        self.advance(); // 'enum'
        let underlying = if self.current_is(TokenType::Colon) {
            self.advance();
            if self.current_is(TokenType::Ident) || self.current.ty.is_primitive() {
                Some(self.advance())
            } else {
                self.push_error(ParserError::UnexpectedToken);
                return Err(());
            }
        } else {
            None
        };
        self.expect(TokenType::LBrace)?;
        let mut variants = Vec::new();
        while !self.current_is(TokenType::RBrace) && !self.current_is(TokenType::End) {
            if !self.current_is(TokenType::Ident) {
                self.push_error(ParserError::UnexpectedToken);
                return Err(());
            }
            let name = self.advance();
            let default = if self.current_is(TokenType::Assign) {
                self.advance();
                Some(self.parse_expression(Precedence::Lowest)?)
            } else {
                None
            };
            variants.push(EnumVariant { name, default });
            if self.current_is(TokenType::Comma) {
                self.advance();
            } else {
                self.push_error(ParserError::MissingTrailingComma);
                return Err(());
            }
        }
        self.expect(TokenType::RBrace)?;
        if variants.is_empty() {
            self.push_error_at(ParserError::EnumMissingVariants, start.location);
            return Err(());
        }
        Ok(Expression::Enum(EnumExpr {
            start_token: start,
            underlying,
            variants,
        }))
    }

    // -- types ----------------------------------------------------------------

    fn parse_type_expr(&mut self) -> Result<Expression<'a>, ()> {
        let type_expr = self.parse_type_clause()?;
        Ok(Expression::Type(type_expr))
    }

    /// `[mut] kind`, where `kind` is a named type, an array type
    /// (`[dimension?]element`), or a function type (`fn(params) return`).
    pub(crate) fn parse_type_clause(&mut self) -> Result<TypeExpr<'a>, ()> {
        let start = self.current;
        let mut modifiers = TypeModifiers::default();
        if self.current_is(TokenType::Mut) {
            modifiers.mutable = Some(self.current);
            self.advance();
        }
        if self.current_is(TokenType::Ref) {
            modifiers.reference = Some(self.current);
            self.advance();
        }

        let kind = match self.current.ty {
            TokenType::LBracket => {
                self.advance();
                let dimension = if self.current_is(TokenType::RBracket) {
                    None
                } else {
                    Some(Box::new(self.parse_expression(Precedence::Lowest)?))
                };
                self.expect(TokenType::RBracket)?;
                let element = Box::new(self.parse_type_clause()?);
                TypeKind::Array { dimension, element }
            }
            TokenType::Fn => {
                self.advance();
                self.expect(TokenType::LParen)?;
                let mut parameters = Vec::new();
                if !self.current_is(TokenType::RParen) {
                    loop {
                        parameters.push(self.parse_type_clause()?);
                        if self.current_is(TokenType::Comma) {
                            self.advance();
                            continue;
                        }
                        break;
                    }
                }
                self.expect(TokenType::RParen)?;
                let return_type = Box::new(self.parse_type_clause()?);
                if self.current_is(TokenType::LBrace) {
                    self.push_error_at(ParserError::ExplicitFnTypeHasBody, start.location);
                    return Err(());
                }
                TypeKind::Function {
                    parameters,
                    return_type,
                }
            }
            TokenType::Ident
            | TokenType::VoidKw
            | TokenType::BoolKw
            | TokenType::ByteKw
            | TokenType::IntKw
            | TokenType::LongKw
            | TokenType::IsizeKw
            | TokenType::UintKw
            | TokenType::UlongKw
            | TokenType::UsizeKw
            | TokenType::FloatKw
            | TokenType::StringKw => {
                let token = self.advance();
                TypeKind::Named(token)
            }
            TokenType::Mut => {
                self.push_error_at(ParserError::IllegalTypeModifiers, start.location);
                return Err(());
            }
            _ => {
                self.push_error_at(ParserError::IllegalExplicitType, start.location);
                return Err(());
            }
        };

        Ok(TypeExpr {
            start_token: start,
            modifiers,
            kind,
        })
    }
}

fn has_infix(ty: TokenType) -> bool {
    use TokenType::*;
    matches!(
        ty,
        Plus | Minus
            | Star
            | Slash
            | Percent
            | EqEq
            | NotEq
            | Lt
            | Gt
            | LtEq
            | GtEq
            | Ampersand
            | Pipe
            | Caret
            | Shl
            | Shr
            | And
            | Or
            | Is
            | In
            | Assign
            | PlusAssign
            | MinusAssign
            | StarAssign
            | SlashAssign
            | PercentAssign
            | AmpAssign
            | PipeAssign
            | CaretAssign
            | ShlAssign
            | ShrAssign
            | Dot
            | DotDot
            | DotDotEq
            | Orelse
            | ColonColon
            | LParen
            | LBracket
    )
}

fn is_discard_capture(expr: &Expression) -> bool {
    matches!(expr, Expression::Identifier(i) if i.name.text() == "_")
}

fn is_empty_block(stmt: &Statement) -> bool {
    matches!(stmt, Statement::Block(b) if b.statements.is_empty())
}

fn binary_op_of(ty: TokenType) -> BinaryOp {
    use TokenType::*;
    match ty {
        Plus => BinaryOp::Add,
        Minus => BinaryOp::Sub,
        Star => BinaryOp::Mul,
        Slash => BinaryOp::Div,
        Percent => BinaryOp::Mod,
        EqEq => BinaryOp::Eq,
        NotEq => BinaryOp::NotEq,
        Lt => BinaryOp::Lt,
        Gt => BinaryOp::Gt,
        LtEq => BinaryOp::LtEq,
        GtEq => BinaryOp::GtEq,
        Ampersand => BinaryOp::BitAnd,
        Pipe => BinaryOp::BitOr,
        Caret => BinaryOp::BitXor,
        Shl => BinaryOp::Shl,
        Shr => BinaryOp::Shr,
        And => BinaryOp::And,
        Or => BinaryOp::Or,
        Is => BinaryOp::Is,
        In => BinaryOp::In,
        other => unreachable!("{other:?} is not a binary operator token"),
    }
}

fn assign_op_of(ty: TokenType) -> AssignOp {
    use TokenType::*;
    match ty {
        Assign => AssignOp::Assign,
        PlusAssign => AssignOp::AddAssign,
        MinusAssign => AssignOp::SubAssign,
        StarAssign => AssignOp::MulAssign,
        SlashAssign => AssignOp::DivAssign,
        PercentAssign => AssignOp::ModAssign,
        AmpAssign => AssignOp::BitAndAssign,
        PipeAssign => AssignOp::BitOrAssign,
        CaretAssign => AssignOp::BitXorAssign,
        ShlAssign => AssignOp::ShlAssign,
        ShrAssign => AssignOp::ShrAssign,
        other => unreachable!("{other:?} is not an assignment operator token"),
    }
}

/// The numeric base (2, 8, 10, or 16) an integer `TokenType` was lexed in.
fn int_base(ty: TokenType) -> u32 {
    use TokenType::*;
    match ty {
        Int2 | LInt2 | ZInt2 | UInt2 | ULInt2 | UZInt2 => 2,
        Int8 | LInt8 | ZInt8 | UInt8 | ULInt8 | UZInt8 => 8,
        Int16 | LInt16 | ZInt16 | UInt16 | ULInt16 | UZInt16 => 16,
        _ => 10,
    }
}

/// Which of the three suffix-driven width categories an integer token
/// belongs to: unsuffixed (base, i32/u32-like), `l`/`L` (long, i64/u64), or
/// `z`/`Z` (size, isize/usize).
fn int_width(ty: TokenType) -> IntWidth {
    use TokenType::*;
    match ty {
        LInt2 | LInt8 | LInt10 | LInt16 | ULInt2 | ULInt8 | ULInt10 | ULInt16 => IntWidth::Long,
        ZInt2 | ZInt8 | ZInt10 | ZInt16 | UZInt2 | UZInt8 | UZInt10 | UZInt16 => IntWidth::Size,
        _ => IntWidth::Base,
    }
}

/// Strips the trailing `u`/`U` and/or `l`/`L`/`z`/`Z` width suffix.
fn strip_integer_suffix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = bytes.len();
    if end > 0 && matches!(bytes[end - 1], b'l' | b'L' | b'z' | b'Z') {
        end -= 1;
    }
    if end > 0 && matches!(bytes[end - 1], b'u' | b'U') {
        end -= 1;
    }
    &text[..end]
}

/// Strips the `0x`/`0o`/`0b` base prefix, if `base` calls for one.
fn strip_base_prefix(text: &str, base: u32) -> &str {
    if base == 10 {
        text
    } else {
        text.get(2..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;

    fn parse_expr(input: &str) -> (crate::Expression<'_>, usize) {
        let mut parser = Parser::new(input);
        let expr = parser.parse_expression(crate::Precedence::Lowest).unwrap();
        (expr, parser.diagnostics.len())
    }

    #[test]
    fn integer_literal() {
        let (expr, errs) = parse_expr("42");
        assert_eq!(errs, 0);
        match expr {
            crate::Expression::SignedInt(e) => {
                assert_eq!(e.value, 42);
                assert_eq!(e.width, crate::ast::IntWidth::Base);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn base_width_signed_literal_overflows_past_i32() {
        let mut parser = Parser::new("2147483648");
        assert!(parser.parse_expression(crate::Precedence::Lowest).is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn long_width_signed_literal_permits_i32_overflowing_values() {
        let (expr, errs) = parse_expr("2147483648l");
        assert_eq!(errs, 0);
        match expr {
            crate::Expression::SignedInt(e) => {
                assert_eq!(e.value, 2147483648);
                assert_eq!(e.width, crate::ast::IntWidth::Long);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn base_width_unsigned_literal_overflows_past_u32() {
        let mut parser = Parser::new("4294967296u");
        assert!(parser.parse_expression(crate::Precedence::Lowest).is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn binary_precedence_climbs() {
        let (expr, errs) = parse_expr("1 + 2 * 3");
        assert_eq!(errs, 0);
        match expr {
            crate::Expression::Infix(i) => match i.kind {
                crate::ast::InfixKind::Binary(crate::ast::BinaryOp::Add) => {}
                other => panic!("unexpected top-level op {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn grouped_expression_is_not_a_node() {
        let (expr, errs) = parse_expr("(1 + 2) * 3");
        assert_eq!(errs, 0);
        match expr {
            crate::Expression::Infix(i) => match i.kind {
                crate::ast::InfixKind::Binary(crate::ast::BinaryOp::Mul) => {}
                other => panic!("unexpected top-level op {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn array_size_mismatch_is_diagnosed() {
        let mut parser = Parser::new("[3]{1, 2}");
        assert!(parser.parse_expression(crate::Precedence::Lowest).is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn empty_array_is_diagnosed() {
        let mut parser = Parser::new("[_]{}");
        assert!(parser.parse_expression(crate::Precedence::Lowest).is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }
}

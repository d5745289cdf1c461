//! Statement parsers: declarations (with their modifier-exclusion rules),
//! jumps, imports, blocks, discards, and bare expression statements.

use conchc_lex::{Token, TokenType};

use crate::ast::*;
use crate::error::ParserError;
use crate::precedence::Precedence;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `[modifiers] name[: Type][= value | := value];`
    ///
    /// Modifiers form three independent slots — mutability (`var`/`const`/
    /// `comptime`), linkage (`extern`/`export`), access (`private`) — each
    /// fillable at most once. Filling a slot with the same token twice is
    /// `DUPLICATE_DECL_MODIFIER`; filling it with a conflicting token, or
    /// combining `comptime` with a linkage modifier, is
    /// `ILLEGAL_DECL_MODIFIERS`.
    pub(crate) fn parse_decl_statement(&mut self) -> Result<Statement<'a>, ()> {
        use TokenType::*;
        let start = self.current;

        let mut mutability: Option<(Mutability, Token<'a>)> = None;
        let mut linkage: Option<(Linkage, Token<'a>)> = None;
        let mut access: Option<(Access, Token<'a>)> = None;
        let mut modifier_error = false;

        loop {
            match self.current.ty {
                Var | Const | Comptime => {
                    let kind = match self.current.ty {
                        Var => Mutability::Variable,
                        Const => Mutability::Constant,
                        Comptime => Mutability::Comptime,
                        _ => unreachable!(),
                    };
                    let tok = self.current;
                    match mutability {
                        Some((existing, _)) if existing == kind => {
                            self.push_error(ParserError::DuplicateDeclModifier);
                            modifier_error = true;
                        }
                        Some(_) => {
                            self.push_error(ParserError::IllegalDeclModifiers);
                            modifier_error = true;
                        }
                        None => mutability = Some((kind, tok)),
                    }
                    self.advance();
                }
                Extern | Export => {
                    let kind = if self.current.ty == Extern {
                        Linkage::Extern
                    } else {
                        Linkage::Export
                    };
                    let tok = self.current;
                    match linkage {
                        Some((existing, _)) if existing == kind => {
                            self.push_error(ParserError::DuplicateDeclModifier);
                            modifier_error = true;
                        }
                        Some(_) => {
                            self.push_error(ParserError::IllegalDeclModifiers);
                            modifier_error = true;
                        }
                        None => linkage = Some((kind, tok)),
                    }
                    self.advance();
                }
                Private => {
                    let tok = self.current;
                    if access.is_some() {
                        self.push_error(ParserError::DuplicateDeclModifier);
                        modifier_error = true;
                    } else {
                        access = Some((Access::Private, tok));
                    }
                    self.advance();
                }
                _ => break,
            }
        }

        if matches!(mutability, Some((Mutability::Comptime, _))) && linkage.is_some() {
            self.push_error_at(ParserError::IllegalDeclModifiers, start.location);
            modifier_error = true;
        }

        if modifier_error {
            return Err(());
        }

        if !self.current_is(Ident) {
            self.push_error(ParserError::IllegalIdentifier);
            return Err(());
        }
        let name = self.advance();

        let mut declared_type = None;
        let mut value = None;
        if self.current_is(Colon) {
            self.advance();
            declared_type = Some(self.parse_type_clause()?);
            if self.current_is(Assign) {
                self.advance();
                value = Some(self.parse_expression(Precedence::Lowest)?);
            }
        } else if self.current_is(Walrus) {
            self.advance();
            value = Some(self.parse_expression(Precedence::Lowest)?);
        }

        let modifiers = DeclModifiers {
            mutability,
            linkage,
            access,
        };

        if modifiers.is_extern() {
            if value.is_some() {
                self.push_error_at(ParserError::ExternValueInitialized, start.location);
                return Err(());
            }
            if declared_type.is_none() {
                self.push_error_at(ParserError::ExternMissingType, start.location);
                return Err(());
            }
        } else if modifiers.is_const_like() {
            if value.is_none() {
                self.push_error_at(ParserError::ConstDeclMissingValue, start.location);
                return Err(());
            }
        } else if declared_type.is_none() && value.is_none() {
            self.push_error_at(ParserError::ForwardVarDeclMissingType, start.location);
            return Err(());
        }

        Ok(Statement::Decl(DeclStatement {
            start_token: start,
            modifiers,
            name,
            declared_type,
            value,
        }))
    }

    /// `break|return|continue [value];`
    pub(crate) fn parse_jump_statement(&mut self) -> Result<Statement<'a>, ()> {
        use TokenType::*;
        let start = self.current;
        let kind = match start.ty {
            Break => JumpKind::Break,
            Return => JumpKind::Return,
            Continue => JumpKind::Continue,
            _ => unreachable!("parse_jump_statement dispatched on a non-jump token"),
        };
        self.advance();
        let value = if self.current_is(Semicolon) || self.current_is(RBrace) || self.current_is(End) {
            None
        } else {
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        Ok(Statement::Jump(JumpStatement {
            start_token: start,
            kind,
            value,
        }))
    }

    /// `import "path" [alias];`
    ///
    /// A path starting with `.` names a user/relative module rather than a
    /// builtin one, and has no implicit name of its own — it must bind an
    /// alias.
    pub(crate) fn parse_import_statement(&mut self) -> Result<Statement<'a>, ()> {
        let start = self.current;
        self.advance(); // 'import'
        if !self.current_is(TokenType::String) && !self.current_is(TokenType::Ident) {
            self.push_error(ParserError::IllegalImport);
            return Err(());
        }
        let is_user_path = self.current_is(TokenType::String);
        let path = self.advance();
        let alias = if self.current_is(TokenType::As) {
            self.advance();
            Some(self.expect(TokenType::Ident)?)
        } else {
            None
        };

        if is_user_path && alias.is_none() {
            self.push_error_at(ParserError::UserImportMissingAlias, start.location);
            return Err(());
        }

        Ok(Statement::Import(ImportStatement {
            start_token: start,
            path,
            alias,
        }))
    }

    /// `{ statement* }`, recursing through the same uniform
    /// one-diagnostic-one-token-advance recovery as [`Parser::consume`].
    pub(crate) fn parse_block_statement(&mut self) -> Result<Statement<'a>, ()> {
        let start = self.current; // '{'
        self.advance();
        let mut statements = Vec::new();
        loop {
            self.skip_comments();
            if self.current_is(TokenType::RBrace) || self.current_is(TokenType::End) {
                break;
            }
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.skip_optional_semicolon();
                }
                Err(()) => {
                    self.advance();
                }
            }
        }
        self.expect(TokenType::RBrace)?;
        Ok(Statement::Block(BlockStatement {
            start_token: start,
            statements,
        }))
    }

    /// `_ = expression;` — evaluate `expression` for effect only.
    pub(crate) fn parse_discard_statement(&mut self) -> Result<Statement<'a>, ()> {
        let start = self.current; // '_'
        self.advance();
        self.expect(TokenType::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Discard(DiscardStatement {
            start_token: start,
            value,
        }))
    }

    pub(crate) fn parse_expression_statement(&mut self) -> Result<Statement<'a>, ()> {
        let start = self.current;
        let expression = self.parse_expression(Precedence::Lowest)?;
        Ok(Statement::Expression(ExpressionStatement {
            start_token: start,
            expression,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::*, Parser};

    #[test]
    fn forward_var_decl_missing_type_is_diagnosed() {
        let mut parser = Parser::new("var x;");
        assert!(parser.parse_decl_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn const_decl_missing_value_is_diagnosed() {
        let mut parser = Parser::new("const x: i32;");
        assert!(parser.parse_decl_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn walrus_decl_infers_type() {
        let mut parser = Parser::new("var x := 5;");
        let stmt = parser.parse_decl_statement().unwrap();
        match stmt {
            Statement::Decl(d) => {
                assert!(d.declared_type.is_none());
                assert!(d.value.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn duplicate_mutability_modifier_is_diagnosed() {
        let mut parser = Parser::new("var var x := 5;");
        assert!(parser.parse_decl_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn conflicting_mutability_modifiers_are_illegal() {
        let mut parser = Parser::new("var const x := 5;");
        assert!(parser.parse_decl_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn extern_decl_requires_type_and_forbids_value() {
        let mut parser = Parser::new("extern x: i32 = 5;");
        assert!(parser.parse_decl_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn relative_import_without_alias_is_diagnosed() {
        let mut parser = Parser::new("import \"./util\";");
        assert!(parser.parse_import_statement().is_err());
        assert_eq!(parser.diagnostics.len(), 1);
    }

    #[test]
    fn relative_import_with_alias_is_ok() {
        let mut parser = Parser::new("import \"./util\" as util;");
        let stmt = parser.parse_import_statement().unwrap();
        match stmt {
            Statement::Import(i) => assert!(i.alias.is_some()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn module_identifier_import_without_alias_is_ok() {
        let mut parser = Parser::new("import mymod;");
        let stmt = parser.parse_import_statement().unwrap();
        match stmt {
            Statement::Import(i) => assert!(i.alias.is_none()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn module_identifier_import_with_alias_is_ok() {
        let mut parser = Parser::new("import mymod as m;");
        let stmt = parser.parse_import_statement().unwrap();
        match stmt {
            Statement::Import(i) => assert!(i.alias.is_some()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn discard_statement_parses() {
        let mut parser = Parser::new("_ = compute();");
        let stmt = parser.parse_discard_statement().unwrap();
        assert!(matches!(stmt, Statement::Discard(_)));
    }
}

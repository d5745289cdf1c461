//! Whole-program parses exercising the invariants from the parser's
//! contract: determinism, the restricted-statement rule, and the arity
//! checks on `Array`, `For`, and declaration modifiers.

use crate::ast::*;
use crate::parse;

fn parse_ok(source: &str) -> Program<'_> {
    let (program, diagnostics) = parse(source);
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics for {source:?}, got {diagnostics:?}"
    );
    program
}

#[test]
fn empty_program_has_no_statements() {
    let program = parse_ok("");
    assert!(program.statements.is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let source = "var x: i32 = 1 + 2 * 3;\nfn f(a: i32) i32 { return a; }\n";
    let (first, first_diag) = parse(source);
    let (second, second_diag) = parse(source);
    assert_eq!(first, second);
    assert_eq!(first_diag, second_diag);
}

#[test]
fn a_malformed_statement_does_not_abort_the_whole_program() {
    // `)` can start nothing; the parser records one diagnostic for it,
    // advances past it, and still parses the well-formed statement after.
    let (program, diagnostics) = parse(") var x := 1;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.statements[0], Statement::Decl(_)));
}

#[test]
fn if_branch_rejects_a_decl_statement() {
    // `if` branches are restricted to Block/Jump/Expression; a bare decl in
    // branch position is `ILLEGAL_IF_BRANCH`, not a parse of the decl.
    let (_program, diagnostics) = parse("if true var x := 1;");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn if_branch_accepts_a_block() {
    let program = parse_ok("if true { return 1; }");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn if_branch_accepts_a_bare_expression() {
    let program = parse_ok("if true 1;");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn while_non_break_clause_rejects_a_decl_statement() {
    let (_program, diagnostics) = parse("while true : var x := 1; { break; }");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn array_literal_with_matching_explicit_size_is_ok() {
    let program = parse_ok("[3]{1, 2, 3};");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn array_literal_with_mismatched_explicit_size_is_diagnosed() {
    let (_program, diagnostics) = parse("[3]{1, 2};");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn array_literal_with_inferred_size_is_ok() {
    let program = parse_ok("[_]{1, 2, 3};");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn empty_array_literal_is_diagnosed() {
    let (_program, diagnostics) = parse("[_]{};");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn for_loop_with_matching_capture_and_iterable_arity_is_ok() {
    let program = parse_ok("for a, b in xs, ys { break; }");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn for_loop_with_mismatched_arity_is_diagnosed() {
    let (_program, diagnostics) = parse("for a, b in xs { break; }");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn for_loop_with_all_discard_captures_is_diagnosed() {
    let (_program, diagnostics) = parse("for _, _ in xs, ys { break; }");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn decl_modifier_duplicate_is_diagnosed() {
    let (_program, diagnostics) = parse("var var x := 1;");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn decl_modifier_conflict_is_diagnosed() {
    let (_program, diagnostics) = parse("comptime extern x: i32;");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn decl_with_no_conflicting_modifiers_is_ok() {
    let program = parse_ok("private var x: i32 = 1;");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn struct_and_enum_expressions_parse() {
    let program = parse_ok(
        "var Point := struct { x: i32, y: i32 };\nvar Color := enum { Red, Green, Blue, };\n",
    );
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn match_catch_all_must_be_last() {
    let (_program, diagnostics) = parse("match x { _ => 1, 2 => 2, };");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn match_with_trailing_catch_all_is_ok() {
    let program = parse_ok("match x { 1 => 1, _ => 2, };");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn function_definition_with_body_parses() {
    let program = parse_ok("fn add(a: i32, b: i32) i32 { return a + b; }");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn token_locations_are_reported_for_each_diagnostic() {
    let (_program, diagnostics) = parse("var x;\nvar y;\n");
    assert_eq!(diagnostics.len(), 2);
    let first = diagnostics[0].location.expect("location recorded");
    let second = diagnostics[1].location.expect("location recorded");
    assert!(second.line > first.line);
}

#[test]
fn builtin_call_expression_parses() {
    let program = parse_ok("@typeOf(x);");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn primitive_keyword_in_expression_position_is_an_identifier() {
    let program = parse_ok("int;");
    match &program.statements[0] {
        Statement::Expression(s) => assert!(matches!(s.expression, Expression::Identifier(_))),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn packed_struct_expression_parses() {
    let program = parse_ok("var P := packed struct { x: int };\n");
    match &program.statements[0] {
        Statement::Decl(d) => match d.value.as_ref().unwrap() {
            Expression::Struct(s) => assert!(s.packed),
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn enum_with_underlying_type_and_default_parses() {
    let program = parse_ok("var Color := enum: int { Red = 0, Green, };\n");
    match &program.statements[0] {
        Statement::Decl(d) => match d.value.as_ref().unwrap() {
            Expression::Enum(e) => {
                assert!(e.underlying.is_some());
                assert!(e.variants[0].default.is_some());
                assert!(e.variants[1].default.is_none());
            }
            other => panic!("unexpected {other:?}"),
        },
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn module_identifier_import_parses() {
    let program = parse_ok("import mymod;");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn aliased_user_path_import_requires_as_keyword() {
    let (_program, diagnostics) = parse("import \"./util\" util;");
    assert!(!diagnostics.is_empty());
}

#[test]
fn aliased_user_path_import_with_as_keyword_is_ok() {
    let program = parse_ok("import \"./util\" as util;");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn base_width_integer_overflow_is_diagnosed() {
    // Fits in i64 but overflows the 32-bit range a base-width signed literal
    // is held to.
    let (_program, diagnostics) = parse("2147483648;");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn long_width_integer_does_not_overflow_at_base_width_bound() {
    let program = parse_ok("2147483648l;");
    assert_eq!(program.statements.len(), 1);
}

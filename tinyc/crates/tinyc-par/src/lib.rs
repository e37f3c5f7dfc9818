//! Recursive-descent parser: builds an AST and a per-function locals
//! table directly from a token sequence, with no separate semantic-
//! analysis pass (see spec.md's non-goals).

mod ast;
mod error;
mod expr;
mod locals;
mod parser;
mod stmt;

pub use ast::{Expr, FuncDef, Program, Stmt};
pub use error::ParseError;
pub use locals::Locals;
pub use parser::Parser;

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_lex::tokenize;

    fn parse(source: &str) -> Program {
        Parser::new(tokenize(source).unwrap()).parse().unwrap()
    }

    #[test]
    fn a_function_with_no_functions_is_a_fatal_error() {
        let err = Parser::new(tokenize("").unwrap()).parse().unwrap_err();
        assert!(matches!(err, ParseError::EmptyProgram));
    }

    #[test]
    fn main_is_required_to_be_found_by_name() {
        let program = parse("main() { return 0; }");
        assert!(program.find_main().is_some());
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let program = parse("main() { return 1 + 2 * 3; }");
        let main = &program.funcs[0];
        match &main.body[0] {
            Stmt::Return(Expr::Add(lhs, rhs)) => {
                assert!(matches!(**lhs, Expr::Num(1)));
                assert!(matches!(**rhs, Expr::Mul(_, _)));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn greater_than_is_normalized_to_a_swapped_less_than() {
        let program = parse("main() { return 1 > 2; }");
        match &program.funcs[0].body[0] {
            Stmt::Return(Expr::Lt(lhs, rhs)) => {
                assert!(matches!(**lhs, Expr::Num(2)));
                assert!(matches!(**rhs, Expr::Num(1)));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn parameters_occupy_the_first_locals_slots() {
        let program = parse("add(a, b) { return a + b; }");
        let f = &program.funcs[0];
        assert_eq!(f.params, vec![8, 16]);
        assert_eq!(f.locals.frame_size(), 16);
    }

    #[test]
    fn repeated_local_names_share_one_offset() {
        let program = parse("main() { a = 1; a = a + 1; return a; }");
        assert_eq!(program.funcs[0].locals.frame_size(), 8);
    }

    #[test]
    fn nested_control_flow_gets_lower_label_ids_than_its_enclosing_statement() {
        let program = parse("main() { if (1) { while (1) { break; } } return 0; }");
        match &program.funcs[0].body[0] {
            Stmt::If { label_id: outer, then_branch, .. } => match &**then_branch {
                Stmt::Block(stmts) => match &stmts[0] {
                    Stmt::While { label_id: inner, .. } => assert!(inner < outer),
                    other => panic!("expected While, got {other:?}"),
                },
                other => panic!("expected Block, got {other:?}"),
            },
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn more_than_six_parameters_is_a_fatal_error() {
        let err = Parser::new(tokenize("f(a,b,c,d,e,f,g) { return 0; }").unwrap())
            .parse()
            .unwrap_err();
        assert!(matches!(err, ParseError::TooManyParams { .. }));
    }

    #[test]
    fn more_than_six_call_arguments_is_a_fatal_error() {
        let err = Parser::new(tokenize("main() { return f(1,2,3,4,5,6,7); }").unwrap())
            .parse()
            .unwrap_err();
        assert!(matches!(err, ParseError::TooManyArgs { .. }));
    }
}

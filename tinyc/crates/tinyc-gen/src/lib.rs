//! Stack-machine code generator: lowers a `tinyc_par::Program` directly to
//! x86-64 Intel-syntax assembly text. No IR, no register allocation, no
//! optimization passes (see spec.md's non-goals).

mod abi;
mod codegen;
mod error;

pub use codegen::generate;
pub use error::CodegenError;

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_lex::tokenize;
    use tinyc_par::Parser;

    fn compile(source: &str) -> String {
        let program = Parser::new(tokenize(source).unwrap()).parse().unwrap();
        generate(&program).unwrap()
    }

    #[test]
    fn emits_the_intel_syntax_directive_first() {
        let asm = compile("main() { return 0; }");
        assert!(asm.starts_with(".intel_syntax noprefix\n"));
    }

    #[test]
    fn main_gets_a_global_label_and_a_prologue() {
        let asm = compile("main() { return 42; }");
        assert!(asm.contains(".global main"));
        assert!(asm.contains("main:\n  push rbp\n  mov rbp, rsp\n"));
        assert!(asm.contains("  ret\n"));
    }

    #[test]
    fn frame_size_matches_the_distinct_local_count() {
        let asm = compile("main() { a = 1; b = 2; return a + b; }");
        assert!(asm.contains("  sub rsp, 16\n"));
    }

    #[test]
    fn no_locals_means_no_stack_allocation() {
        let asm = compile("main() { return 1; }");
        assert!(!asm.contains("sub rsp"));
    }

    #[test]
    fn parameters_are_spilled_from_argument_registers() {
        let asm = compile("add(a, b) { return a + b; }");
        assert!(asm.contains("  mov [rbp-8], rdi"));
        assert!(asm.contains("  mov [rbp-16], rsi"));
    }

    #[test]
    fn division_uses_the_two_operand_idiv_quirk() {
        let asm = compile("main() { return 6 / 2; }");
        assert!(asm.contains("  cqo\n  idiv rax, rdi\n"));
    }

    #[test]
    fn calls_pop_arguments_into_registers_in_order() {
        let asm = compile("main() { return add(1, 2); }");
        assert!(asm.contains("  pop rdi\n  push 2\n  pop rsi\n  call add\n"));
    }

    #[test]
    fn if_without_else_jumps_straight_to_end() {
        let asm = compile("main() { if (1) return 1; return 0; }");
        assert!(asm.contains("  je .Lend0\n"));
        assert!(!asm.contains(".Lelse0"));
    }

    #[test]
    fn if_with_else_emits_both_branches_and_a_skip_jump() {
        let asm = compile("main() { if (1) return 1; else return 0; }");
        assert!(asm.contains("  je .Lelse0\n"));
        assert!(asm.contains("  jmp .Lend0\n"));
        assert!(asm.contains(".Lelse0:\n"));
        assert!(asm.contains(".Lend0:\n"));
    }

    #[test]
    fn while_loop_jumps_back_to_its_begin_label() {
        let asm = compile("main() { while (1) { break; } return 0; }");
        assert!(asm.contains(".Lbegin0:\n"));
        assert!(asm.contains("  jmp .Lend0\n"));
        assert!(asm.contains("  jmp .Lbegin0\n"));
    }

    #[test]
    fn break_outside_any_loop_is_a_codegen_error() {
        let program = Parser::new(tokenize("main() { break; }").unwrap())
            .parse()
            .unwrap();
        let err = generate(&program).unwrap_err();
        assert!(matches!(err, CodegenError::BreakOutsideLoop));
    }

    #[test]
    fn assigning_to_a_non_variable_is_a_codegen_error() {
        let program = Parser::new(tokenize("main() { 1 = 2; }").unwrap())
            .parse()
            .unwrap();
        let err = generate(&program).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidLvalue));
    }

    #[test]
    fn block_discards_expression_statement_results_but_not_the_final_value() {
        let asm = compile("main() { a = 1; return a; }");
        // The `a = 1;` expression statement is followed by a discard pop,
        // the `return` is not.
        let discard_count = asm.matches("  pop rax\n").count();
        // one discard for `a = 1;`, one more for `return a`'s value pop
        assert_eq!(discard_count, 2);
    }
}

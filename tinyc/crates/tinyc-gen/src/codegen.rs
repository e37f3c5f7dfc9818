use crate::abi::ARG_REGS;
use crate::error::CodegenError;
use tinyc_par::{Expr, FuncDef, Program, Stmt};
use tinyc_util::Symbol;

/// Lowers a parsed program to x86-64 Intel-syntax assembly text. Every
/// expression pushes exactly one word onto the runtime stack; every
/// statement that isn't itself an expression leaves the stack as it found
/// it. This is the one code path: there is no separate "legacy" single-
/// function mode (see spec.md's design notes).
pub struct CodeGen<'a> {
    out: String,
    program: &'a Program,
}

pub fn generate(program: &Program) -> Result<String, CodegenError> {
    let mut gen = CodeGen {
        out: String::new(),
        program,
    };
    gen.emit(".intel_syntax noprefix");
    for func in &program.funcs {
        gen.gen_func(func)?;
    }
    Ok(gen.out)
}

impl<'a> CodeGen<'a> {
    fn emit(&mut self, line: impl AsRef<str>) {
        self.out.push_str(line.as_ref());
        self.out.push('\n');
    }

    fn resolve(&self, sym: Symbol) -> &str {
        self.program.interner.resolve(sym)
    }

    fn gen_func(&mut self, func: &FuncDef) -> Result<(), CodegenError> {
        let name = self.resolve(func.name).to_string();
        let frame_size = func.locals.frame_size();
        tracing::debug!(name = %name, frame_size, "lowering function");

        self.emit(format!(".global {name}"));
        self.emit(format!("{name}:"));
        self.emit("  push rbp");
        self.emit("  mov rbp, rsp");
        if frame_size > 0 {
            self.emit(format!("  sub rsp, {frame_size}"));
        }

        for (i, offset) in func.params.iter().enumerate() {
            self.emit(format!("  mov [rbp-{offset}], {}", ARG_REGS[i]));
        }

        self.gen_block(&func.body, None)?;
        self.emit_epilogue();
        Ok(())
    }

    fn emit_epilogue(&mut self) {
        self.emit("  mov rsp, rbp");
        self.emit("  pop rbp");
        self.emit("  ret");
    }

    /// `break_label` is the label id of the innermost enclosing loop, or
    /// `None` outside of one. `If` passes its own `break_label` through
    /// unchanged to its branches; `While`/`For` replace it with their own
    /// label id for their body and the previous value is naturally
    /// restored once that call returns, since it's passed by value rather
    /// than tracked in mutable state.
    fn gen_stmt(&mut self, stmt: &Stmt, break_label: Option<u32>) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Return(e) => {
                self.gen_expr(e)?;
                self.emit("  pop rax");
                self.emit_epilogue();
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
                label_id,
            } => {
                self.gen_expr(cond)?;
                self.emit("  pop rax");
                self.emit("  cmp rax, 0");
                if let Some(else_branch) = else_branch {
                    self.emit(format!("  je .Lelse{label_id}"));
                    self.gen_stmt(then_branch, break_label)?;
                    self.emit(format!("  jmp .Lend{label_id}"));
                    self.emit(format!(".Lelse{label_id}:"));
                    self.gen_stmt(else_branch, break_label)?;
                    self.emit(format!(".Lend{label_id}:"));
                } else {
                    self.emit(format!("  je .Lend{label_id}"));
                    self.gen_stmt(then_branch, break_label)?;
                    self.emit(format!(".Lend{label_id}:"));
                }
            }
            Stmt::While {
                cond,
                body,
                label_id,
            } => {
                self.emit(format!(".Lbegin{label_id}:"));
                self.gen_expr(cond)?;
                self.emit("  pop rax");
                self.emit("  cmp rax, 0");
                self.emit(format!("  je .Lend{label_id}"));
                self.gen_stmt(body, Some(*label_id))?;
                self.emit(format!("  jmp .Lbegin{label_id}"));
                self.emit(format!(".Lend{label_id}:"));
            }
            Stmt::For {
                init,
                cond,
                step,
                body,
                label_id,
            } => {
                if let Some(init) = init {
                    self.gen_expr(init)?;
                    self.emit("  pop rax");
                }
                self.emit(format!(".Lbegin{label_id}:"));
                if let Some(cond) = cond {
                    self.gen_expr(cond)?;
                    self.emit("  pop rax");
                    self.emit("  cmp rax, 0");
                    self.emit(format!("  je .Lend{label_id}"));
                }
                self.gen_stmt(body, Some(*label_id))?;
                if let Some(step) = step {
                    self.gen_expr(step)?;
                    self.emit("  pop rax");
                }
                self.emit(format!("  jmp .Lbegin{label_id}"));
                self.emit(format!(".Lend{label_id}:"));
            }
            Stmt::Break(_) => match break_label {
                Some(label_id) => self.emit(format!("  jmp .Lend{label_id}")),
                None => return Err(CodegenError::BreakOutsideLoop),
            },
            Stmt::Block(stmts) => self.gen_block(stmts, break_label)?,
            Stmt::Expr(e) => self.gen_expr(e)?,
        }
        Ok(())
    }

    fn gen_block(&mut self, stmts: &[Stmt], break_label: Option<u32>) -> Result<(), CodegenError> {
        for stmt in stmts {
            self.gen_stmt(stmt, break_label)?;
            if matches!(stmt, Stmt::Expr(_)) {
                self.emit("  pop rax");
            }
        }
        Ok(())
    }

    fn gen_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Num(n) => self.emit(format!("  push {n}")),
            Expr::LVar { .. } => {
                self.gen_lval_address(expr)?;
                self.emit("  pop rax");
                self.emit("  mov rax, [rax]");
                self.emit("  push rax");
            }
            Expr::Assign(lhs, rhs) => {
                self.gen_lval_address(lhs)?;
                self.gen_expr(rhs)?;
                self.emit("  pop rdi");
                self.emit("  pop rax");
                self.emit("  mov [rax], rdi");
                self.emit("  push rdi");
            }
            Expr::Add(l, r) => self.gen_binop(l, r, "add rax, rdi")?,
            Expr::Sub(l, r) => self.gen_binop(l, r, "sub rax, rdi")?,
            Expr::Mul(l, r) => self.gen_binop(l, r, "imul rax, rdi")?,
            Expr::Div(l, r) => {
                self.gen_expr(l)?;
                self.gen_expr(r)?;
                self.emit("  pop rdi");
                self.emit("  pop rax");
                self.emit("  cqo");
                // Two-operand `idiv` is not valid x86-64 syntax; preserved
                // from the original compiler rather than silently fixed
                // (see spec.md's design notes on known issues).
                self.emit("  idiv rax, rdi");
                self.emit("  push rax");
            }
            Expr::Eq(l, r) => self.gen_compare(l, r, "sete")?,
            Expr::Ne(l, r) => self.gen_compare(l, r, "setne")?,
            Expr::Lt(l, r) => self.gen_compare(l, r, "setl")?,
            Expr::Le(l, r) => self.gen_compare(l, r, "setle")?,
            Expr::Call { name, args, .. } => self.gen_call(*name, args)?,
        }
        Ok(())
    }

    fn gen_lval_address(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::LVar { offset } => {
                self.emit("  mov rax, rbp");
                self.emit(format!("  sub rax, {offset}"));
                self.emit("  push rax");
                Ok(())
            }
            _ => Err(CodegenError::InvalidLvalue),
        }
    }

    fn gen_binop(&mut self, lhs: &Expr, rhs: &Expr, op: &str) -> Result<(), CodegenError> {
        self.gen_expr(lhs)?;
        self.gen_expr(rhs)?;
        self.emit("  pop rdi");
        self.emit("  pop rax");
        self.emit(format!("  {op}"));
        self.emit("  push rax");
        Ok(())
    }

    fn gen_compare(&mut self, lhs: &Expr, rhs: &Expr, setcc: &str) -> Result<(), CodegenError> {
        self.gen_expr(lhs)?;
        self.gen_expr(rhs)?;
        self.emit("  pop rdi");
        self.emit("  pop rax");
        self.emit("  cmp rax, rdi");
        self.emit(format!("  {setcc} al"));
        self.emit("  movzb rax, al");
        self.emit("  push rax");
        Ok(())
    }

    fn gen_call(&mut self, name: Symbol, args: &[Expr]) -> Result<(), CodegenError> {
        // No call-site stack alignment is performed before `call`, matching
        // the original compiler; see spec.md's design notes.
        for (i, arg) in args.iter().enumerate() {
            self.gen_expr(arg)?;
            self.emit(format!("  pop {}", ARG_REGS[i]));
        }
        let target = self.resolve(name).to_string();
        self.emit(format!("  call {target}"));
        self.emit("  push rax");
        Ok(())
    }
}

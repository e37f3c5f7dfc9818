use crate::locals::Locals;
use tinyc_util::{Interner, Span, Symbol};

#[derive(Debug, Clone)]
pub enum Expr {
    Num(i64),
    LVar {
        offset: u32,
    },
    Assign(Box<Expr>, Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    Lt(Box<Expr>, Box<Expr>),
    Le(Box<Expr>, Box<Expr>),
    Call {
        name: Symbol,
        args: Vec<Expr>,
        span: Span,
    },
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Return(Expr),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        label_id: u32,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        label_id: u32,
    },
    For {
        init: Option<Expr>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Box<Stmt>,
        label_id: u32,
    },
    Break(Span),
    Block(Vec<Stmt>),
    Expr(Expr),
}

/// One top-level function definition: its name, the stack offsets its
/// parameters were spilled to (in declaration order, at most six), its
/// body statements, and the locals table built while parsing it.
#[derive(Debug, Clone)]
pub struct FuncDef {
    pub name: Symbol,
    pub func_id: usize,
    pub params: Vec<u32>,
    pub body: Vec<Stmt>,
    pub locals: Locals,
}

#[derive(Debug)]
pub struct Program {
    pub funcs: Vec<FuncDef>,
    pub interner: Interner,
}

impl Program {
    pub fn find_main(&self) -> Option<&FuncDef> {
        self.funcs
            .iter()
            .find(|f| self.interner.resolve(f.name) == "main")
    }
}

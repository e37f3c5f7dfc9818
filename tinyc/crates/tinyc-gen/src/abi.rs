//! The slice of the System V AMD64 calling convention this generator
//! needs: integer arguments one through six arrive in `rdi`, `rsi`,
//! `rdx`, `rcx`, `r8`, `r9`, in that order, and the return value comes
//! back in `rax`. Floating-point arguments, the stack-passed tail beyond
//! six arguments, and the red zone are out of scope (see spec.md's
//! non-goals).

pub const ARG_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

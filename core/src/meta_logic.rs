//! Meta-logic backbone: lambda reduction, deduction and proof checking.
//!
//! Every operation is a placeholder. Reduction and deduction are the identity,
//! and every statement is accepted as proven.

/// Stateless reasoning layer shared by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MetaLogic;

impl MetaLogic {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reduce a lambda expression. Returns `expr` unchanged.
    #[must_use]
    pub fn lambda_reduce<T>(&self, expr: T) -> T {
        expr
    }

    /// Apply one deductive step to `premise`. Returns it unchanged.
    #[must_use]
    pub fn deduce<T>(&self, premise: T) -> T {
        premise
    }

    /// Check a proof of `statement`. Always succeeds.
    #[must_use]
    pub fn prove<T: ?Sized>(&self, _statement: &T) -> bool {
        true
    }
}

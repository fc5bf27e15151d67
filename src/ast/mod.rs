mod expr;
mod substitute;

pub use expr::{BinKind, Expr, ExprKind, Formula, QuantKind};
pub use substitute::substitute;

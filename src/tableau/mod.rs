mod tableau;

pub use tableau::{solve, SolveResult};

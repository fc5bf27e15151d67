mod runner;

pub use runner::{run_file, solve_line};

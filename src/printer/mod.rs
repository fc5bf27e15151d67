mod printer;

pub use printer::print_formula;

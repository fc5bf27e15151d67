mod parser;

pub use parser::{Fragment, ParseOutcome, Parser};

mod entry;
mod error;
mod indent;
mod parser;
mod scanner;

pub use entry::{Entry, Mode};
pub use error::SyntaxError;
pub use parser::{check_layout, parse};

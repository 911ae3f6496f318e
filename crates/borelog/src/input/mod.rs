//! Input handling: section scanning, header grammar, parse orchestration.

mod grammar;
mod parser;
mod scanner;
mod source;

pub use grammar::{GrammarVersion, HeaderGrammar};
pub use parser::{LasParser, ParserConfig};
pub use scanner::Scanner;
pub use source::SourceMetadata;

pub mod binding;
pub mod config;
pub mod definition;
pub mod document;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

pub use binding::*;
pub use config::*;
pub use definition::*;
pub use document::*;
pub use error::{ConverterError, ErrorKind};
pub use parser::parse_type_declaration;
pub use types::*;

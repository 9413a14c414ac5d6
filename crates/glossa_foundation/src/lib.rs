//! Core types for the glossa multilingual command parser.
//!
//! This crate provides:
//! - [`Token`] / [`TokenStream`] - Lexical units produced by tokenization
//! - [`SemanticRole`] / [`RoleMarker`] - Argument slots and their surface markers
//! - [`SemanticValue`] - The closed union of values a role can bind
//! - [`CommandNode`] - The canonical, language-independent command AST
//! - [`CommandShape`] - Role signatures for registered commands
//! - [`Error`] - Rich error types with constructor helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod command;
pub mod error;
pub mod role;
pub mod token;
pub mod value;

pub use ast::{
    CONDITIONAL_COMMAND, CommandNode, EVENT_COMMAND, LOOP_COMMAND, SEQUENCE_COMMAND,
};
pub use command::{CommandShape, builtin_shapes};
pub use error::{Error, ErrorKind, Result};
pub use role::{MarkerPosition, RoleMarker, SemanticRole};
pub use token::{Token, TokenKind, TokenStream};
pub use value::{SemanticValue, ValueKind};

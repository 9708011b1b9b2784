//! Lexical analyzer for a small `begin` ... `end` block language.
//!
//! [`Lexer`] turns source text into [`LexItem`]s one call at a time and checks
//! each token against the one before it, so structural mistakes surface as
//! `Err` items during scanning.

pub mod config;
pub mod error;
pub mod lexer;
pub mod patterns;
pub mod report;
pub mod source;
pub mod token;

pub use lexer::Lexer;
pub use source::CharSource;
pub use token::{Kind, LexItem};

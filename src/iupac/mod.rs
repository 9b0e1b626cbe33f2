//! Compiler from systematic hydrocarbon names to molecular graphs.
//!
//! A name goes through four stages, each of which fails fast:
//!
//! 1. [`scan`] splits it into [`Token`]s,
//! 2. [`parse`] builds a [`Hydrocarbon`] tree,
//! 3. [`analyze`] checks valence and numbering rules,
//! 4. [`generate`] builds the hydrogen-saturated [`Compound`].
//!
//! [`convert`] runs all four.

mod analyzer;
pub mod ast;
mod builder;
pub mod error;
pub mod keywords;
mod parser;
mod tokenizer;

use tracing::{debug, debug_span};

use crate::compound::Compound;
pub use analyzer::analyze;
pub use ast::Hydrocarbon;
pub use builder::generate;
pub use error::{LexicalError, PipelineError, SemanticError, Stage, SyntaxError};
pub use parser::{parse, Parser, Residual};
pub use tokenizer::{scan, Token, TokenKind};

/// Converts a hydrocarbon name such as `"hepta-1,5-dien-3-yne"` into its
/// molecular graph.
///
/// # Examples
///
/// ```
/// let ethyne = hydrocrab::convert("ethyne").unwrap();
/// assert_eq!(ethyne.carbon_count(), 2);
/// assert_eq!(ethyne.hydrogen_count(), 2);
///
/// let err = hydrocrab::convert("cyclomethane").unwrap_err();
/// assert_eq!(err.stage(), hydrocrab::Stage::Semantic);
/// ```
pub fn convert(name: &str) -> Result<Compound, PipelineError> {
    let _span = debug_span!("convert", name).entered();
    run(name).inspect_err(|err| {
        debug!(stage = %err.stage(), message = %err.message(), "name rejected");
    })
}

fn run(name: &str) -> Result<Compound, PipelineError> {
    let tokens = scan(name)?;
    debug!(tokens = tokens.len(), "scanned");

    let hydrocarbon = parse(&tokens)?;
    debug!(
        carbons = hydrocarbon.carbon_count(),
        cyclic = hydrocarbon.is_cyclic,
        "parsed"
    );

    analyze(&hydrocarbon)?;
    debug!("analyzed");

    let compound = generate(&hydrocarbon)?;
    debug!(
        atoms = compound.atom_count(),
        bonds = compound.bond_count(),
        "generated"
    );
    Ok(compound)
}

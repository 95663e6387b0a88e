//! Grammar productions for SmithyQL.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Every production sets the lexing context it needs before looking at a token.

mod identifiers;
mod items;
mod values;

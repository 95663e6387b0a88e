mod lexical_tests;
mod structure_tests;
mod unclosed_tests;
mod unexpected_tests;

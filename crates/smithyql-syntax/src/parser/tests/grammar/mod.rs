mod let_tests;
mod statements_tests;
mod trivia_tests;
mod use_clause_tests;
mod values_tests;

mod browser_tests;
mod formatting_tests;
mod query_tests;
mod store_tests;
mod token_tests;

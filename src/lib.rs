pub mod cli;
pub mod error;
pub mod fetcher;
pub mod htmlscraper;
pub mod printer;
pub mod query;

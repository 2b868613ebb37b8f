pub mod candidates;
pub mod classify;
pub mod diversify;
pub mod filters;
pub mod lexicon;
pub mod preprocess;
pub mod scoring;
pub mod stemmer;
pub mod tokenizer;
pub mod url_phrases;

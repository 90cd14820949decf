mod matching;
mod utils;

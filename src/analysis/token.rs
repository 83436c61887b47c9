/// Raw whitespace-delimited token as produced by a tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,      // The token text, untouched
    pub position: u32,     // Position in document
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token { text, position }
    }
}

//! Tokenizer for generated ad copy.
//!
//! Text is split into paragraphs on line breaks, and each paragraph into
//! words on single spaces. Words starting with [`TAG_MARKER`] become
//! [`Token::Tag`] and are displayed as badges; everything else is
//! [`Token::Word`], displayed followed by a space.

use crate::config::TAG_MARKER;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Plain word. May be empty when the text holds consecutive spaces.
    Word(String),
    /// Hashtag, marker included.
    Tag(String),
}

impl Token {
    fn classify(word: &str) -> Self {
        if word.starts_with(TAG_MARKER) {
            Token::Tag(word.to_string())
        } else {
            Token::Word(word.to_string())
        }
    }
}

/// Tokens of a single paragraph.
pub fn tokenize_paragraph(paragraph: &str) -> Vec<Token> {
    paragraph.split(' ').map(Token::classify).collect()
}

/// Paragraphs of `text`, each already tokenized.
pub fn paragraphs(text: &str) -> Vec<Vec<Token>> {
    text.split('\n')
        .map(|line| tokenize_paragraph(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

//! Annotated tokens.

use serde::Serialize;

/// A single annotated unit of a sentence.
///
/// A token's identity is its index in the owning [`Sentence`](crate::Sentence);
/// dependency edges and coreference mentions refer to it by that index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    word: String,
    pos: String,
    ner: String,
    lemma: String,
}

impl Token {
    pub fn new(
        word: impl Into<String>,
        pos: impl Into<String>,
        ner: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            ner: ner.into(),
            lemma: lemma.into(),
        }
    }

    /// Surface form as it appeared in the text.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Part-of-speech tag.
    pub fn pos(&self) -> &str {
        &self.pos
    }

    /// Named-entity tag (`O` when the token is outside any entity).
    pub fn ner(&self) -> &str {
        &self.ner
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.word)
    }
}

/// Join the words of a token sequence with single spaces.
pub fn join_words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::word)
        .collect::<Vec<_>>()
        .join(" ")
}

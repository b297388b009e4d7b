//! Coreference mentions and chains.
//!
//! A chain groups every mention of one entity. Mentions keep their sentence
//! number and token bounds (0-based) alongside the tokens those bounds
//! resolve to, so a consumer never has to index back into the document.

use serde::Serialize;

use crate::annotation::AnnotatedMention;
use crate::span;
use crate::token::{join_words, Token};

/// A contiguous token span referring to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorefMention {
    sent_num: i64,
    start_index: i64,
    end_index: i64,
    head_index: i64,
    tokens: Vec<Token>,
    head_token: Option<Token>,
}

impl CorefMention {
    /// Convert an annotator mention to 0-based indices.
    ///
    /// Reversed bounds are swapped. Tokens are resolved separately with
    /// [`CorefMention::resolve_tokens`].
    pub(crate) fn from_annotated(mention: &AnnotatedMention) -> Self {
        let (start_index, end_index) = span::normalize_bounds(
            span::to_zero_based(mention.start_index),
            span::to_zero_based(mention.end_index),
        );

        Self {
            sent_num: span::to_zero_based(mention.sent_num),
            start_index,
            end_index,
            head_index: span::to_zero_based(mention.head_index),
            tokens: Vec::new(),
            head_token: None,
        }
    }

    /// Fill `tokens` with the `[start, end)` slice of `sentence_tokens`.
    pub(crate) fn resolve_tokens(&mut self, sentence_tokens: &[Token]) {
        self.tokens = span::slice(sentence_tokens, self.start_index, self.end_index).to_vec();
    }

    /// Resolve the head token. Returns `false` when the head index is out of
    /// range, leaving `head_token` unset.
    pub(crate) fn resolve_head(&mut self, sentence_tokens: &[Token]) -> bool {
        self.head_token = span::checked_index(self.head_index, sentence_tokens.len())
            .map(|idx| sentence_tokens[idx].clone());
        self.head_token.is_some()
    }

    /// Sentence containing the mention (0-based).
    pub fn sent_num(&self) -> i64 {
        self.sent_num
    }

    pub fn start_index(&self) -> i64 {
        self.start_index
    }

    /// Exclusive end of the span.
    pub fn end_index(&self) -> i64 {
        self.end_index
    }

    pub fn head_index(&self) -> i64 {
        self.head_index
    }

    /// The tokens covered by the span; empty when the span was out of range.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Head token. Only resolved for a chain's representative mention.
    pub fn head_token(&self) -> Option<&Token> {
        self.head_token.as_ref()
    }

    /// The mention's words joined by spaces.
    pub fn compact(&self) -> String {
        join_words(&self.tokens)
    }
}

/// Format: `words [@sent:start-end]`.
impl std::fmt::Display for CorefMention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [@{}:{}-{}]",
            self.compact(),
            self.sent_num,
            self.start_index,
            self.end_index
        )
    }
}

/// All mentions of one entity, anchored on a representative mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorefChain {
    chain_id: u32,
    representative_mention: CorefMention,
    mentions: Vec<CorefMention>,
    is_multi_sentence: bool,
}

impl CorefChain {
    pub(crate) fn new(chain_id: u32, representative_mention: CorefMention) -> Self {
        Self {
            chain_id,
            representative_mention,
            mentions: Vec::new(),
            is_multi_sentence: false,
        }
    }

    /// Append a mention, flagging the chain as multi-sentence once two
    /// mentions disagree on their sentence.
    pub(crate) fn add_mention(&mut self, mention: CorefMention) {
        if !self.is_multi_sentence {
            self.is_multi_sentence = self
                .mentions
                .iter()
                .any(|m| m.sent_num != mention.sent_num);
        }
        self.mentions.push(mention);
    }

    /// The annotator's identifier for this chain.
    pub fn chain_id(&self) -> u32 {
        self.chain_id
    }

    pub fn representative_mention(&self) -> &CorefMention {
        &self.representative_mention
    }

    /// Every mention in textual order, including the representative when
    /// the annotator listed it.
    pub fn mentions(&self) -> &[CorefMention] {
        &self.mentions
    }

    /// True when the mentions span more than one sentence.
    pub fn is_multi_sentence(&self) -> bool {
        self.is_multi_sentence
    }
}

/// Format: `representative => mention <=> mention ...`.
impl std::fmt::Display for CorefChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} =>", self.representative_mention)?;
        for (idx, mention) in self.mentions.iter().enumerate() {
            if idx > 0 {
                f.write_str(" <=>")?;
            }
            write!(f, " {}", mention)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mention_in(sent_num: i64) -> CorefMention {
        CorefMention::from_annotated(&AnnotatedMention::new(sent_num + 1, 1, 2, 1))
    }

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("the", "DT", "O", "the"),
            Token::new("old", "JJ", "O", "old"),
            Token::new("man", "NN", "O", "man"),
            Token::new("left", "VBD", "O", "leave"),
        ]
    }

    #[test]
    fn test_from_annotated_converts_every_index() {
        let mention = CorefMention::from_annotated(&AnnotatedMention::new(2, 1, 4, 3));
        assert_eq!(mention.sent_num(), 1);
        assert_eq!(mention.start_index(), 0);
        assert_eq!(mention.end_index(), 3);
        assert_eq!(mention.head_index(), 2);
        assert!(mention.tokens().is_empty());
        assert!(mention.head_token().is_none());
    }

    #[test]
    fn test_from_annotated_swaps_reversed_bounds() {
        let mention = CorefMention::from_annotated(&AnnotatedMention::new(1, 4, 1, 3));
        assert_eq!(mention.start_index(), 0);
        assert_eq!(mention.end_index(), 3);
    }

    #[test]
    fn test_resolve_tokens_and_head() {
        let tokens = tokens();
        let mut mention = CorefMention::from_annotated(&AnnotatedMention::new(1, 1, 4, 3));
        mention.resolve_tokens(&tokens);
        assert!(mention.resolve_head(&tokens));

        assert_eq!(mention.compact(), "the old man");
        assert_eq!(mention.head_token().map(Token::word), Some("man"));
        assert_eq!(mention.to_string(), "the old man [@0:0-3]");
    }

    #[test]
    fn test_resolve_out_of_range_is_empty() {
        let tokens = tokens();
        let mut mention = CorefMention::from_annotated(&AnnotatedMention::new(1, 3, 9, 12));
        mention.resolve_tokens(&tokens);

        assert!(mention.tokens().is_empty());
        assert!(!mention.resolve_head(&tokens));
        assert!(mention.head_token().is_none());
    }

    #[test]
    fn test_single_mention_is_not_multi_sentence() {
        let mut chain = CorefChain::new(1, mention_in(0));
        chain.add_mention(mention_in(0));
        assert!(!chain.is_multi_sentence());
    }

    #[test]
    fn test_same_sentence_mentions_are_not_multi_sentence() {
        let mut chain = CorefChain::new(1, mention_in(2));
        chain.add_mention(mention_in(2));
        chain.add_mention(mention_in(2));
        assert!(!chain.is_multi_sentence());
        assert_eq!(chain.mentions().len(), 2);
    }

    #[test]
    fn test_cross_sentence_mentions_are_multi_sentence() {
        let mut chain = CorefChain::new(1, mention_in(0));
        chain.add_mention(mention_in(0));
        chain.add_mention(mention_in(1));
        assert!(chain.is_multi_sentence());

        // Stays set once observed.
        chain.add_mention(mention_in(1));
        assert!(chain.is_multi_sentence());
    }

    #[test]
    fn test_empty_chain_display() {
        let chain = CorefChain::new(3, mention_in(0));
        assert_eq!(chain.to_string(), " [@0:0-1] =>");
    }

    proptest! {
        #[test]
        fn multi_sentence_iff_distinct_sentences(sents in proptest::collection::vec(0i64..4, 0..8)) {
            let mut chain = CorefChain::new(1, mention_in(0));
            for &sent in &sents {
                chain.add_mention(mention_in(sent));
            }

            let mut distinct = sents.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(chain.is_multi_sentence(), distinct.len() > 1);
        }
    }
}

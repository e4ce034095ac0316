use std::io::{self, Write};

use tracing::debug;

use crate::dictionary::{ExampleSource, examples_or_empty};
use crate::lang::Lang;
use crate::translate::{Translator, translate_or_original};

/// Sentence used when the dictionary has no example for `word`.
pub fn fallback_example(word: &str) -> String {
    format!("I used the word '{word}' in a sentence to show its meaning.")
}

/// A word with its translation and positionally aligned example pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub word: String,
    pub translation: String,
    pub examples_source: Vec<String>,
    pub examples_target: Vec<String>,
}

pub struct WordEnricher<'a, D, T> {
    dictionary: &'a D,
    translator: &'a T,
    target: &'a Lang,
}

impl<'a, D: ExampleSource, T: Translator> WordEnricher<'a, D, T> {
    pub fn new(dictionary: &'a D, translator: &'a T, target: &'a Lang) -> Self {
        Self {
            dictionary,
            translator,
            target,
        }
    }

    /// Builds the record for one word, writing the intermediate values to `out`.
    ///
    /// Returns `None` for blank input. Service failures degrade to the fallback
    /// example or untranslated text; only writes to `out` can fail.
    pub async fn enrich<W: Write>(
        &self,
        word: &str,
        out: &mut W,
    ) -> io::Result<Option<EnrichedRecord>> {
        let word = word.trim();
        if word.is_empty() {
            debug!("skipping blank word");
            return Ok(None);
        }

        let translation = translate_or_original(self.translator, word, self.target).await;

        let mut examples_source = examples_or_empty(self.dictionary, word).await;
        if examples_source.is_empty() {
            examples_source.push(fallback_example(word));
        }

        let mut examples_target = Vec::with_capacity(examples_source.len());
        for sentence in &examples_source {
            let translated = translate_or_original(self.translator, sentence, self.target).await;
            examples_target.push(translated);
        }

        writeln!(out, "translated: {translation}")?;
        writeln!(out, "examples_source: {examples_source:?}")?;
        writeln!(out, "examples_target: {examples_target:?}")?;

        Ok(Some(EnrichedRecord {
            word: word.to_string(),
            translation,
            examples_source,
            examples_target,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubDictionary, StubTranslator};

    async fn enrich_one(
        dictionary: &StubDictionary,
        translator: &StubTranslator,
        word: &str,
    ) -> (Option<EnrichedRecord>, String) {
        let lang = Lang::default();
        let mut out = Vec::new();
        let record = WordEnricher::new(dictionary, translator, &lang)
            .enrich(word, &mut out)
            .await
            .unwrap();
        (record, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fallback_quotes_the_word() {
        assert_eq!(
            fallback_example("zzqq"),
            "I used the word 'zzqq' in a sentence to show its meaning."
        );
    }

    #[tokio::test]
    async fn blank_word_is_skipped_without_calls() {
        let dictionary = StubDictionary::default();
        let translator = StubTranslator::default();
        let (record, out) = enrich_one(&dictionary, &translator, "   ").await;
        assert!(record.is_none());
        assert!(out.is_empty());
        assert_eq!(dictionary.calls.get(), 0);
        assert_eq!(translator.calls.get(), 0);
    }

    #[tokio::test]
    async fn translates_word_and_each_example_in_order() {
        let dictionary = StubDictionary::default().with("run", &["I run daily.", "Run!"]);
        let translator = StubTranslator::default()
            .with("run", "走る")
            .with("I run daily.", "私は毎日走る。")
            .with("Run!", "走れ！");
        let (record, out) = enrich_one(&dictionary, &translator, "  run ").await;
        let record = record.unwrap();

        assert_eq!(record.word, "run");
        assert_eq!(record.translation, "走る");
        assert_eq!(record.examples_source, vec!["I run daily.", "Run!"]);
        assert_eq!(record.examples_target, vec!["私は毎日走る。", "走れ！"]);
        assert_eq!(translator.calls.get(), 3);
        assert!(out.contains("translated: 走る"));
        assert!(out.contains("examples_target: [\"私は毎日走る。\", \"走れ！\"]"));
    }

    #[tokio::test]
    async fn missing_examples_use_fallback() {
        let dictionary = StubDictionary::default();
        let translator = StubTranslator::default().with("zzqq", "zzqq");
        let (record, _) = enrich_one(&dictionary, &translator, "zzqq").await;
        let record = record.unwrap();
        assert_eq!(
            record.examples_source,
            vec!["I used the word 'zzqq' in a sentence to show its meaning."]
        );
        assert_eq!(record.examples_target.len(), 1);
    }

    #[tokio::test]
    async fn empty_dictionary_result_uses_fallback() {
        let dictionary = StubDictionary::default().with("cat", &[]);
        let translator = StubTranslator::default();
        let (record, _) = enrich_one(&dictionary, &translator, "cat").await;
        assert_eq!(record.unwrap().examples_source, vec![fallback_example("cat")]);
    }

    #[tokio::test]
    async fn failed_translations_keep_original_text() {
        let dictionary = StubDictionary::default().with("cat", &["The cat sat.", "A cat!"]);
        let translator = StubTranslator::default().with("A cat!", "猫だ！");
        let (record, _) = enrich_one(&dictionary, &translator, "cat").await;
        let record = record.unwrap();
        assert_eq!(record.translation, "cat");
        assert_eq!(record.examples_target, vec!["The cat sat.", "猫だ！"]);
        assert_eq!(record.examples_source.len(), record.examples_target.len());
    }
}

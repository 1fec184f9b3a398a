/// System message for the chat-style backend.
pub const SYSTEM_PROMPT: &str = "You are a precise dictionary and language tutor.";

/// Builds the fixed instruction asking for a single JSON object in the
/// `DictionaryEntry` schema. Each quoted field name appears exactly once;
/// the cardinality rules below deliberately avoid re-quoting them.
pub fn build_prompt(phrase: &str) -> String {
    format!(
        r#"You are a bilingual English → Bangla dictionary assistant.

When I give you a word or phrase, reply ONLY with valid JSON in this structure:

{{
  "word": "The original word or phrase.",
  "ipa": "/IPA transcription like this/",
  "partOfSpeech": "part of speech in English, like noun, verb, adjective, adverb.",
  "definition": "English definition, clear and concise.",
  "bangla": "Bangla translation in Bangla script.",
  "sentencesIntermediate": [
    "Intermediate level sentence 1.",
    "Intermediate level sentence 2."
  ],
  "sentenceAdvanced": "One advanced-level sentence.",
  "synonyms": ["first", "second", "third"],
  "antonyms": ["first", "second", "third"]
}}

Rules:
- The definition must be in English.
- The translation must be in Bangla (Bengali) script.
- Exactly 2 intermediate-level sentences and exactly 1 advanced-level sentence.
- Exactly 3 single-word or short-phrase synonyms, and exactly 3 antonyms.
- Do not explain anything.
- Do not add markdown.
- Do not add any text outside the JSON.

Now process this word or phrase: "{phrase}""#
    )
}

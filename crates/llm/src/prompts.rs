//! Prompt construction for translation and summarization

use crate::languages::language_name;
use crate::TranscriptEntry;

/// Build the medical-translation instruction prompt.
///
/// Unknown codes fall back to the raw code so the prompt stays usable.
pub fn translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    let source_name = language_name(source_lang).unwrap_or(source_lang);
    let target_name = language_name(target_lang).unwrap_or(target_lang);

    format!(
        "You are a medical translator. Translate the following text from {source_name} to {target_name}.\n\
         \n\
         IMPORTANT RULES:\n\
         1. Preserve medical terminology accurately\n\
         2. Maintain the original tone and intent\n\
         3. If there are medical terms, translate them appropriately for the target language\n\
         4. Return ONLY the translated text, no explanations\n\
         \n\
         Text to translate:\n\
         {text}\n\
         \n\
         Translation:"
    )
}

/// Build the conversation-summary instruction prompt from a transcript.
///
/// Each line carries the speaker label and the original (untranslated) text,
/// in chronological order.
pub fn summary_prompt(transcript: &[TranscriptEntry]) -> String {
    let conversation_text = transcript
        .iter()
        .map(|entry| format!("{}: {}", entry.role.to_uppercase(), entry.original_text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a medical documentation assistant. Summarize the following clinician-patient conversation.\n\
         \n\
         PROVIDE:\n\
         1. Brief overview of the consultation (1-2 sentences)\n\
         2. Key symptoms or concerns mentioned\n\
         3. Any diagnoses or assessments discussed\n\
         4. Recommended actions or follow-ups\n\
         5. Important medical terms used\n\
         \n\
         Keep the summary concise and professional. Use bullet points for clarity.\n\
         \n\
         CONVERSATION:\n\
         {conversation_text}\n\
         \n\
         SUMMARY:"
    )
}

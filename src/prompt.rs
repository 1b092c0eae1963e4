//! Prompt construction for the completion endpoint.
//!
//! The template is fixed; only the description, keywords, and tone list are
//! substituted. The output is a natural-language prompt, so substitution does
//! no escaping.

use crate::validate::ValidatedRequest;

const TONE_SEPARATOR: &str = " / ";

const PROMPT_TEMPLATE: &str = r#"You are a world-class branding expert trained in startup naming strategies used by successful entrepreneurs like Greg Isenberg. Based on his framework, generate **startup/business names** that are:

1. **Scroll-stopping**: Instantly grab attention on social media and in app stores.
2. **Memorable**: Pass the "telephone test" — easy to pronounce, recall, and spell.
3. **Framework-aligned**, falling into one of the following categories:
   - Descriptive (clearly state what the product or service does)
   - Phrase-based (based on cultural references, sayings, or trending terms)
   - Humorous (clever, witty, or funny names that spark emotion or curiosity)

Avoid names that:
- Are bland or forgettable ("tofu names")
- Have confusing spellings or negative connotations
- Use generic or overused tech jargon

Include a mix of **descriptive**, **phrase-based**, and **humorous** names. For each name, provide a short reasoning for why it works.

Input:
- Business/Product Description: {description}
- Keywords to include (optional): {keywords}
- Preferred tone: {tones}

Output format (respond with exactly this JSON structure):
{
  "names": [
    {
      "name": "Business Name",
      "explanation": "One-line explanation why it works",
      "category": "Descriptive/Phrase-based/Humorous"
    }
  ]
}

Generate exactly 10 business name suggestions in this JSON format."#;

/// Render the generation prompt for a validated request.
///
/// Deterministic: the same request always yields the same prompt. Tones are
/// joined with `" / "` in selection order. Empty keywords leave the keywords
/// line in place with an empty value. Substitution is a single pass over the
/// template, so placeholder-like text inside a field is embedded verbatim
/// instead of being re-expanded.
pub fn build_prompt(request: &ValidatedRequest) -> String {
    let tones = request
        .tones()
        .iter()
        .map(|tone| tone.as_str())
        .collect::<Vec<_>>()
        .join(TONE_SEPARATOR);

    let substitutions = [
        ("{description}", request.description()),
        ("{keywords}", request.keywords()),
        ("{tones}", tones.as_str()),
    ];

    // Placeholders appear in the template in this order, each exactly once.
    let mut prompt = String::with_capacity(PROMPT_TEMPLATE.len());
    let mut rest = PROMPT_TEMPLATE;
    for (placeholder, value) in substitutions {
        if let Some((head, tail)) = rest.split_once(placeholder) {
            prompt.push_str(head);
            prompt.push_str(value);
            rest = tail;
        }
    }
    prompt.push_str(rest);
    prompt
}

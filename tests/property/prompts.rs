//! Property-based tests for prompt construction

use namesmith::prompt::build_prompt;
use namesmith::types::{GenerationRequest, Tone};
use namesmith::validate::validate;
use proptest::prelude::*;

fn tone_list_strategy() -> impl Strategy<Value = Vec<Tone>> {
    prop::collection::vec(prop::sample::select(Tone::ALL.to_vec()), 1..=5)
}

fn description_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z][a-zA-Z0-9 ]{0,60}").unwrap()
}

fn keywords_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9, ]{0,40}").unwrap()
}

/// Test that prompt construction is deterministic
#[test]
fn test_prompt_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(description_strategy(), keywords_strategy(), tone_list_strategy()),
            |(description, keywords, tones)| {
                let first = validate(GenerationRequest::new(
                    description.clone(),
                    keywords.clone(),
                    tones.clone(),
                ))
                .unwrap();
                let second =
                    validate(GenerationRequest::new(description, keywords, tones)).unwrap();

                assert_eq!(build_prompt(&first), build_prompt(&second));

                Ok(())
            },
        )
        .unwrap();
}

/// Test that every request field lands in the rendered prompt
#[test]
fn test_prompt_embeds_all_inputs_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(description_strategy(), keywords_strategy(), tone_list_strategy()),
            |(description, keywords, tones)| {
                let joined = tones
                    .iter()
                    .map(|tone| tone.as_str())
                    .collect::<Vec<_>>()
                    .join(" / ");
                let request = validate(GenerationRequest::new(
                    description.clone(),
                    keywords.clone(),
                    tones,
                ))
                .unwrap();
                let prompt = build_prompt(&request);

                assert!(prompt.contains(&format!("Business/Product Description: {description}")));
                assert!(prompt.contains(&format!("Keywords to include (optional): {keywords}")));
                assert!(prompt.contains(&format!("Preferred tone: {joined}")));
                assert!(!prompt.contains("{description}"));
                assert!(!prompt.contains("{keywords}"));
                assert!(!prompt.contains("{tones}"));

                Ok(())
            },
        )
        .unwrap();
}

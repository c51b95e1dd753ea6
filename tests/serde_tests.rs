#[cfg(feature = "serde")]
mod serde_tests {
    use serde_json::json;
    use uttergen::{
        CorpusGenerator, ErrorPolicy, GeneratorConfig, Intents, Template, Templates,
        UtteranceInterface, UttergenError,
    };

    #[test]
    #[ntest::timeout(100)]
    fn test_templates_deserialization() {
        let one: Templates = serde_json::from_str(r#""go (left|right)""#).unwrap();
        assert_eq!(one, Templates::One("go (left|right)".to_string()));

        let many: Templates = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many, Templates::from(["a", "b"]));

        assert!(serde_json::from_str::<Templates>("42").is_err());
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_intents_deserialization_keeps_order() {
        let intents: Intents =
            serde_json::from_str(r#"{"Zeta": "z", "Alpha": ["a (b|c)"], "Mid": "m"}"#).unwrap();

        let names: Vec<_> = intents.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);

        let serialized = serde_json::to_string(&intents).unwrap();
        assert_eq!(serialized, r#"{"Zeta":"z","Alpha":["a (b|c)"],"Mid":"m"}"#);
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_config_serialization() {
        let config = GeneratorConfig::strict().with_invalid_input(ErrorPolicy::Skip);
        let serialized = serde_json::to_string(&config).unwrap();
        assert_eq!(
            serialized,
            r#"{"invalid_input":"skip","malformed_template":"fail"}"#
        );

        let partial: GeneratorConfig =
            serde_json::from_str(r#"{"malformed_template":"fail"}"#).unwrap();
        assert_eq!(partial.invalid_input, ErrorPolicy::Skip);
        assert_eq!(partial.malformed_template, ErrorPolicy::Fail);
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_template_serialization() {
        let template = Template::new("turn (now) on").unwrap();
        let serialized = serde_json::to_string(&template).unwrap();
        assert_eq!(serialized, r#"{"content":"turn now on"}"#);

        let deserialized: Template = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.expand().unwrap(), vec!["turn now on"]);

        let malformed = serde_json::from_str::<Template>(r#"{"content":"turn (on"}"#);
        assert!(malformed.is_err());
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_error_serialization() {
        let error = uttergen::expand("say (|)").unwrap_err();
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: UttergenError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, error);
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_generate_json() {
        let value = json!({
            "Intent1": "go (left|right)",
            "Intent2": ["stop", "halt (|now)"],
        });

        let corpus = CorpusGenerator::new().generate_json(&value).unwrap();
        assert_eq!(
            corpus,
            "Intent1 go left\nIntent1 go right\n\nIntent2 stop\nIntent2 halt now\nIntent2 halt\n"
        );
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_generate_json_matches_typed_input() {
        let value = json!({
            "B": ["(x|y) z"],
            "A": "{(one|two)|Count} items",
        });
        let intents: Intents = serde_json::from_value(value.clone()).unwrap();

        let generator = CorpusGenerator::new();
        assert_eq!(
            generator.generate_json(&value).unwrap(),
            generator.generate(&intents).unwrap()
        );
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_generate_json_rejects_non_object() {
        let tolerant = CorpusGenerator::new();
        let strict = CorpusGenerator::with_config(GeneratorConfig::strict());

        for value in [json!(["go (left|right)"]), json!("go"), json!(null), json!({})] {
            assert_eq!(tolerant.generate_json(&value).unwrap(), "");
            assert!(matches!(
                strict.generate_json(&value),
                Err(UttergenError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_generate_json_skips_invalid_intent() {
        let value = json!({
            "Good": "go",
            "Bad": 42,
            "Mixed": ["stop", true, "halt"],
        });

        let corpus = CorpusGenerator::new().generate_json(&value).unwrap();
        assert_eq!(corpus, "Good go\n\nMixed stop\nMixed halt\n");

        let strict = CorpusGenerator::with_config(GeneratorConfig::strict());
        let Err(UttergenError::InvalidInput { reason }) = strict.generate_json(&value) else {
            panic!("expected invalid input");
        };
        assert!(reason.contains("'Bad'"), "{reason}");
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_generate_json_trailing_invalid_intent_keeps_separator() {
        let value = json!({
            "Good": "go",
            "Bad": {"nested": "object"},
        });

        let corpus = CorpusGenerator::new().generate_json(&value).unwrap();
        assert_eq!(corpus, "Good go\n\n");
    }
}

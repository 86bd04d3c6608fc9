use formulate_locale_core::{FieldValue, Rule, ValidationContext, sentence};
use formulate_locale_tr::CATALOG;
use proptest::prelude::*;

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Empty),
        Just(FieldValue::Null),
        any::<f64>().prop_map(FieldValue::Num),
        ".{0,12}".prop_map(FieldValue::Str),
        proptest::collection::vec("[a-z0-9]{0,4}", 0..4).prop_map(FieldValue::List),
    ]
}

fn context() -> impl Strategy<Value = ValidationContext> {
    (
        "[a-zA-ZçğıöşüÇĞİÖŞÜ ]{0,12}",
        field_value(),
        proptest::collection::vec("[a-z0-9]{0,6}", 0..4),
    )
        .prop_map(|(name, value, args)| ValidationContext { name, value, args })
}

fn message(rule: Rule, ctx: &ValidationContext) -> String {
    CATALOG.message(rule, ctx).expect("rule registered")
}

proptest! {
    #[test]
    fn every_template_returns_text(ctx in context()) {
        for rule in Rule::ALL {
            prop_assert!(!message(rule, &ctx).is_empty(), "{rule} returned empty text");
        }
    }

    #[test]
    fn templates_are_deterministic(ctx in context()) {
        for rule in Rule::ALL {
            prop_assert_eq!(message(rule, &ctx), message(rule, &ctx));
        }
    }

    #[test]
    fn required_mentions_field(name in "[a-zçğöşü]{1,10}") {
        let ctx = ValidationContext::new(name.as_str());
        prop_assert!(message(Rule::Required, &ctx).starts_with(&sentence(&name)));
    }

    #[test]
    fn numbers_use_value_range(value in -1.0e6f64..1.0e6) {
        let ctx = ValidationContext::new("Tutar").with_value(value).with_args(["5", "10"]);
        prop_assert_eq!(message(Rule::Between, &ctx), "Tutar must be between 5 and 10.");
    }

    #[test]
    fn length_flag_wins_over_numbers(value in -1.0e6f64..1.0e6) {
        let ctx = ValidationContext::new("Tutar")
            .with_value(value)
            .with_args(["5", "10", "length"]);
        prop_assert!(message(Rule::Between, &ctx).contains("uzunluğu 5 ve 10"));
    }

    #[test]
    fn value_flag_wins_over_text(text in "[a-z]{1,8}") {
        let ctx = ValidationContext::new("Kod")
            .with_value(text.as_str())
            .with_args(["1", "value"]);
        prop_assert_eq!(message(Rule::Min, &ctx), "Kod en az bu kadar 1.");
        prop_assert_eq!(message(Rule::Max, &ctx), "Kod, 1 değerinden küçük ya da eşit olmalı.");
    }

    #[test]
    fn truthy_values_are_echoed(text in "[a-z@.]{1,10}") {
        let ctx = ValidationContext::new("alan").with_value(text.as_str());
        let quoted = format!("“{text}”");
        for rule in [Rule::Email, Rule::EndsWith, Rule::StartsWith, Rule::Not] {
            prop_assert!(message(rule, &ctx).contains(&quoted), "{rule} did not echo");
        }
    }
}

#[test]
fn falsy_values_use_generic_wording() {
    for value in [
        FieldValue::Empty,
        FieldValue::Null,
        FieldValue::from(""),
        FieldValue::Num(0.0),
    ] {
        let ctx = ValidationContext::new("alan").with_value(value);
        for rule in [Rule::Email, Rule::EndsWith, Rule::StartsWith, Rule::Not, Rule::In] {
            assert!(!message(rule, &ctx).contains('“'), "{rule} echoed a falsy value");
        }
    }
}

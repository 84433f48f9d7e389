use optfile_core::{OptionRegistry, OptionType, Strategy, parse_boolean};
use optfile_source::ScriptedLineSource;
use proptest::prelude::*;

fn load_values(registry: &mut OptionRegistry, key: &str, values: &[String]) -> usize {
    let mut source =
        ScriptedLineSource::from_lines(values.iter().map(|v| format!("{} {}", key, v)));
    registry.load(&mut source)
}

proptest! {
    #[test]
    fn test_replace_last_write_wins(default in any::<i32>(), values in prop::collection::vec(any::<i32>(), 1..20)) {
        let mut registry = OptionRegistry::new();
        registry.add_integer("n", Strategy::Replace, default).unwrap();

        let text: Vec<String> = values.iter().map(i32::to_string).collect();
        prop_assert_eq!(load_values(&mut registry, "n", &text), values.len());
        prop_assert_eq!(registry.get_integer("n"), *values.last().unwrap());
    }

    #[test]
    fn test_append_sums_with_default(default in -1000i32..1000, values in prop::collection::vec(-1000i32..1000, 0..20)) {
        let mut registry = OptionRegistry::new();
        registry.add_integer("n", Strategy::Append, default).unwrap();

        let text: Vec<String> = values.iter().map(i32::to_string).collect();
        load_values(&mut registry, "n", &text);
        prop_assert_eq!(registry.get_integer("n"), default + values.iter().sum::<i32>());
    }

    #[test]
    fn test_append_discard_default_drops_default(default in -1000i32..1000, values in prop::collection::vec(-1000i32..1000, 1..20)) {
        let mut registry = OptionRegistry::new();
        registry.add_integer("n", Strategy::AppendDiscardDefault, default).unwrap();

        let text: Vec<String> = values.iter().map(i32::to_string).collect();
        load_values(&mut registry, "n", &text);
        prop_assert_eq!(registry.get_integer("n"), values.iter().sum::<i32>());
        prop_assert_eq!(registry.entry("n").unwrap().strategy(), Strategy::Append);
    }

    #[test]
    fn test_string_append_discard_default(values in prop::collection::vec("[a-z0-9]{1,8}", 1..10)) {
        let mut registry = OptionRegistry::new();
        registry.add_string("s", Strategy::AppendDiscardDefault, Some("default,list")).unwrap();

        load_values(&mut registry, "s", &values);
        let stored: Vec<&str> = registry.get_string_list("s").unwrap().iter().collect();
        prop_assert_eq!(stored, values.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_path_strategy_always_replace(strategy in prop_oneof![
        Just(Strategy::Default),
        Just(Strategy::Replace),
        Just(Strategy::Append),
        Just(Strategy::AppendDiscardDefault),
    ]) {
        let mut registry = OptionRegistry::new();
        registry.add_option("p", strategy, OptionType::Path, None::<&str>).unwrap();
        prop_assert_eq!(registry.entry("p").unwrap().strategy(), Strategy::Replace);
    }

    #[test]
    fn test_boolean_leading_digit(digit in 0u32..10, rest in "[a-z ]{0,10}") {
        let text = format!("{}{}", digit, rest);
        prop_assert_eq!(parse_boolean(&text), digit != 0);
    }

    #[test]
    fn test_load_never_panics(lines in prop::collection::vec("[ -~\t]{0,40}", 0..30)) {
        let mut registry = OptionRegistry::new();
        registry.add_integer("i", Strategy::Append, 0).unwrap();
        registry.add_boolean("b", Strategy::AppendDiscardDefault, true).unwrap();
        registry.add_string("s", Strategy::Append, None).unwrap();
        registry.add_path("p", None).unwrap();
        registry.add_alias("a", "s", Some("x")).unwrap();

        let line_count = lines.len();
        let mut source = ScriptedLineSource::from_lines(lines);
        prop_assert!(registry.load(&mut source) <= line_count);
    }
}

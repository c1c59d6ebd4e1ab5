//! Filtering and provider grouping

use std::collections::HashMap;

use crate::catalog::ModelDescriptor;

/// Models sharing one effective provider name, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGroup<'a> {
    /// Grouping key (the effective provider name)
    pub provider_name: &'a str,
    /// Members of the group
    pub models: Vec<&'a ModelDescriptor>,
}

/// Byte length of a case-insensitive match of `needle` at the start of `haystack`.
///
/// Characters are compared through their full lowercase mapping, so the
/// returned length always refers to `haystack`'s own bytes.
pub fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    let mut consumed = 0;
    for n in needle.chars() {
        let (idx, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        consumed = idx + h.len_utf8();
    }
    Some(consumed)
}

/// Whether `haystack` contains `needle`, ignoring case. An empty needle matches.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .char_indices()
        .any(|(i, _)| match_len_at(&haystack[i..], needle).is_some())
}

/// Models whose label contains `query`, ignoring case
pub fn filter_models<'a>(
    models: &'a [ModelDescriptor],
    query: &str,
) -> impl Iterator<Item = &'a ModelDescriptor> + use<'a> {
    let query = query.to_string();
    models
        .iter()
        .filter(move |m| contains_ignore_case(m.label(), &query))
}

/// Group models by effective provider name.
///
/// Groups appear in the order their provider is first seen and members keep
/// their input order.
pub fn group_by_provider<'a, I>(models: I) -> Vec<ModelGroup<'a>>
where
    I: IntoIterator<Item = &'a ModelDescriptor>,
{
    let mut groups: Vec<ModelGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for model in models {
        let key = model.provider_name();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ModelGroup {
                provider_name: key,
                models: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].models.push(model);
    }

    groups
}

/// Filter by `query` (when non-empty) and group the result by provider
#[must_use]
pub fn grouped_models<'a>(models: &'a [ModelDescriptor], query: &str) -> Vec<ModelGroup<'a>> {
    if query.is_empty() {
        group_by_provider(models)
    } else {
        group_by_provider(filter_models(models, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProviderRef;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn gpt_and_claude() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor::new("gpt-4").with_provider("OpenAI"),
            ModelDescriptor::new("claude-3").with_provider("Anthropic"),
        ]
    }

    fn names<'a>(group: &ModelGroup<'a>) -> Vec<&'a str> {
        group.models.iter().map(|m| m.name.as_str()).collect()
    }

    #[rstest]
    #[case("gpt-4", "gpt", true)]
    #[case("GPT-4", "gpt", true)]
    #[case("gpt-4", "PT-", true)]
    #[case("claude-3", "gpt", false)]
    #[case("anything", "", true)]
    #[case("", "x", false)]
    #[case("Straße", "SSE", false)]
    #[case("ÉCLAIR", "éclair", true)]
    fn test_contains_ignore_case(#[case] hay: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(contains_ignore_case(hay, needle), expected);
    }

    #[test]
    fn test_match_len_at_reports_haystack_bytes() {
        assert_eq!(match_len_at("ÉCLAIR", "éc"), Some("ÉC".len()));
        assert_eq!(match_len_at("ab", "abc"), None);
        assert_eq!(match_len_at("abc", ""), Some(0));
    }

    #[test]
    fn test_search_gpt_keeps_only_openai() {
        let models = gpt_and_claude();
        let groups = grouped_models(&models, "gpt");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].provider_name, "OpenAI");
        assert_eq!(names(&groups[0]), vec!["gpt-4"]);
    }

    #[test]
    fn test_search_matches_display_name_not_name() {
        let models = vec![
            ModelDescriptor::new("model-x").with_display_name("Sonnet"),
            ModelDescriptor::new("sonnet-raw").with_display_name("Other"),
        ];
        let groups = grouped_models(&models, "sonn");
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["model-x"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let models = gpt_and_claude();
        let groups = grouped_models(&models, "");
        let keys: Vec<&str> = groups.iter().map(|g| g.provider_name).collect();
        assert_eq!(keys, vec!["OpenAI", "Anthropic"]);
        assert_eq!(groups.iter().map(|g| g.models.len()).sum::<usize>(), 2);
    }

    #[test]
    fn test_no_match_yields_no_groups() {
        let models = gpt_and_claude();
        assert!(grouped_models(&models, "llama").is_empty());
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let models = vec![
            ModelDescriptor::new("a1").with_provider("A"),
            ModelDescriptor::new("b1").with_provider("B"),
            ModelDescriptor::new("a2").with_provider("A"),
            ModelDescriptor::new("o1"),
            ModelDescriptor::new("b2").with_provider("B"),
        ];
        let groups = group_by_provider(&models);
        let keys: Vec<&str> = groups.iter().map(|g| g.provider_name).collect();
        assert_eq!(keys, vec!["A", "B", "OpenAI"]);
        assert_eq!(names(&groups[0]), vec!["a1", "a2"]);
        assert_eq!(names(&groups[1]), vec!["b1", "b2"]);
        assert_eq!(names(&groups[2]), vec!["o1"]);
    }

    #[test]
    fn test_missing_provider_joins_explicit_openai_group() {
        let models = vec![
            ModelDescriptor::new("gpt-4").with_provider("OpenAI"),
            ModelDescriptor::new("gpt-3.5"),
        ];
        let groups = group_by_provider(&models);
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["gpt-4", "gpt-3.5"]);
    }

    fn arb_model() -> impl Strategy<Value = ModelDescriptor> {
        let providers = prop::sample::select(vec![
            None,
            Some("OpenAI"),
            Some("Anthropic"),
            Some("Google"),
            Some("Acme"),
        ]);
        let names = prop::sample::select(vec!["gpt-4", "claude", "gemini", "llama", "mix-GPT"]);
        (names, providers, 0u32..1000).prop_map(|(name, provider, n)| {
            ModelDescriptor {
                provider: provider.map(|p| ProviderRef {
                    provider_name: p.to_string(),
                }),
                ..ModelDescriptor::new(format!("{name}-{n}"))
            }
        })
    }

    proptest! {
        #[test]
        fn prop_groups_partition_input(models in prop::collection::vec(arb_model(), 0..40)) {
            let groups = group_by_provider(&models);

            let keys: Vec<&str> = groups.iter().map(|g| g.provider_name).collect();
            let distinct_keys: HashSet<&str> = keys.iter().copied().collect();
            let expected_keys: HashSet<&str> = models.iter().map(ModelDescriptor::provider_name).collect();
            prop_assert_eq!(keys.len(), distinct_keys.len());
            prop_assert_eq!(distinct_keys, expected_keys);

            let total: usize = groups.iter().map(|g| g.models.len()).sum();
            prop_assert_eq!(total, models.len());
            for group in &groups {
                for model in &group.models {
                    prop_assert_eq!(model.provider_name(), group.provider_name);
                }
            }

            // Flattening the groups and restoring input order gives back the input.
            let mut flattened: Vec<usize> = groups
                .iter()
                .flat_map(|g| g.models.iter())
                .map(|m| models.iter().position(|x| std::ptr::eq(x, *m)).unwrap_or(usize::MAX))
                .collect();
            flattened.sort_unstable();
            prop_assert_eq!(flattened, (0..models.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_filtered_groups_only_hold_matches(
            models in prop::collection::vec(arb_model(), 0..40),
            query in prop::sample::select(vec!["gpt", "GPT", "cl", "-1", "zzz"]),
        ) {
            let groups = grouped_models(&models, query);
            let total: usize = groups.iter().map(|g| g.models.len()).sum();
            let expected = models.iter().filter(|m| contains_ignore_case(m.label(), query)).count();
            prop_assert_eq!(total, expected);
        }

        #[test]
        fn prop_grouping_is_deterministic(models in prop::collection::vec(arb_model(), 0..20)) {
            prop_assert_eq!(grouped_models(&models, ""), grouped_models(&models, ""));
        }
    }
}

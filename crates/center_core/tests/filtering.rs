use center_core::{
    Category, CategoryFilter, FilterState, MatchCase, Message, ProjectFilter, ProjectRegistry,
    Source, SourceFilter, Stats,
};

fn msg(id: u64, category: &str, source: &str, body: &str) -> Message {
    Message {
        id,
        sender: format!("@sender{id}"),
        body: body.to_string(),
        source: source.to_string(),
        category: category.to_string(),
        timestamp: "2025-08-12T10:00:00Z".to_string(),
    }
}

#[test]
fn category_normalization_is_idempotent() {
    for token in ["urgent", "high", "high_priority", "routine", "archive"] {
        let canonical = Category::parse(token).expect("known token");
        assert_eq!(Category::parse(canonical.as_token()), Some(canonical));
    }
    assert_eq!(Category::parse("high"), Some(Category::HighPriority));
    assert_eq!(Category::parse("spam"), None);
}

#[test]
fn feed_variant_aliases_to_twitter() {
    assert_eq!(Source::parse("twitter"), Some(Source::Twitter));
    assert_eq!(Source::parse("twitter_feed"), Some(Source::Twitter));
    assert_eq!(Source::parse("TwitterFeed"), Some(Source::Twitter));
    assert_eq!(Source::parse("telegram"), Some(Source::Telegram));
    assert_eq!(Source::parse("carrier_pigeon"), None);
}

#[test]
fn unconstrained_filter_passes_everything_in_order() {
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "urgent", "telegram", "Uniswap fork"),
        msg(2, "high_priority", "twitter", "Aave query"),
        msg(3, "weird", "carrier_pigeon", "nothing notable"),
    ];
    let filter = FilterState::default();
    assert!(filter.is_unconstrained());

    let kept: Vec<u64> = messages
        .iter()
        .filter(|message| filter.matches(message, &registry))
        .map(|message| message.id)
        .collect();
    assert_eq!(kept, vec![1, 2, 3]);
}

#[test]
fn category_selector_applies_alias_rule() {
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "urgent", "telegram", "Uniswap fork"),
        msg(2, "high_priority", "twitter", "Aave query"),
        msg(3, "high", "twitter", "another one"),
    ];

    let urgent = FilterState {
        category: CategoryFilter::parse("urgent").unwrap(),
        ..FilterState::default()
    };
    let kept: Vec<u64> = messages
        .iter()
        .filter(|message| urgent.matches(message, &registry))
        .map(|message| message.id)
        .collect();
    assert_eq!(kept, vec![1]);

    // "high" selects the high_priority bucket, whichever stored token the
    // message carries.
    let high = FilterState {
        category: CategoryFilter::parse("high").unwrap(),
        ..FilterState::default()
    };
    let kept: Vec<u64> = messages
        .iter()
        .filter(|message| high.matches(message, &registry))
        .map(|message| message.id)
        .collect();
    assert_eq!(kept, vec![2, 3]);
}

#[test]
fn project_selector_matches_mentions_only() {
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "urgent", "telegram", "Uniswap fork"),
        msg(2, "high_priority", "twitter", "Aave query"),
    ];

    let filter = FilterState {
        project: ProjectFilter::parse("Uniswap"),
        ..FilterState::default()
    };
    let kept: Vec<u64> = messages
        .iter()
        .filter(|message| filter.matches(message, &registry))
        .map(|message| message.id)
        .collect();
    assert_eq!(kept, vec![1]);

    assert_eq!(ProjectFilter::parse("none"), ProjectFilter::None);
}

#[test]
fn source_selector_counts_feed_variant_as_twitter() {
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "routine", "telegram", "hello"),
        msg(2, "routine", "TwitterFeed", "feed item"),
    ];
    let filter = FilterState {
        source: SourceFilter::parse("twitter").unwrap(),
        ..FilterState::default()
    };
    let kept: Vec<u64> = messages
        .iter()
        .filter(|message| filter.matches(message, &registry))
        .map(|message| message.id)
        .collect();
    assert_eq!(kept, vec![2]);
}

#[test]
fn mentions_follow_registry_order() {
    let registry = ProjectRegistry::audited();
    // Input order is Sushi before Aave; the report follows registry order.
    let found = registry.mentions("Sushi liquidity moving to Aave soon");
    assert_eq!(found, vec!["Aave", "Sushi"]);

    assert!(registry.mentions("nothing of note").is_empty());
}

#[test]
fn mention_matching_case_mode() {
    let sensitive = ProjectRegistry::audited();
    assert!(sensitive.mentions("uniswap fork").is_empty());

    let insensitive = ProjectRegistry::audited().with_case(MatchCase::Insensitive);
    assert_eq!(insensitive.mentions("uniswap fork"), vec!["Uniswap"]);
}

#[test]
fn aggregate_counts_sum_to_total() {
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "urgent", "telegram", "Uniswap fork"),
        msg(2, "high", "twitter", "Aave query"),
        msg(3, "high_priority", "TwitterFeed", "Aave again"),
        msg(4, "spam", "carrier_pigeon", "unknown vocabulary"),
        msg(5, "archive", "telegram", "old thread"),
    ];
    let stats = Stats::collect(&messages, &registry);

    assert_eq!(stats.total, 5);
    let category_sum = stats.urgent
        + stats.high_priority
        + stats.routine
        + stats.archive
        + stats.other_category;
    let source_sum = stats.telegram + stats.twitter + stats.other_source;
    assert_eq!(category_sum, stats.total);
    assert_eq!(source_sum, stats.total);

    // Alias rules apply per dimension: "high" and "high_priority" share a
    // bucket, the feed variant counts as twitter.
    assert_eq!(stats.high_priority, 2);
    assert_eq!(stats.twitter, 2);
    assert_eq!(stats.other_category, 1);
    assert_eq!(stats.other_source, 1);
    assert_eq!(stats.project_mentions.get("Aave"), Some(&2));
    assert_eq!(stats.project_mentions.get("Uniswap"), Some(&1));
    assert_eq!(stats.project_mentions.get("Ethena"), None);
}

#[test]
fn counts_ignore_active_filters() {
    // Stats are computed from the unfiltered collection by construction;
    // the view model exposes them next to a filtered message list.
    let registry = ProjectRegistry::audited();
    let messages = vec![
        msg(1, "urgent", "telegram", "a"),
        msg(2, "routine", "twitter", "b"),
    ];
    let stats = Stats::collect(&messages, &registry);
    assert_eq!(stats.urgent, 1);
    assert_eq!(stats.routine, 1);
    assert_eq!(stats.total, 2);
}

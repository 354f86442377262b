//! End-to-end behavior of the catalog query engine.

use learnhub_catalog::prelude::*;

fn item(id: i64, category: &str, difficulty: &str) -> CatalogItem {
    CatalogItem::new(id, format!("Tutorial {}", id))
        .with_description(format!("About {}", category))
        .with_category(category)
        .with_difficulty(difficulty)
}

/// Five items: categories [tech,tech,cook,tech,design], difficulties [easy,easy,hard,easy,easy].
fn scenario_source() -> Vec<CatalogItem> {
    vec![
        item(1, "tech", "easy"),
        item(2, "tech", "easy"),
        item(3, "cook", "hard"),
        item(4, "tech", "easy"),
        item(5, "design", "easy"),
    ]
}

/// A larger catalog with deliberate key collisions.
fn mixed_source() -> Vec<CatalogItem> {
    let categories = ["technology", "cooking", "farming", "design"];
    let difficulties = ["beginner", "intermediate", "advanced"];
    let durations = ["30m", "1h", "1h 30m", "2h", "45m"];

    (1..=24)
        .map(|i| {
            let description = if i % 5 == 0 {
                "Hands-on Rust project"
            } else {
                "Video lessons"
            };
            let mut it = CatalogItem::new(i, format!("Course {}", i))
                .with_description(description)
                .with_category(categories[(i as usize) % categories.len()])
                .with_difficulty(difficulties[(i as usize) % difficulties.len()])
                .with_duration(durations[(i as usize) % durations.len()])
                .with_popularity(((i % 4) * 1000) as u64);
            if i % 3 != 0 {
                it = it.with_rating(4.0 + (i % 2) as f64 * 0.5);
            }
            it
        })
        .collect()
}

#[test]
fn tech_newest_scenario() {
    let source = scenario_source();
    let spec = QuerySpec::new()
        .with_category("tech")
        .with_difficulty("all")
        .with_search("")
        .with_sort(SortKey::Newest)
        .with_page_size(2)
        .with_pages_requested(1);

    let result = query(&source, &spec);

    assert_eq!(result.total, 3);
    assert_eq!(result.ids(), vec!["4", "2"]);
    assert!(result.has_more);
}

#[test]
fn empty_source_yields_empty_result() {
    let specs = [
        QuerySpec::new(),
        QuerySpec::new().with_search("anything").with_sort(SortKey::Rating),
        QuerySpec::new().with_category("tech").with_pages_requested(5),
    ];

    for spec in &specs {
        let result = query(&[], spec);
        assert!(result.page.is_empty());
        assert_eq!(result.total, 0);
        assert!(!result.has_more);
    }
}

#[test]
fn every_included_item_passes_every_predicate() {
    let source = mixed_source();
    let spec = QuerySpec::new()
        .with_search("rust")
        .with_category("technology")
        .with_page_size(100);

    let result = query(&source, &spec);
    let filters = spec.filters();

    for it in &result.page {
        assert!(filters.iter().all(|f| f.matches(it)));
    }

    let expected = source
        .iter()
        .filter(|it| filters.iter().all(|f| f.matches(it)))
        .count();
    assert_eq!(result.total, expected);
}

#[test]
fn failing_any_single_predicate_excludes() {
    let source = vec![
        item(1, "tech", "easy").with_description("rust"),
        // Wrong category.
        item(2, "cook", "easy").with_description("rust"),
        // Wrong difficulty.
        item(3, "tech", "hard").with_description("rust"),
        // No search match.
        item(4, "tech", "easy").with_description("python"),
    ];
    let spec = QuerySpec::new()
        .with_search("RUST")
        .with_category("tech")
        .with_difficulty("easy");

    let result = query(&source, &spec);
    assert_eq!(result.ids(), vec!["1"]);
}

#[test]
fn equal_keys_keep_source_order() {
    let source = mixed_source();

    for sort in SortKey::VARIANTS {
        let result = query(&source, &QuerySpec::new().with_sort(sort).with_page_size(100));
        let position = |it: &CatalogItem| source.iter().position(|s| s.id == it.id).unwrap();

        for pair in result.page.windows(2) {
            if sort.compare(pair[0], pair[1]) == std::cmp::Ordering::Equal {
                assert!(
                    position(pair[0]) < position(pair[1]),
                    "{} broke source order for {} then {}",
                    sort,
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }
}

#[test]
fn loading_more_extends_the_previous_page() {
    let source = mixed_source();
    let mut spec = QuerySpec::new()
        .with_difficulty("beginner")
        .with_sort(SortKey::Popular)
        .with_page_size(3);

    let mut previous = query(&source, &spec);
    loop {
        spec = spec.load_more();
        let next = query(&source, &spec);

        assert_eq!(next.total, previous.total);
        assert!(next.page.len() >= previous.page.len());
        assert_eq!(&next.page[..previous.page.len()], &previous.page[..]);

        if !next.has_more {
            break;
        }
        previous = next;
    }
}

#[test]
fn has_more_matches_page_length() {
    let source = mixed_source();
    for page_size in [1, 5, 8, 24, 50] {
        for pages in 1..4 {
            let spec = QuerySpec::new()
                .with_page_size(page_size)
                .with_pages_requested(pages);
            let result = query(&source, &spec);
            assert_eq!(result.has_more, result.total > result.page.len());
            assert_eq!(result.page.len(), result.total.min(page_size * pages));
        }
    }
}

#[test]
fn unrated_items_rank_last_but_display_default() {
    let source = vec![
        CatalogItem::new(1, "Unrated"),
        CatalogItem::new(2, "Rated").with_rating(3.0),
    ];
    let result = query(&source, &QuerySpec::new().with_sort(SortKey::Rating));

    assert_eq!(result.ids(), vec!["2", "1"]);
    assert_eq!(result.page[1].display_rating(), 4.5);
}

#[test]
fn loads_tutorials_document() {
    let json = r#"[
        {"id": 1, "title": "HTML & CSS Fundamentals", "description": "Build your first web page",
         "category": "technology", "difficulty": "beginner", "duration": "3h 30m",
         "students": 15420, "rating": 4.8},
        {"id": 2, "title": "Italian Pasta", "description": "Fresh pasta from scratch",
         "category": "cooking", "difficulty": "intermediate", "duration": "1h 45m",
         "students": "4200"},
        {"id": 3, "title": "Organic Gardening", "description": "Grow vegetables at home",
         "category": "farming", "difficulty": "beginner", "duration": "2h"}
    ]"#;

    let engine = CatalogQueryEngine::from_json(json).unwrap();
    assert_eq!(engine.len(), 3);

    let by_duration = engine.query(&QuerySpec::new().with_sort(SortKey::Duration));
    assert_eq!(by_duration.ids(), vec!["2", "3", "1"]);

    let beginners = engine.query(&QuerySpec::new().with_difficulty("beginner").with_search("grow"));
    assert_eq!(beginners.ids(), vec!["3"]);
    assert_eq!(engine.count_label(&beginners), "1 of 3 Tutorials");

    let summaries = engine.categories();
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[1].total_students, 4200);
}

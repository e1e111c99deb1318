use lesson_announcer::domain::model::DEFAULT_LESSONS;
use lesson_announcer::{AnnouncementService, LessonCatalog};

#[test]
fn test_scenario_table() {
    let service = AnnouncementService::new(LessonCatalog::default());

    assert_eq!(
        service.announce("Routing", Some("Monday")),
        "Routing is active on Monday."
    );
    assert_eq!(
        service.announce("Mongo", Some("")),
        "Mongo is not active on this day"
    );
    assert_eq!(
        service.announce("Node", None),
        "Node is not active on this day"
    );
    assert_eq!(
        service.announce("Firebase", Some("Friday")),
        "Firebase is active on Friday."
    );
}

#[test]
fn test_default_catalog_is_fixed() {
    let catalog = LessonCatalog::default();

    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.lessons(), &DEFAULT_LESSONS[..]);
    assert!(catalog.contains("No server project"));
    assert!(!catalog.contains("no server project"));

    // Order is stable across reads
    assert_eq!(catalog.lessons(), LessonCatalog::default().lessons());
}

#[test]
fn test_active_message_for_every_catalog_lesson() {
    let service = AnnouncementService::new(LessonCatalog::default());

    for lesson in service.catalog().lessons().to_vec() {
        assert_eq!(
            service.announce(&lesson, Some("Thursday")),
            format!("{} is active on Thursday.", lesson)
        );
        assert_eq!(
            service.announce(&lesson, None),
            format!("{} is not active on this day", lesson)
        );
    }
}

#[test]
fn test_uncatalogued_lesson_is_accepted() {
    let service = AnnouncementService::new(LessonCatalog::default());

    assert_eq!(
        service.announce("GraphQL", Some("Saturday")),
        "GraphQL is active on Saturday."
    );
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let service = AnnouncementService::new(LessonCatalog::default());

    let outputs: Vec<String> = (0..3)
        .map(|_| service.announce("Directives", Some("Tuesday")))
        .collect();

    assert!(outputs.iter().all(|o| o == "Directives is active on Tuesday."));
    assert_eq!(service.catalog().len(), 9);
}

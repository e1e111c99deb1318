use crate::domain::model::{Announcement, LessonCatalog};

/// Formats the status line for a lesson/day pair. Holds the catalog but
/// never mutates it; every call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    catalog: LessonCatalog,
}

impl AnnouncementService {
    pub fn new(catalog: LessonCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    /// `day` counts as present only when it is a non-empty string; a
    /// whitespace-only day is still "active on" that day. `lesson` is not
    /// validated against the catalog and an empty lesson is formatted
    /// like any other name.
    pub fn announce(&self, lesson: &str, day: Option<&str>) -> String {
        match day {
            Some(day) if !day.is_empty() => format!("{} is active on {}.", lesson, day),
            _ => format!("{} is not active on this day", lesson),
        }
    }

    pub fn announcement(&self, lesson: &str, day: Option<&str>) -> Announcement {
        let message = self.announce(lesson, day);
        Announcement {
            lesson: lesson.to_string(),
            day: day.filter(|d| !d.is_empty()).map(|d| d.to_string()),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AnnouncementService {
        AnnouncementService::new(LessonCatalog::default())
    }

    #[test]
    fn test_announce_with_day() {
        assert_eq!(
            service().announce("Routing", Some("Monday")),
            "Routing is active on Monday."
        );
        assert_eq!(
            service().announce("Firebase", Some("Friday")),
            "Firebase is active on Friday."
        );
    }

    #[test]
    fn test_announce_without_day() {
        assert_eq!(
            service().announce("Mongo", Some("")),
            "Mongo is not active on this day"
        );
        assert_eq!(
            service().announce("Node", None),
            "Node is not active on this day"
        );
    }

    #[test]
    fn test_whitespace_day_is_present() {
        assert_eq!(service().announce("Express", Some(" ")), "Express is active on  .");
    }

    #[test]
    fn test_empty_lesson_passes_through() {
        assert_eq!(service().announce("", Some("Tuesday")), " is active on Tuesday.");
        assert_eq!(service().announce("", None), " is not active on this day");
    }

    #[test]
    fn test_announce_is_pure() {
        let svc = service();
        let catalog_before = svc.catalog().clone();
        let first = svc.announce("Services", Some("Wednesday"));
        let second = svc.announce("Services", Some("Wednesday"));
        assert_eq!(first, second);
        assert_eq!(svc.catalog(), &catalog_before);
    }

    #[test]
    fn test_announcement_drops_empty_day() {
        let a = service().announcement("Mongo", Some(""));
        assert_eq!(a.day, None);
        assert_eq!(a.message, "Mongo is not active on this day");
    }
}

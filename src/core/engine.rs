use crate::core::announcer::AnnouncementService;
use crate::core::Presenter;
use crate::utils::error::Result;

/// Drives one announce-and-present cycle: format the status line, hand it
/// to the presenter, return the message to the caller.
pub struct AnnouncerEngine<P: Presenter> {
    service: AnnouncementService,
    presenter: P,
}

impl<P: Presenter> AnnouncerEngine<P> {
    pub fn new(service: AnnouncementService, presenter: P) -> Self {
        Self { service, presenter }
    }

    pub fn service(&self) -> &AnnouncementService {
        &self.service
    }

    pub fn run(&self, lesson: &str, day: Option<&str>) -> Result<String> {
        if !self.service.catalog().contains(lesson) {
            tracing::debug!("Lesson '{}' is not in the catalog", lesson);
        }

        let announcement = self.service.announcement(lesson, day);
        tracing::debug!("Formatted announcement: {}", announcement.message);

        self.presenter.present(&announcement)?;

        Ok(announcement.message)
    }
}

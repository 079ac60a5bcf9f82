//! Course entity representing a scheduled series of lectures.

use chrono::NaiveDate;

/// A stored course.
///
/// `start_date < end_date` holds for every course read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lectures: u32,
}

impl Course {
    /// Creates a new Course instance.
    pub fn new(
        id: i64,
        title: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        lectures: u32,
    ) -> Self {
        Self {
            id,
            title,
            start_date,
            end_date,
            lectures,
        }
    }

    /// Returns true if the course runs entirely inside `[start, end]`.
    pub fn fits_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date >= start && self.end_date <= end
    }
}

/// Input data for creating a new course.
///
/// The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lectures: u32,
}

/// Partial update for an existing course.
///
/// `None` fields are left unchanged in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub lectures: Option<u32>,
}

impl CoursePatch {
    /// Returns true if the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.lectures.is_none()
    }
}

//! Derived per-course statistics.
//!
//! Nothing here is stored: the store rebuilds an [`Aggregates`] from its
//! entries on every call, so the numbers can never go stale.

use super::entry::{round_cents, Course, MenuEntry};

/// Count, price sum, and average price for one course
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseStats {
    pub count: usize,
    /// Full-precision sum of prices
    pub sum: f64,
    /// `sum / count` rounded to cents, exactly `0.0` when the course is empty
    pub average: f64,
}

impl CourseStats {
    fn record(&mut self, price: f64) {
        self.count += 1;
        self.sum += price;
    }

    fn finish(&mut self) {
        self.average = if self.count > 0 {
            round_cents(self.sum / self.count as f64)
        } else {
            0.0
        };
    }
}

/// Menu-wide statistics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    pub total_count: usize,
    pub starter: CourseStats,
    pub main: CourseStats,
    pub dessert: CourseStats,
}

impl Aggregates {
    /// Compute statistics over a sequence of entries
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a MenuEntry>) -> Self {
        let mut aggregates = Self::default();

        for entry in entries {
            aggregates.total_count += 1;
            aggregates.course_mut(entry.course).record(entry.price);
        }

        for course in Course::ALL {
            aggregates.course_mut(course).finish();
        }

        aggregates
    }

    /// Statistics for a single course
    pub fn course(&self, course: Course) -> &CourseStats {
        match course {
            Course::Starter => &self.starter,
            Course::Main => &self.main,
            Course::Dessert => &self.dessert,
        }
    }

    fn course_mut(&mut self, course: Course) -> &mut CourseStats {
        match course {
            Course::Starter => &mut self.starter,
            Course::Main => &mut self.main,
            Course::Dessert => &mut self.dessert,
        }
    }
}

// Add-dish form state
//
// Holds what the user has typed so far. Kept outside the menu store: a failed
// submit leaves every field as typed so the user can correct it.

use crate::menu::{Course, Field, NewEntry};

/// Form inputs in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Course,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::Course,
        FormField::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Dish Name",
            FormField::Description => "Description",
            FormField::Course => "Course",
            FormField::Price => "Price",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "e.g. Lemon Chicken",
            FormField::Description => "Short description",
            FormField::Course => "",
            FormField::Price => "e.g. 120.00",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Course,
            FormField::Course => FormField::Price,
            FormField::Price => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Price,
            FormField::Description => FormField::Name,
            FormField::Course => FormField::Description,
            FormField::Price => FormField::Course,
        }
    }
}

impl From<Field> for FormField {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => FormField::Name,
            Field::Price => FormField::Price,
        }
    }
}

/// Editable state of the add-dish form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price_text: String,
    pub focus: FormField,
}

impl AddForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focus_field(&mut self, field: impl Into<FormField>) {
        self.focus = field.into();
    }

    /// Text buffer behind the focused field; the course picker has none
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price_text),
            FormField::Course => None,
        }
    }

    /// Text shown for a field
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Course => self.course.as_str(),
            FormField::Price => &self.price_text,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn next_course(&mut self) {
        self.course = self.course.next();
    }

    pub fn prev_course(&mut self) {
        self.course = self.course.prev();
    }

    /// Snapshot the fields as a candidate for the store
    pub fn to_candidate(&self) -> NewEntry {
        NewEntry::new(
            self.name.clone(),
            self.description.clone(),
            self.course,
            self.price_text.clone(),
        )
    }

    /// Empty every field, course back to Starter, focus back to the name
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = AddForm::default();
        for c in "Soup".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        form.insert_char('x');
        form.backspace();
        form.focus_next();
        form.insert_char('9'); // course picker ignores text
        form.focus_next();
        form.insert_char('9');

        assert_eq!(form.name, "Soup");
        assert_eq!(form.description, "");
        assert_eq!(form.price_text, "9");
        assert_eq!(form.course, Course::Starter);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = AddForm::default();
        form.focus_prev();
        assert_eq!(form.focus, FormField::Price);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = AddForm {
            name: "Soup".into(),
            description: "Hot".into(),
            course: Course::Dessert,
            price_text: "10".into(),
            focus: FormField::Price,
        };
        form.reset();
        assert_eq!(form, AddForm::default());
        assert_eq!(form.course, Course::Starter);
    }

    #[test]
    fn test_candidate_carries_raw_text() {
        let mut form = AddForm::default();
        form.name = " Soup ".into();
        form.price_text = " 12 ".into();
        form.next_course();

        let candidate = form.to_candidate();
        assert_eq!(candidate.name, " Soup ");
        assert_eq!(candidate.price_text, " 12 ");
        assert_eq!(candidate.course, Course::Main);
    }
}

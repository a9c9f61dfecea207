/// One input on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Local contents of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Hand back the submitted values and leave the form empty.
    pub fn take_submission(&mut self) -> ContactForm {
        std::mem::take(self)
    }

    /// Submit the form if every field has content. An incomplete form is left
    /// untouched so the visitor can finish it.
    pub fn submit(&mut self) -> Option<ContactForm> {
        self.is_complete().then(|| self.take_submission())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".to_string());
        form.set(ContactField::Email, "ada@example.com".to_string());
        form.set(ContactField::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_set_and_get_each_field() {
        let form = filled();
        assert_eq!(form.get(ContactField::Name), "Ada");
        assert_eq!(form.get(ContactField::Email), "ada@example.com");
        assert_eq!(form.get(ContactField::Message), "Hello there");
    }

    #[test]
    fn test_submission_resets_all_fields() {
        let mut form = filled();
        assert!(form.is_complete());

        let submitted = form.take_submission();
        assert_eq!(submitted.name, "Ada");
        assert_eq!(submitted.message, "Hello there");
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_whitespace_is_not_complete() {
        let mut form = filled();
        form.set(ContactField::Message, "   ".to_string());
        assert!(!form.is_complete());
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = filled();
        form.set(ContactField::Email, " ".to_string());
        let before = form.clone();
        assert_eq!(form.submit(), None);
        assert_eq!(form, before);

        form.set(ContactField::Email, "ada@example.com".to_string());
        let submitted = form.submit().unwrap();
        assert_eq!(submitted.email, "ada@example.com");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_field_ids() {
        assert_eq!(ContactField::Name.id(), "name");
        assert_eq!(ContactField::Email.id(), "email");
        assert_eq!(ContactField::Message.id(), "message");
    }
}

/// Raw, untrimmed values of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Hidden honeypot field. Humans never fill this in.
    pub website: String,
}

impl FormFields {
    /// Returns `true` if the honeypot field holds any value at all, including
    /// whitespace.
    pub fn is_honeypot_filled(&self) -> bool {
        !self.website.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honeypot() {
        let mut fields = FormFields::default();
        assert!(!fields.is_honeypot_filled());

        fields.website = "  \n".into();
        assert!(fields.is_honeypot_filled());

        fields.website = "http://spam.example".into();
        assert!(fields.is_honeypot_filled());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            placeholder: placeholder.into(),
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        if self.failed {
            &self.placeholder
        } else {
            &self.primary
        }
    }

    /// Swaps to the placeholder on the first failure only; a broken placeholder stays broken.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_placeholder_exactly_once() {
        let mut image = ImageSource::new("/portfolio-site/tharrun.jpeg", "https://placehold.co/400");
        assert_eq!(image.src(), "/portfolio-site/tharrun.jpeg");

        assert!(image.on_error());
        assert_eq!(image.src(), "https://placehold.co/400");

        assert!(!image.on_error());
        assert_eq!(image.src(), "https://placehold.co/400");
    }
}

/// Failures against the render-surface contract the page assumes at
/// construction time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    /// A named element the controllers rely on is absent from the document.
    #[error("missing required element: {0}")]
    MissingElement(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_culprit() {
        let error = PageError::MissingElement("about");

        assert_eq!(error.to_string(), "missing required element: about");
    }
}

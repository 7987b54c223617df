use indicatif::ProgressStyle;

const ONLY_MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";
const PAGE_TEMPLATE: &str = "{spinner} {msg:15} {wide_bar:} {pos:>4}/{len:4} pages";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    pub fn only_message() -> ProgressStyle {
        ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn page_bar() -> ProgressStyle {
        ProgressStyle::with_template(PAGE_TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_parse() {
        assert!(ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE).is_ok());
        assert!(ProgressStyle::with_template(PAGE_TEMPLATE).is_ok());
    }
}

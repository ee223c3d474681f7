/// Reveals `text` one character per tick.
#[derive(Clone, PartialEq, Debug)]
pub struct Typewriter {
    text: String,
    shown_chars: usize,
    total_chars: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Self {
            text,
            shown_chars: 0,
            total_chars,
        }
    }

    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown_chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_done(&self) -> bool {
        self.shown_chars >= self.total_chars
    }

    /// Returns `false` once the whole text is already visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }

        self.shown_chars += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_grows_one_char_per_tick() {
        let mut typewriter = Typewriter::new("Hola");
        assert_eq!(typewriter.visible(), "");

        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "H");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "Ho");
    }

    #[test]
    fn stops_at_full_text() {
        let mut typewriter = Typewriter::new("ok");
        while typewriter.tick() {}

        assert!(typewriter.is_done());
        assert_eq!(typewriter.visible(), "ok");
        assert!(!typewriter.tick());
        assert_eq!(typewriter.visible(), "ok");
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let mut typewriter = Typewriter::new("rápidas");
        let mut frames = Vec::new();
        while typewriter.tick() {
            frames.push(typewriter.visible().to_string());
        }

        assert_eq!(frames.len(), 7);
        assert_eq!(frames[1], "rá");
        assert_eq!(frames.last().map(String::as_str), Some("rápidas"));
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert!(!typewriter.tick());
    }
}

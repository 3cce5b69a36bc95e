/// Forward-only reader over the remainder of a line.
pub(super) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub(super) fn starts_with(&self, c: char) -> bool {
        self.rest.starts_with(c)
    }

    /// Takes a non-empty run of non-whitespace characters.
    pub(super) fn token(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }

        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Skips a run of at least one whitespace character.
    pub(super) fn gap(&mut self) -> Option<()> {
        let trimmed = self.rest.trim_start();
        if trimmed.len() == self.rest.len() {
            return None;
        }

        self.rest = trimmed;
        Some(())
    }

    /// Takes the text between `open` and the next `close`, consuming both.
    pub(super) fn delimited(&mut self, open: char, close: char) -> Option<&'a str> {
        let inner = self.rest.strip_prefix(open)?;
        let end = inner.find(close)?;

        let value = &inner[..end];
        self.rest = &inner[end + close.len_utf8()..];
        Some(value)
    }
}

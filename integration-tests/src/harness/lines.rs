use std::io::Cursor;

/// Builds access-log lines in the format the parser accepts.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    ip: String,
    date: String,
    request: String,
    with_dash: bool,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self {
            ip: "172.16.4.20".to_string(),
            date: "2024-05-17 08:15:42.123456".to_string(),
            request: "GET /projects/260 HTTP/1.1".to_string(),
            with_dash: true,
        }
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.ip = ip.to_string();
        self
    }

    pub fn request(mut self, request: &str) -> Self {
        self.request = request.to_string();
        self
    }

    pub fn without_dash(mut self) -> Self {
        self.with_dash = false;
        self
    }

    pub fn line(&self, status: &str, size: u64) -> String {
        let dash = if self.with_dash { " -" } else { "" };
        format!(
            "{}{} [{}] \"{}\" {} {}",
            self.ip, dash, self.date, self.request, status, size
        )
    }
}

/// Joins lines into a newline-terminated in-memory stream.
pub fn stream_of<S: AsRef<str>>(lines: &[S]) -> Cursor<Vec<u8>> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    Cursor::new(text.into_bytes())
}

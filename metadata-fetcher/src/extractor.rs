use std::fmt::Display;

pub const DEFAULT_TOOL: &str = "gallery-dl";
pub const DEFAULT_MAX_POSTS: u32 = 12;

/// Argument list for a gallery-dl style extraction tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorCommand {
    program: String,
    args: Vec<String>,
}

impl ExtractorCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&mut self, arg: &str) -> &mut ExtractorCommand {
        self.args.push(arg.to_string());
        self
    }

    /// Extractor option, passed as `-o key=value`.
    pub fn option<V: Display>(&mut self, key: &str, value: V) -> &mut ExtractorCommand {
        self.arg("-o");
        self.arg(&format!("{}={}", key, value))
    }

    pub fn dump_json(&mut self) -> &mut ExtractorCommand {
        self.arg("--dump-json")
    }

    pub fn url(&mut self, url: &str) -> &mut ExtractorCommand {
        self.arg(url)
    }
}

pub fn create_extractor_command(tool: &str) -> ExtractorCommand {
    ExtractorCommand {
        program: tool.to_string(),
        args: Vec::new(),
    }
}

/// The invocation used to fetch post metadata: `-o max-posts=N --dump-json <url>`.
pub fn metadata_command(tool: &str, max_posts: u32, url: &str) -> ExtractorCommand {
    let mut cmd = create_extractor_command(tool);
    cmd.option("max-posts", max_posts).dump_json().url(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_command_arguments() {
        let cmd = metadata_command(DEFAULT_TOOL, DEFAULT_MAX_POSTS, "https://example.com/p");
        assert_eq!(cmd.program(), "gallery-dl");
        assert_eq!(
            cmd.args(),
            ["-o", "max-posts=12", "--dump-json", "https://example.com/p"]
        );
    }

    #[test]
    fn test_custom_tool_and_limit() {
        let cmd = metadata_command("/opt/bin/gdl", 3, "https://example.com/u");
        assert_eq!(cmd.program(), "/opt/bin/gdl");
        assert_eq!(cmd.args()[1], "max-posts=3");
    }
}

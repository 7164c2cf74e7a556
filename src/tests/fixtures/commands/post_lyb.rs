// Shared test fixture for the PostLyb command, seeded from json/post_lyb.json.

use crate::modules::lybs::use_cases::post_lyb::command::PostLyb;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct PostLybDto {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

pub struct PostLybBuilder {
    inner: PostLyb,
}

impl Default for PostLybBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PostLybBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/post_lyb.json").unwrap();
        let dto: PostLybDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: PostLyb {
                lyb_id: dto.lyb_id,
                title: dto.title,
                author: dto.author,
                content: dto.content,
                posttime: 1_700_000_000_000,
            },
        }
    }

    pub fn lyb_id(mut self, v: impl Into<String>) -> Self {
        self.inner.lyb_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn posttime(mut self, v: i64) -> Self {
        self.inner.posttime = v;
        self
    }

    pub fn build(self) -> PostLyb {
        self.inner
    }
}

#[cfg(test)]
mod post_lyb_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = PostLybBuilder::default().build();
        assert_eq!(built.lyb_id, "lyb-fixed-0001");
        assert_eq!(built.title, "Hello");
        assert_eq!(built.author, "Ada");
        assert_eq!(built.content, "First post");
        assert_eq!(built.posttime, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let custom = PostLybBuilder::new()
            .lyb_id("lyb-123")
            .title("t")
            .author("a")
            .content("c")
            .posttime(42)
            .build();

        assert_eq!(
            custom,
            PostLyb {
                lyb_id: "lyb-123".into(),
                title: "t".into(),
                author: "a".into(),
                content: "c".into(),
                posttime: 42,
            }
        );
    }
}

//! Listing page fixtures shared by the integration tests

/// Wraps `body` in a full document with a head section
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <div id="header"><a href="/">home</a></div>
    <div class="content" role="main">
    {body}
    </div>
</body>
</html>"#
    )
}

/// A listing page whose posts container holds `children`
#[allow(dead_code)]
pub fn listing_page(children: &[String]) -> String {
    create_test_html(
        "reddit: the front page of the internet",
        &format!(r#"<div id="siteTable" class="sitetable linklisting">{}</div>"#, children.join("\n")),
    )
}

/// Builder for one post element as the listing renders it
#[derive(Debug, Clone, Default)]
pub struct PostFixture {
    pub attrs: Vec<(String, String)>,
    pub title: Option<String>,
    pub thumbnail_src: Option<Option<String>>,
    pub comments_href: Option<String>,
}

#[allow(dead_code)]
impl PostFixture {
    pub fn new(id: &str) -> Self {
        Self::default().attr("data-fullname", id)
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Thumbnail anchor with an `<img src>` inside
    pub fn thumbnail(mut self, src: &str) -> Self {
        self.thumbnail_src = Some(Some(src.to_string()));
        self
    }

    /// Thumbnail anchor rendered as a placeholder, without an image
    pub fn placeholder_thumbnail(mut self) -> Self {
        self.thumbnail_src = Some(None);
        self
    }

    pub fn comments(mut self, href: &str) -> Self {
        self.comments_href = Some(href.to_string());
        self
    }

    pub fn render(&self) -> String {
        let attrs: String = self
            .attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{v}""#))
            .collect();

        let thumbnail = match &self.thumbnail_src {
            Some(Some(src)) => format!(
                r#"<a class="thumbnail invisible-when-pinned may-blank" href="/x"><img src="{src}" width="70" height="52" alt=""></a>"#
            ),
            Some(None) => r#"<a class="thumbnail invisible-when-pinned self may-blank" href="/x"></a>"#.to_string(),
            None => String::new(),
        };

        let title = self
            .title
            .as_ref()
            .map(|t| format!(r#"<p class="title"><a class="title may-blank" href="/x">{t}</a></p>"#))
            .unwrap_or_default();

        let buttons = self
            .comments_href
            .as_ref()
            .map(|href| {
                format!(
                    r#"<ul class="flat-list buttons"><li class="first"><a class="bylink comments may-blank" href="{href}">comments</a></li><li class="share"><a class="post-sharing-button" href="javascript:void(0)">share</a></li></ul>"#
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="thing link"{attrs}><p class="parent"></p><span class="rank">1</span>{thumbnail}<div class="entry unvoted"><div class="top-matter">{title}<p class="tagline">submitted by someone</p>{buttons}</div></div><div class="child"></div><div class="clearleft"></div></div>"#
        )
    }
}

/// `<div class="clearleft">` spacer between posts
#[allow(dead_code)]
pub fn spacer() -> String {
    r#"<div class="clearleft"></div>"#.to_string()
}

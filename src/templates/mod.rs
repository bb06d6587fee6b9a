//! Built-in page template and client assets
//!
//! The page layout is a Tera template; the client script and stylesheet are
//! written out as they are. Everything is embedded in the binary.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Client-side router, equivalent to [`crate::browser::Browser`]
pub const APP_JS: &str = include_str!("site/app.js");

/// Default stylesheet
pub const STYLE_CSS: &str = include_str!("site/style.css");

/// Template renderer with the embedded page layout
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("site/index.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the single page of the site
    pub fn render_index(&self, page: &PageData) -> Result<String> {
        let context = Context::from_serialize(page)?;
        self.render("index.html", &context)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub config: ConfigData,
    pub version: String,
    pub generated: String,
    pub post_count: usize,
    pub section_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Browser;
    use crate::content::Post;
    use crate::generator::posts_script;

    fn page() -> PageData {
        PageData {
            config: ConfigData {
                title: "Notes & Ideas".to_string(),
                language: "en".to_string(),
            },
            version: "0.1.0".to_string(),
            generated: "2026-01-01 00:00".to_string(),
            post_count: 3,
            section_count: 2,
        }
    }

    #[test]
    fn test_index_has_regions_and_scripts() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_index(&page()).unwrap();
        for id in ["sections", "notes", "post"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing {}", id);
        }
        let posts = html.find(r#"<script src="posts.js">"#).unwrap();
        let app = html.find(r#"<script src="app.js">"#).unwrap();
        assert!(posts < app);
        assert!(html.contains("3 notes in 2 sections"));
    }

    #[test]
    fn test_title_is_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_index(&page()).unwrap();
        assert!(html.contains("<title>Notes &amp; Ideas</title>"));
    }

    /// Minimal DOM for the client script: three regions, a hash and a
    /// hashchange listener
    const DOM_STUB: &str = r#"
var elements = { sections: { innerHTML: "" }, notes: { innerHTML: "" }, post: { innerHTML: "" } };
var document = { getElementById: function (id) { return elements[id]; } };
var listeners = {};
var location = { hash: "" };
var window = { addEventListener: function (name, f) { listeners[name] = f; } };
function go(hash) { location.hash = hash; listeners.hashchange(); }
"#;

    fn worked_posts() -> Vec<Post> {
        vec![
            Post::new("home", "home", "Welcome", "<p>Hi</p>"),
            Post::new("blog", "a", "First", "<p>A</p>"),
        ]
    }

    fn load_client(posts: &[Post]) -> quick_js::Context {
        let ctx = quick_js::Context::new().unwrap();
        let script = format!("{}{}{}", DOM_STUB, posts_script(posts).unwrap(), APP_JS);
        ctx.eval(&script).unwrap();
        ctx
    }

    fn region(ctx: &quick_js::Context, name: &str) -> String {
        ctx.eval_as::<String>(&format!("elements.{}.innerHTML", name))
            .unwrap()
    }

    fn view(ctx: &quick_js::Context) -> String {
        ctx.eval_as::<String>("window.currentRoute().view").unwrap()
    }

    #[test]
    fn test_client_script_worked_example() {
        let ctx = load_client(&worked_posts());

        assert_eq!(
            region(&ctx, "sections"),
            r#"<button onclick="showSection('home')">home</button><button onclick="showSection('blog')">blog</button>"#
        );
        assert_eq!(region(&ctx, "notes"), "");
        assert_eq!(view(&ctx), "section");

        ctx.eval("go('#/blog')").unwrap();
        assert_eq!(region(&ctx, "notes"), r##"<a href="#/blog/a">First</a>"##);

        ctx.eval("go('#/blog/a')").unwrap();
        assert_eq!(region(&ctx, "post"), "<h2>First</h2><p>A</p>");
        assert_eq!(view(&ctx), "post");

        ctx.eval("go('#/blog/missing')").unwrap();
        assert_eq!(region(&ctx, "post"), "<h2>First</h2><p>A</p>");
        assert_eq!(view(&ctx), "post");

        ctx.eval("go('#/')").unwrap();
        assert_eq!(region(&ctx, "notes"), r##"<a href="#/blog/a">First</a>"##);
        assert_eq!(region(&ctx, "post"), "<h2>First</h2><p>A</p>");

        ctx.eval("go('#/home')").unwrap();
        assert_eq!(region(&ctx, "notes"), "");
        assert_eq!(region(&ctx, "post"), "");
        assert_eq!(view(&ctx), "section");
    }

    #[test]
    fn test_client_script_matches_browser() {
        let posts = vec![
            Post::new("home", "home", "Welcome", "<p>Hi</p>"),
            Post::new("00-fly", "idea", "idea", "<p>Idea</p>"),
            Post::new("02-permanent", "deep_work", "deep work", "<p>Focus</p>"),
            Post::new("00-fly", "later", "later", "<ul><li>x</li></ul>"),
            Post::new("home", "about", "about", "<p>Me</p>"),
        ];
        let ctx = load_client(&posts);
        let mut browser = Browser::start(&posts);

        fn same(ctx: &quick_js::Context, browser: &Browser<'_>, step: &str) {
            assert_eq!(region(ctx, "sections"), browser.sections_markup(), "{}", step);
            assert_eq!(region(ctx, "notes"), browser.notes_markup(), "{}", step);
            assert_eq!(region(ctx, "post"), browser.post_markup(), "{}", step);
        }
        same(&ctx, &browser, "start");

        for hash in [
            "#/00-fly",
            "#/00-fly/later",
            "#/02-permanent/nope",
            "#/02-permanent",
            "#/02-permanent/deep_work",
            "#",
            "#/home/about/extra",
            "#/missing-section",
        ] {
            ctx.eval(&format!("go({:?})", hash)).unwrap();
            browser.navigate(hash);
            same(&ctx, &browser, hash);
        }
    }
}

//! Runs a generated document's scripts against a small DOM, so the embedded
//! runtime is tested as shipped.

use crate::Document;
use rquickjs::{CatchResultExt, Context, FromJs, Runtime};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::BTreeMap;

const DOM: &str = include_str!("page/dom.js");

#[derive(Debug, Serialize)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<Node>,
}
impl From<ElementRef<'_>> for Node {
    fn from(element: ElementRef<'_>) -> Self {
        let mut text = String::new();
        let mut children = Vec::new();
        for child in element.children() {
            if let Some(child) = ElementRef::wrap(child) {
                children.push(Node::from(child));
            } else if let Some(t) = child.value().as_text() {
                text.push_str(t);
            }
        }
        Self {
            tag: element.value().name().to_string(),
            attrs: element.value().attrs().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            text,
            children,
        }
    }
}

pub(crate) struct Page {
    _runtime: Runtime,
    context: Context,
}
impl Page {
    pub fn load(document: &Document) -> Self {
        Self::load_at(document, "")
    }

    /// Loads the document with `location.hash` already set, then runs its
    /// inline scripts in order.
    pub fn load_at(document: &Document, hash: &str) -> Self {
        let html = Html::parse_document(document.as_str());
        let tree = serde_json::to_string(&Node::from(html.root_element())).unwrap();
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        let page = Self { _runtime: runtime, context };

        page.run(DOM);
        page.run(&format!("__mount({tree}); window.location.hash = {};", js(hash)));
        let scripts = Selector::parse("script").unwrap();
        for script in html.select(&scripts).filter(|s| s.value().attr("type").is_none()) {
            page.run(&script.text().collect::<String>());
        }
        page
    }

    pub fn eval<T>(&self, code: &str) -> T
    where
        T: for<'js> FromJs<'js>,
    {
        self.context.with(|ctx| ctx.eval::<T, _>(code).catch(&ctx).unwrap_or_else(|err| panic!("{err}\n{code}")))
    }

    pub fn run(&self, code: &str) {
        self.eval::<()>(code)
    }

    pub fn advance(&self, ms: u64) {
        self.run(&format!("__advance({ms});"))
    }

    /// Clicks the `index`th element matching `selector` inside `#{within}`.
    pub fn click(&self, within: &str, selector: &str, index: usize) {
        self.run(&format!(
            "__dispatch(document.getElementById({}).querySelectorAll({})[{index}], 'click');",
            js(within),
            js(selector)
        ))
    }

    pub fn click_id(&self, id: &str) {
        self.run(&format!("__dispatch(document.getElementById({}), 'click');", js(id)))
    }

    /// Presses a key on the focused element; returns whether the page
    /// suppressed it.
    pub fn key(&self, code: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.eval(&format!(
            "__dispatch(document.activeElement, 'keydown', \
             {{ code: {}, ctrlKey: {ctrl}, shiftKey: {shift}, altKey: {alt}, metaKey: {meta} }}).defaultPrevented",
            js(code)
        ))
    }

    pub fn player_src(&self) -> Option<String> {
        self.eval("document.getElementById('player').getAttribute('src')")
    }

    /// Text of every element matching `selector` inside `#{within}` that is
    /// not hidden, itself or through an ancestor.
    pub fn visible_text(&self, within: &str, selector: &str) -> Vec<String> {
        self.eval(&format!(
            "document.getElementById({}).querySelectorAll({}) \
             .filter((n) => {{ for (let p = n; p; p = p.parentElement) if (p.hidden) return false; return true; }}) \
             .map((n) => n.textContent)",
            js(within),
            js(selector)
        ))
    }

    /// Indices of the elements matching `selector` inside `#{within}` that
    /// carry the `active` class.
    pub fn active(&self, within: &str, selector: &str) -> Vec<i32> {
        self.eval(&format!(
            "document.getElementById({}).querySelectorAll({}) \
             .filter((n) => n.classList.contains('active')).map((n) => Number(n.dataset.index) | 0)",
            js(within),
            js(selector)
        ))
    }
}

fn js(value: &str) -> String {
    serde_json::to_string(value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generator, Requester, Variant};
    use lectern_catalog::{Catalog, SourceRewriter};
    use lectern_config::{ViewerConfig, WatermarkConfig};
    use lectern_parse::parse_listing;
    use rstest::rstest;

    const LISTING: &str = "\
(Physics)Lect-1 Mechanics:https://cdn.example.com/classplus/v1.mp4
(Physics)Notes-1 Formulas:https://cdn.example.com/formulas.PDF
(Physics)Lect-2 Mechanics:https://cdn.example.com/open/v2.mp4
(Chemistry)Lecture 3 Organic Chemistry (Part A):https://cdn.example.com/c3.mp4
";
    const FIRST_VIDEO: &str = "https://proxy.example/?url=https%3A%2F%2Fcdn.example.com%2Fclassplus%2Fv1.mp4";

    fn catalog(listing: &str) -> Catalog {
        Catalog::from_listing(parse_listing(listing), &SourceRewriter::new(Some("https://proxy.example"), "classplus"))
    }

    fn document(catalog: &Catalog, variant: &Variant) -> Document {
        let generator = Generator::new(ViewerConfig::default(), WatermarkConfig::default()).unwrap();
        generator.generate(catalog, variant).unwrap()
    }

    fn open() -> Page {
        Page::load(&document(&catalog(LISTING), &Variant::Open))
    }

    fn protected() -> Page {
        Page::load(&document(&catalog(LISTING), &Variant::Protected(Requester::new("Asha", "42"))))
    }

    fn watermark_position(page: &Page) -> (String, String) {
        let left = page.eval("document.getElementById('watermark').style.left");
        let top = page.eval("document.getElementById('watermark').style.top");
        (left, top)
    }

    fn percent(position: &str) -> f64 {
        position.trim_end_matches('%').parse().unwrap()
    }

    #[test]
    fn test_open_autoselects_after_delay() {
        let page = open();
        assert_eq!(page.visible_text("navigator", ".folder-title").len(), 3);
        assert_eq!(page.player_src(), None);

        page.advance(499);
        assert_eq!(page.player_src(), None);
        page.advance(1);
        assert_eq!(page.player_src().as_deref(), Some(FIRST_VIDEO));
        assert_eq!(page.active("navigator", ".subject"), vec![0]);
        assert_eq!(page.visible_text("playlist", ".playlist-item"), ["Lect-1 Mechanics", "Lect-2 Mechanics"]);
        assert_eq!(page.active("playlist", ".playlist-item"), vec![0]);
    }

    #[rstest]
    #[case("", &["Mechanics", "Notes-1 Formulas", "Organic Chemistry"])]
    #[case("MECH", &["Mechanics"])]
    #[case("chem", &["Organic Chemistry"])]
    #[case("i", &["Mechanics", "Organic Chemistry"])]
    #[case("physics", &[])]
    fn test_open_search_filters_navigator(#[case] query: &str, #[case] expected: &[&str]) {
        let page = open();
        page.advance(500);
        page.run(&format!(
            "{{ const search = document.getElementById('search'); search.value = {}; __dispatch(search, 'input'); }}",
            js(query)
        ));
        // One folder per subject; matching folders expand while a query is set.
        assert_eq!(page.visible_text("navigator", ".folder-title"), expected);
        if !query.is_empty() {
            assert_eq!(page.visible_text("navigator", ".subject"), expected);
        }
        // Filtering never changes what is selected or playing.
        assert_eq!(page.active("navigator", ".subject"), vec![0]);
        assert_eq!(page.player_src().as_deref(), Some(FIRST_VIDEO));
    }

    #[test]
    fn test_open_playlist_selection() {
        let page = open();
        page.advance(500);
        page.click("playlist", ".playlist-item", 1);
        assert_eq!(page.player_src().as_deref(), Some("https://cdn.example.com/open/v2.mp4"));
        assert_eq!(page.active("playlist", ".playlist-item"), vec![1]);
    }

    #[test]
    fn test_open_documents_in_new_tab() {
        let page = open();
        page.advance(500);
        page.click("navigator", ".subject", 1);
        assert_eq!(page.player_src(), None);
        assert_eq!(page.visible_text("playlist", ".empty"), ["No videos available"]);
        assert_eq!(page.visible_text("pdf-list", ".pdf-item"), ["Notes-1 Formulas"]);
        assert!(page.eval::<bool>(
            "window.location.hash === '#' + encodeURIComponent(window.Lectern.catalog.folders[1].subjects[0].slug)"
        ));

        page.click("pdf-list", ".pdf-item", 0);
        let opened: Vec<Vec<String>> = page.eval("window.opened");
        assert_eq!(opened, [["https://cdn.example.com/formulas.PDF", "_blank", "noopener"]]);
    }

    #[test]
    fn test_open_hash_selects_subject() {
        let catalog = catalog(LISTING);
        let slug = &catalog.subjects().nth(2).unwrap().slug;
        let page = Page::load_at(&document(&catalog, &Variant::Open), &format!("#{slug}"));
        page.advance(500);
        assert_eq!(page.active("navigator", ".subject"), vec![2]);
        assert_eq!(page.player_src().as_deref(), Some("https://cdn.example.com/c3.mp4"));
    }

    #[rstest]
    #[case("#%E0%A4%A")]
    #[case("#no-such-subject")]
    fn test_open_bad_hash_boots_as_planned(#[case] hash: &str) {
        let page = Page::load_at(&document(&catalog(LISTING), &Variant::Open), hash);
        page.advance(500);
        assert_eq!(page.active("navigator", ".subject"), vec![0]);
        assert_eq!(page.player_src().as_deref(), Some(FIRST_VIDEO));
    }

    #[test]
    fn test_open_player_keys() {
        let page = open();
        assert!(!page.key("KeyF", false, false, false, false), "nothing to play yet");
        page.advance(500);

        assert!(page.key("KeyF", false, false, false, false));
        assert!(page.eval::<bool>("document.fullscreenElement === document.getElementById('player')"));
        assert!(!page.key("KeyF", true, false, false, false));

        page.run("document.getElementById('search').focus();");
        assert!(!page.key("Space", false, false, false, false));
        page.run("document.body.focus();");
        assert!(page.key("Space", false, false, false, false));
        assert!(page.eval::<bool>("document.activeElement === document.getElementById('player')"));
    }

    #[test]
    fn test_open_theme_toggle() {
        let page = open();
        assert_eq!(page.eval::<String>("document.body.className"), "light open");
        let theme = "['light', 'dark'].filter((c) => document.body.classList.contains(c)).join()";
        page.click_id("theme-toggle");
        assert_eq!(page.eval::<String>(theme), "dark");
        page.click_id("theme-toggle");
        assert_eq!(page.eval::<String>(theme), "light");
    }

    #[test]
    fn test_open_empty_catalog() {
        let page = Page::load(&document(&Catalog::default(), &Variant::Open));
        page.advance(1000);
        assert!(page.visible_text("navigator", ".subject").is_empty());
        assert_eq!(page.visible_text("playlist", ".empty"), ["Select a subject"]);
        assert_eq!(page.player_src(), None);
    }

    #[test]
    fn test_protected_autoplays() {
        let page = protected();
        assert_eq!(page.player_src().as_deref(), Some(FIRST_VIDEO));
        assert_eq!(page.visible_text("navigator", ".chip"), ["Mechanics", "Organic Chemistry"]);
        assert_eq!(page.active("navigator", ".chip"), vec![0]);

        page.click("navigator", ".chip", 1);
        assert_eq!(page.player_src().as_deref(), Some("https://cdn.example.com/c3.mp4"));
        assert_eq!(page.active("navigator", ".chip"), vec![2]);
    }

    #[test]
    fn test_protected_watermark_moves() {
        let page = protected();
        assert_eq!(page.eval::<String>("document.getElementById('watermark').style.opacity"), "0.35");
        assert_eq!(page.eval::<String>("document.getElementById('watermark').textContent"), "User: Asha | ID: 42");

        let start = watermark_position(&page);
        page.advance(2999);
        assert_eq!(watermark_position(&page), start);

        let mut previous = start;
        for _ in 0..3 {
            page.advance(3000);
            let next = watermark_position(&page);
            assert_ne!(next, previous);
            for position in [&next.0, &next.1] {
                assert!((5.0..=75.0).contains(&percent(position)), "{position} out of bounds");
            }
            previous = next;
        }
    }

    #[rstest]
    #[case("F12", false, false, false, false, true)]
    #[case("KeyI", true, true, false, false, true)]
    #[case("KeyJ", true, true, false, false, true)]
    #[case("KeyC", true, true, false, false, true)]
    #[case("KeyU", true, false, false, false, true)]
    #[case("KeyS", true, false, false, false, true)]
    #[case("KeyI", false, false, true, true, true)]
    #[case("KeyU", false, false, false, true, true)]
    #[case("KeyS", false, false, false, true, true)]
    #[case("KeyC", true, false, false, false, false)]
    #[case("KeyV", true, false, false, false, false)]
    #[case("KeyI", true, false, false, false, false)]
    #[case("KeyI", false, false, false, false, false)]
    #[case("Space", false, false, false, false, false)]
    #[case("F11", false, false, false, false, false)]
    #[case("F12", false, true, false, false, false)]
    fn test_protected_key_guard(
        #[case] code: &str,
        #[case] ctrl: bool,
        #[case] shift: bool,
        #[case] alt: bool,
        #[case] meta: bool,
        #[case] blocked: bool,
    ) {
        let page = protected();
        assert_eq!(page.key(code, ctrl, shift, alt, meta), blocked);
    }

    #[test]
    fn test_context_menu_guard() {
        let suppressed = "__dispatch(document.getElementById('player-frame'), 'contextmenu').defaultPrevented";
        assert!(protected().eval::<bool>(suppressed));
        assert!(!open().eval::<bool>(suppressed));
        assert!(!open().key("F12", false, false, false, false));
    }

    #[test]
    fn test_protected_landscape_lock() {
        let page = protected();
        let locked = "screen.orientation.locked";
        assert_eq!(page.eval::<Option<String>>(locked), None);

        page.click_id("fullscreen");
        assert!(page.eval::<bool>("document.fullscreenElement === document.getElementById('player-frame')"));
        assert_eq!(page.eval::<Option<String>>(locked).as_deref(), Some("landscape"));

        page.click_id("fullscreen");
        assert!(page.eval::<bool>("document.fullscreenElement === null"));
        assert_eq!(page.eval::<Option<String>>(locked), None);
    }

    #[test]
    fn test_protected_without_videos() {
        let catalog = catalog("(Physics)Notes-1 Formulas:https://cdn.example.com/formulas.pdf\n");
        let page = Page::load(&document(&catalog, &Variant::Protected(Requester::new("Asha", "42"))));
        page.advance(10_000);
        assert_eq!(page.player_src(), None);
        assert!(page.visible_text("navigator", ".chip").is_empty());
        assert_eq!(page.visible_text("playlist", ".empty"), ["No videos available"]);
        assert!(page.eval::<bool>("document.getElementById('watermark').style.left === undefined"));
    }
}

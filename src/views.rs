use askama::Template;

use crate::db::TodoItem;

/// The list page: add form plus every item, in the order given.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub todos: &'a [TodoItem],
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: i64, title: &str, done: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            done,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
        }
    }

    #[test]
    fn empty_list_renders_hint() {
        let html = IndexTemplate { todos: &[] }.render().expect("render failed");
        assert!(html.contains(r#"action="/add""#));
        assert!(html.contains("Nothing to do."));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn items_render_with_links_and_state() {
        let todos = vec![item(2, "Call mom", true), item(1, "Buy milk", false)];
        let html = IndexTemplate { todos: &todos }.render().expect("render failed");

        assert!(html.contains(r#"<li id="todo-2" class="done">"#));
        assert!(html.contains(r#"<li id="todo-1" class="open">"#));
        assert!(html.contains(r#"href="/toggle/1""#));
        assert!(html.contains(r#"href="/delete/2""#));
        assert!(html.contains("2024-03-09 14:05"));
        assert!(html.find("Call mom").unwrap() < html.find("Buy milk").unwrap());
    }

    #[test]
    fn titles_are_escaped() {
        let todos = vec![item(1, "<script>alert(1)</script>", false)];
        let html = IndexTemplate { todos: &todos }.render().expect("render failed");
        assert!(!html.contains("<script>"));
        assert!(html.contains("alert(1)"));
    }
}

//! Titled card shell shared by the table and the activity stream.

use super::html::{class_attr, escape_html};
use super::theme::{Slot, Theme};

/// Wrap pre-rendered `body` markup in a card with a heading.
pub fn render_card(title: &str, body: &str, theme: &dyn Theme) -> String {
    let mut html = String::new();
    html.push_str(&format!("<section{}>\n", class_attr(&[theme.class(Slot::Card)])));
    html.push_str(&format!(
        "<div{}><h3{}>{}</h3></div>\n",
        class_attr(&[theme.class(Slot::CardHeader)]),
        class_attr(&[theme.class(Slot::CardTitle)]),
        escape_html(title)
    ));
    html.push_str(&format!(
        "<div{}>\n{}</div>\n",
        class_attr(&[theme.class(Slot::CardContent)]),
        body
    ));
    html.push_str("</section>\n");
    html
}

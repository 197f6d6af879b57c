/// Server-side HTML for the birthday board
use crate::birthday::lists::ListSection;
use crate::models::{ListItem, ViewKind};
use crate::utils::datetime::month_options;
use crate::utils::listing::PageLink;
use crate::utils::string_utils::escape_html;

const PAGE_TITLE: &str = "Дни рождения";
const SEARCH_PLACEHOLDER: &str = "Поиск";
const SEARCH_BUTTON: &str = "Найти";

/// Render the whole page with one section per list
pub fn render_board(sections: &[ListSection], selected_month: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", PAGE_TITLE));
    html.push_str(&format!("<h1>{}</h1>\n", PAGE_TITLE));
    html.push_str("<form method=\"get\" action=\"/\" class=\"board\">\n");

    for section in sections {
        html.push_str(&render_section(section, sections, selected_month));
    }

    html.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>\n</body>\n</html>\n",
        SEARCH_BUTTON
    ));
    html
}

fn render_section(section: &ListSection, all: &[ListSection], selected_month: &str) -> String {
    let id = section.view.id();
    let mut html = format!("<section id=\"{}\">\n<h2>{}</h2>\n", id, section.view.title());

    if section.view == ViewKind::Month {
        html.push_str(&render_month_select(selected_month));
    }

    html.push_str(&format!(
        "<input class=\"search\" type=\"search\" name=\"{}_q\" value=\"{}\" placeholder=\"{}\">\n",
        id,
        escape_html(&section.query),
        SEARCH_PLACEHOLDER
    ));

    html.push_str("<div class=\"list\">\n");
    for item in &section.slice.items {
        html.push_str(&render_item(item));
    }
    html.push_str("</div>\n");

    if !section.slice.links.is_empty() {
        html.push_str(&render_pagination(&section.slice.links, all, selected_month));
    }

    html.push_str("</section>\n");
    html
}

/// Month selector, submitted on change
pub fn render_month_select(selected_month: &str) -> String {
    let mut html =
        String::from("<select class=\"month\" name=\"month\" onchange=\"this.form.submit()\">\n");
    for (value, name) in month_options() {
        let selected = if value == selected_month { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            value, selected, name
        ));
    }
    html.push_str("</select>\n");
    html
}

/// A single row: name on the left, date on the right
pub fn render_item(item: &ListItem) -> String {
    let iso = item
        .iso_date()
        .map(|iso| format!(" data-iso=\"{}\"", escape_html(iso)))
        .unwrap_or_default();
    let class = if item.is_placeholder() { "item empty" } else { "item" };
    format!(
        "<div class=\"{}\"><div class=\"name\">{}</div><div class=\"rus iso\"{}>{}</div></div>\n",
        class,
        escape_html(item.name()),
        iso,
        escape_html(item.display_date())
    )
}

fn render_pagination(links: &[PageLink], sections: &[ListSection], selected_month: &str) -> String {
    let mut html = String::from("<ul class=\"pagination\">\n");
    for link in links {
        match link {
            PageLink::Page { number, active } => {
                let class = if *active { " class=\"active\"" } else { "" };
                html.push_str(&format!(
                    "<li{}><a class=\"page\" href=\"{}\">{}</a></li>\n",
                    class,
                    escape_html(&page_href(sections, selected_month, *number)),
                    number
                ));
            }
            PageLink::Gap => html.push_str("<li class=\"disabled\"><span class=\"page\">…</span></li>\n"),
        }
    }
    html.push_str("</ul>\n");
    html
}

/// Link to another page of the full list, keeping the month and searches
pub fn page_href(sections: &[ListSection], selected_month: &str, page: usize) -> String {
    let mut params = vec![format!("month={}", urlencoding::encode(selected_month))];
    for section in sections.iter().filter(|s| !s.query.is_empty()) {
        params.push(format!(
            "{}_q={}",
            section.view.id(),
            urlencoding::encode(&section.query)
        ));
    }
    params.push(format!("page={}", page));
    format!("/?{}", params.join("&"))
}

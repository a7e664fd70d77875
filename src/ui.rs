use crate::nav::{FEATURES_MENU_ID, NavEntry, NavGroup};
use crate::page::Page;
use crate::panels::Output;

pub fn render_index(page: &Page) -> String {
    INDEX_HTML
        .replace(
            "{{SIDEBAR_CLASS}}",
            if page.ui.sidebar_open { "sidebar open" } else { "sidebar" },
        )
        .replace("{{FEATURES_MENU_ID}}", FEATURES_MENU_ID)
        .replace(
            "{{SUBMENU_DISPLAY}}",
            if page.ui.submenu_open { "block" } else { "none" },
        )
        .replace("{{TOP_ENTRIES}}", &render_entries(page, NavGroup::Top))
        .replace("{{FEATURE_ENTRIES}}", &render_entries(page, NavGroup::Features))
        .replace("{{HOME_CLASS}}", section_class(page, "home"))
        .replace("{{CLASSIFIER_CLASS}}", section_class(page, "classifier"))
        .replace("{{GUIDE_CLASS}}", section_class(page, "guide"))
        .replace("{{SOIL_CLASS}}", section_class(page, "soil"))
        .replace("{{FOOTPRINT_CLASS}}", section_class(page, "footprint"))
        .replace("{{NEARBY_CLASS}}", section_class(page, "nearby"))
        .replace("{{GUIDE_QUERY}}", &escape_html(&page.guide_query))
        .replace("{{GUIDE_LIST}}", &render_guide_list(&page.guide_list))
        .replace("{{PH}}", &escape_html(&page.soil_form.ph))
        .replace("{{POTASH}}", &escape_html(&page.soil_form.potash_level))
        .replace("{{ELECTRICITY}}", &escape_html(&page.footprint_form.electricity))
        .replace("{{WATER}}", &escape_html(&page.footprint_form.water))
        .replace("{{TRANSPORT}}", &escape_html(&page.footprint_form.transport))
        .replace("{{LAT}}", &escape_html(&page.nearby_form.lat))
        .replace("{{LON}}", &escape_html(&page.nearby_form.lon))
        .replace("{{CENTER_TYPE}}", &escape_html(&page.nearby_form.center_type))
        .replace("{{RESULT}}", &render_output(page.classifier.output()))
        .replace("{{SOIL_RESULT}}", &render_output(page.soil.output()))
        .replace("{{FOOTPRINT_RESULT}}", &render_output(page.footprint.output()))
        .replace("{{NEARBY_RESULT}}", &render_output(page.nearby.output()))
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // keeps user text from matching a later template placeholder
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_output(output: &Output) -> String {
    match output {
        Output::Empty => String::new(),
        Output::Text(text) => escape_html(text),
        Output::Markup(markup) => markup.clone(),
    }
}

fn section_class(page: &Page, section_id: &str) -> &'static str {
    if page.ui.is_section_active(section_id) {
        "active"
    } else {
        ""
    }
}

fn render_entries(page: &Page, group: NavGroup) -> String {
    page.nav()
        .entries()
        .iter()
        .filter(|entry| entry.group == group)
        .map(|entry| render_entry(page, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entry(page: &Page, entry: &NavEntry) -> String {
    let class = if page.ui.is_entry_active(page.nav(), &entry.entry_id) {
        " class=\"active\""
    } else {
        ""
    };
    format!(
        r#"<li id="{id}"{class}><form method="post" action="/ui/section/{section}"><button type="submit">{label}</button></form></li>"#,
        id = escape_html(&entry.entry_id),
        section = escape_html(&entry.section_id),
        label = escape_html(&entry.label),
    )
}

fn render_guide_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Eco Portal</title>
  <style>
    :root {
      --bg: #eef5ec;
      --ink: #1f2d1f;
      --accent: #2e7d32;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    header {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 12px 20px;
      background: var(--accent);
      color: white;
    }

    .sidebar {
      display: none;
      width: 240px;
      padding: 16px;
      background: var(--card);
    }

    .sidebar.open {
      display: block;
    }

    .sidebar ul {
      list-style: none;
      padding: 0;
      margin: 0;
    }

    .sidebar li.active button {
      font-weight: 600;
      color: var(--accent);
    }

    main {
      padding: 24px;
    }

    section {
      display: none;
      background: var(--card);
      border-radius: 16px;
      padding: 24px;
    }

    section.active {
      display: block;
    }

    .output {
      white-space: pre-line;
      margin-top: 12px;
    }
  </style>
</head>
<body>
  <header>
    <form method="post" action="/ui/sidebar">
      <button id="hamburger" type="submit" aria-label="Toggle menu">&#9776;</button>
    </form>
    <h1>Eco Portal</h1>
  </header>

  <nav id="sidebar" class="{{SIDEBAR_CLASS}}">
    <ul>
{{TOP_ENTRIES}}
      <li id="{{FEATURES_MENU_ID}}">
        <form method="post" action="/ui/features">
          <button type="submit" name="target" value="{{FEATURES_MENU_ID}}">Features</button>
        </form>
        <ul style="display: {{SUBMENU_DISPLAY}}">
{{FEATURE_ENTRIES}}
        </ul>
      </li>
    </ul>
  </nav>

  <main>
    <section id="home" class="{{HOME_CLASS}}">
      <h2>Welcome</h2>
      <p>Classify waste, look up recycling tips, analyse soil and estimate your carbon footprint.</p>
    </section>

    <section id="classifier" class="{{CLASSIFIER_CLASS}}">
      <h2>AI Waste Classifier</h2>
      <form method="post" action="/ui/classify" enctype="multipart/form-data">
        <input id="imageUpload" name="imageUpload" type="file" accept="image/*" />
        <button id="classifyBtn" type="submit">Classify</button>
      </form>
      <div id="result" class="output">{{RESULT}}</div>
    </section>

    <section id="guide" class="{{GUIDE_CLASS}}">
      <h2>Recycling Guide</h2>
      <form method="post" action="/ui/guide">
        <input id="guideSearch" name="query" type="text" value="{{GUIDE_QUERY}}" placeholder="Search a material" />
        <button type="submit">Search</button>
      </form>
      <ul id="guideList">
{{GUIDE_LIST}}
      </ul>
    </section>

    <section id="soil" class="{{SOIL_CLASS}}">
      <h2>Soil Analysis</h2>
      <form method="post" action="/ui/soil">
        <input id="pH" name="pH" type="text" value="{{PH}}" placeholder="pH" />
        <input id="potashLevel" name="potashLevel" type="text" value="{{POTASH}}" placeholder="Potash level" />
        <button id="soilBtn" type="submit">Analyse</button>
      </form>
      <div id="soilResult" class="output">{{SOIL_RESULT}}</div>
    </section>

    <section id="footprint" class="{{FOOTPRINT_CLASS}}">
      <h2>Carbon Footprint</h2>
      <form method="post" action="/ui/footprint">
        <input id="electricity" name="electricity" type="text" value="{{ELECTRICITY}}" placeholder="Electricity (kWh)" />
        <input id="water" name="water" type="text" value="{{WATER}}" placeholder="Water (litres)" />
        <input id="transport" name="transport" type="text" value="{{TRANSPORT}}" placeholder="Transport (km)" />
        <button id="calcBtn" type="submit">Calculate</button>
      </form>
      <div id="footprintResult" class="output">{{FOOTPRINT_RESULT}}</div>
    </section>

    <section id="nearby" class="{{NEARBY_CLASS}}">
      <h2>Nearby Recycling Centers</h2>
      <form method="post" action="/ui/nearby">
        <input id="lat" name="lat" type="text" value="{{LAT}}" placeholder="Latitude" />
        <input id="lon" name="lon" type="text" value="{{LON}}" placeholder="Longitude" />
        <input id="centerType" name="centerType" type="text" value="{{CENTER_TYPE}}" placeholder="general" />
        <button id="nearbyBtn" type="submit">Find</button>
      </form>
      <div id="nearbyResult" class="output">{{NEARBY_RESULT}}</div>
    </section>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Output;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn index_marks_only_active_section_and_entry() {
        let mut page = Page::default();
        page.show_section("guide");
        let html = render_index(&page);
        assert!(html.contains(r#"<section id="guide" class="active">"#));
        assert!(html.contains(r#"<section id="home" class="">"#));
        assert!(html.contains(r#"<li id="nav-guide" class="active">"#));
        assert!(html.contains(r#"<li id="nav-home"><form"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn index_reflects_sidebar_and_submenu() {
        let mut page = Page::default();
        let html = render_index(&page);
        assert!(html.contains(r#"<nav id="sidebar" class="sidebar">"#));
        assert!(html.contains(r#"<ul style="display: none">"#));

        page.toggle_sidebar();
        page.toggle_features_submenu(FEATURES_MENU_ID);
        let html = render_index(&page);
        assert!(html.contains(r#"<nav id="sidebar" class="sidebar open">"#));
        assert!(html.contains(r#"<ul style="display: block">"#));
    }

    #[test]
    fn outputs_escape_text_but_keep_markup() {
        let mut page = Page::default();
        page.soil.show(Output::text("<b>acidic</b>"));
        page.classifier
            .show(Output::Markup("Detected Waste Category: <strong>Metal</strong>".into()));
        page.search_material("met");
        let html = render_index(&page);
        assert!(html.contains("&lt;b&gt;acidic&lt;/b&gt;"));
        assert!(html.contains("<strong>Metal</strong>"));
        assert!(html.contains("<li>METAL: Aluminium is recyclable</li>"));
    }

    #[test]
    fn user_text_cannot_inject_placeholders() {
        let mut page = Page::default();
        page.search_material("{{RESULT}}");
        let html = render_index(&page);
        assert!(html.contains(r#"value="&#123;&#123;RESULT&#125;&#125;""#));
    }
}

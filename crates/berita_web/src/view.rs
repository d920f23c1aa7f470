//! HTML for the dashboard page.

use berita_analytics::text::NO_TRENDING_MESSAGE;
use berita_analytics::{ArticleCard, DashboardView, FilterCriteria};
use berita_core::{ArticleTable, Error};

use crate::query::FilterForm;

pub const PAGE_TITLE: &str = "Dashboard ScanSek";

/// Render the full dashboard.
pub fn render_page(
    view: &DashboardView,
    table: &ArticleTable,
    form: &FilterForm,
    criteria: &FilterCriteria,
) -> String {
    let charts = view.charts.clone().unwrap_or_default();
    let trending = match &charts.trending {
        Some(svg) => format!(r#"<div class="chart">{}</div>"#, svg),
        None => format!(r#"<div class="info">{}</div>"#, NO_TRENDING_MESSAGE),
    };
    let query = html_escape(&form.to_query());

    let body = format!(
        r#"
    <aside class="sidebar">
        <h2>🔍 Filter &amp; Info</h2>
        <p>Total Artikel: <strong>{total}</strong></p>
        {sidebar}
    </aside>
    <main>
        <h1 class="title">📊 Dashboard Berita Kesehatan</h1>
        <p class="subtitle">Visualisasi hasil scraping dari berbagai sumber berita bertema kesehatan.</p>

        <section>
            <h3>📈 Jumlah Artikel per Sumber Berita</h3>
            <div class="chart">{sources_chart}</div>
        </section>

        <section>
            <h3>☁️ Word Cloud dari Judul Artikel</h3>
            <div class="chart">{word_cloud}</div>
        </section>

        <section>
            <h3>🔥 5 Kata Trending dari Judul Berita</h3>
            {trending}
        </section>

        <section>
            <h3>📰 Daftar Berita Kesehatan</h3>
            <div class="pager">
                <form method="post" action="/page/prev?{query}"><button type="submit">⬅️ Sebelumnya</button></form>
                <span></span>
                <form method="post" action="/page/next?{query}"><button type="submit">➡️ Selanjutnya</button></form>
            </div>
            <div class="grid">{grid}</div>
            <p class="page-label">{page_label}</p>
        </section>
    </main>"#,
        total = view.total_articles,
        sidebar = sidebar(table, form, criteria),
        sources_chart = charts.sources,
        word_cloud = charts.word_cloud,
        trending = trending,
        query = query,
        grid = grid(view),
        page_label = html_escape(&view.page_label),
    );

    base_template(PAGE_TITLE, &body)
}

/// Shown when the render pass could not run, e.g. the store is down.
pub fn error_page(error: &Error) -> String {
    let message = match error {
        Error::Connection(detail) => format!("Gagal terhubung ke basis data: {}", detail),
        other => format!("Terjadi kesalahan: {}", other),
    };
    let body = format!(
        r#"
    <main>
        <h1 class="title">📊 Dashboard Berita Kesehatan</h1>
        <div class="error">{}</div>
    </main>"#,
        html_escape(&message)
    );
    base_template(PAGE_TITLE, &body)
}

fn sidebar(table: &ArticleTable, form: &FilterForm, criteria: &FilterCriteria) -> String {
    let sources = options(&table.unique_sources(), |s| criteria.sources.contains(s));
    let categories = options(&table.unique_categories(), |c| criteria.categories.contains(c));
    format!(
        r#"<form method="get" action="/">
            <input type="hidden" name="applied" value="1">
            <label for="source">Pilih sumber berita:</label>
            <select id="source" name="source" multiple size="6">{sources}</select>
            <label for="q">Cari judul artikel...</label>
            <input id="q" type="text" name="q" value="{search}" placeholder="Cari judul artikel...">
            <label for="category">Pilih kategori:</label>
            <select id="category" name="category" multiple size="6">{categories}</select>
            <button type="submit">Terapkan</button>
        </form>"#,
        sources = sources,
        search = html_escape(&form.search),
        categories = categories,
    )
}

fn options(values: &[String], selected: impl Fn(&str) -> bool) -> String {
    values
        .iter()
        .map(|value| {
            let escaped = html_escape(value);
            let flag = if selected(value.as_str()) { " selected" } else { "" };
            format!(r#"<option value="{escaped}"{flag}>{escaped}</option>"#)
        })
        .collect()
}

fn grid(view: &DashboardView) -> String {
    view.columns
        .iter()
        .map(|column| {
            let cards: String = column.iter().map(card).collect();
            format!(r#"<div class="column">{}</div>"#, cards)
        })
        .collect()
}

fn card(card: &ArticleCard) -> String {
    format!(
        r#"<div class="card">
            <h4>{title}</h4>
            <p>{description}</p>
            <a href="{link}" target="_blank" rel="noopener">🔗 Baca selengkapnya</a>
        </div>"#,
        title = html_escape(&card.title),
        description = html_escape(&card.description),
        link = html_escape(&card.link),
    )
}

fn base_template(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>{body}
</body>
</html>
"#,
        title = html_escape(title),
        css = CSS,
        body = body,
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const CSS: &str = r#"
body { margin: 0; display: flex; font-family: sans-serif; color: #222; }
.sidebar { width: 280px; min-height: 100vh; padding: 20px; background: #f0f2f6; box-sizing: border-box; }
.sidebar form { display: flex; flex-direction: column; gap: 8px; }
main { flex: 1; padding: 20px 40px; }
.title { text-align: center; color: #007acc; }
.subtitle { text-align: center; }
.chart svg { max-width: 100%; height: auto; }
.info { padding: 12px; border-radius: 8px; background: #e8f0fe; color: #1c4e80; }
.error { padding: 12px; border-radius: 8px; background: #fdecea; color: #8a1c1c; }
.pager { display: grid; grid-template-columns: 1fr 2fr 1fr; margin-bottom: 15px; }
.pager form:last-child { text-align: right; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }
.card { border: 1px solid #ccc; border-radius: 12px; padding: 15px; margin-bottom: 15px; background-color: #f9f9f9; }
.card h4 { margin-bottom: 10px; }
.card p { font-size: 14px; color: #555; }
.page-label { text-align: center; }
"#;

use crate::models::Panels;
use crate::sort::SortColumn;
use crate::tracker::{DUPLICATE_WARNING, Screen};
use crate::view::{ChartSeries, TableRow, UrlLink};
use plotters::prelude::*;
use std::error::Error;
use std::time::Duration;
use tracing::error;

pub const WARNING_DISMISS: Duration = Duration::from_millis(3000);
pub const SHAKE_CUE: Duration = Duration::from_millis(820);
pub const PRELOADER_DELAY: Duration = Duration::from_millis(1600);
pub const PRELOADER_FADE: Duration = Duration::from_millis(500);

const CHART_SIZE: (u32, u32) = (600, 280);
const CHART_PLACEHOLDER: &str = r#"<p class="chart-empty">No products tracked yet.</p>"#;
const BAR_COLOR: RGBColor = RGBColor(102, 187, 106);

/// Renders the whole page. `status` is the outcome a form fallback redirected
/// with; a duplicate shows the warning popup on load.
pub fn render_page(screen: &Screen, status: Option<&str>) -> String {
    let table = render_table_body(&screen.table);
    let chart = render_chart(screen);
    let links = render_links(&screen.links);
    let synced = render_synced(screen);
    let warning_ms = WARNING_DISMISS.as_millis().to_string();
    let shake_ms = SHAKE_CUE.as_millis().to_string();
    let delay_ms = PRELOADER_DELAY.as_millis().to_string();
    let fade_ms = PRELOADER_FADE.as_millis().to_string();
    let warning = (status == Some("duplicate")).then_some(DUPLICATE_WARNING);
    let warning_class = if warning.is_some() { "" } else { "hidden" };

    fill(
        INDEX_HTML,
        &[
            ("NAME_HEADER", SortColumn::ProductName.header()),
            ("PERCENT_HEADER", SortColumn::Percentage.header()),
            ("TABLE_ROWS", table.as_str()),
            ("CHART", chart.as_str()),
            ("URL_LIST", links.as_str()),
            ("SYNCED", synced.as_str()),
            ("WARNING_CLASS", warning_class),
            ("WARNING_TEXT", warning.unwrap_or_default()),
            ("WARNING_MS", warning_ms.as_str()),
            ("SHAKE_MS", shake_ms.as_str()),
            ("PRELOADER_DELAY_MS", delay_ms.as_str()),
            ("PRELOADER_FADE_MS", fade_ms.as_str()),
        ],
    )
}

/// Fragments for the page to swap in. Sorting leaves the link list alone,
/// so callers pass `include_links = false` there.
pub fn render_panels(screen: &Screen, include_links: bool) -> Panels {
    Panels {
        table: render_table_body(&screen.table),
        chart: render_chart(screen),
        links: include_links.then(|| render_links(&screen.links)),
        synced: render_synced(screen),
    }
}

pub fn render_table_body(rows: &[TableRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                r#"<tr class="{}"><td class="cell">{}</td><td class="cell">{}</td></tr>"#,
                row.shade.class(),
                escape_html(&row.name),
                escape_html(&row.percentage)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_links(links: &[UrlLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape_html(safe_href(&link.href)),
                escape_html(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_chart(screen: &Screen) -> String {
    let (Some(series), Some(id)) = (&screen.chart, screen.chart_id) else {
        return CHART_PLACEHOLDER.to_string();
    };
    match bar_chart_svg(series) {
        Ok(svg) => format!(
            r#"<figure id="chart-{id}" class="chart" aria-label="{}">{svg}</figure>"#,
            escape_html(series.title)
        ),
        Err(err) => {
            error!("failed to draw chart {id}: {err}");
            CHART_PLACEHOLDER.to_string()
        }
    }
}

fn render_synced(screen: &Screen) -> String {
    match &screen.synced_at {
        Some(time) => format!("Last synced {}", escape_html(time)),
        None => "Not synced yet".to_string(),
    }
}

fn bar_chart_svg(series: &ChartSeries) -> Result<String, Box<dyn Error>> {
    let min = series.values.iter().copied().fold(0.0_f64, f64::min);
    let mut max = series.values.iter().copied().fold(0.0_f64, f64::max);
    if min == max {
        max += 1.0;
    }
    let count = series.values.len();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .caption(series.title, ("sans-serif", 14).into_font())
            .x_label_area_size(40)
            .y_label_area_size(48)
            .build_cartesian_2d((0..count).into_segmented(), min..max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count + 1)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) => {
                    series.labels.get(*index).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .y_desc("Percentage")
            .y_label_formatter(&|value| format_axis_value(*value))
            .draw()?;

        let bar = |index: usize, value: f64, style: ShapeStyle| {
            let mut rect = Rectangle::new(
                [
                    (SegmentValue::Exact(index), value.min(0.0)),
                    (SegmentValue::Exact(index + 1), value.max(0.0)),
                ],
                style,
            );
            rect.set_margin(0, 0, 6, 6);
            rect
        };
        chart.draw_series(
            series
                .values
                .iter()
                .enumerate()
                .map(|(index, &value)| bar(index, value, BAR_COLOR.mix(0.6).filled())),
        )?;
        chart.draw_series(
            series
                .values
                .iter()
                .enumerate()
                .map(|(index, &value)| bar(index, value, BAR_COLOR.stroke_width(1))),
        )?;

        root.present()?;
    }
    Ok(buffer)
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn safe_href(href: &str) -> &str {
    let scheme = href.trim_start().to_ascii_lowercase();
    if ["javascript:", "data:", "vbscript:"]
        .iter()
        .any(|prefix| scheme.starts_with(prefix))
    {
        "#"
    } else {
        href
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Substitutes `{{KEY}}` markers in one pass, so substituted text is never
/// scanned for markers itself.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sustainability Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ee;
      --bg-2: #c8e6c9;
      --ink: #1f2a22;
      --accent: #43a047;
      --accent-2: #2e5e3a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(46, 94, 58, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4faf4 60%, #ffffff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5b6b5e;
    }

    .hidden {
      display: none !important;
    }

    #dropZone {
      border: 2px dashed var(--accent);
      border-radius: 20px;
      padding: 36px 18px;
      text-align: center;
      cursor: pointer;
      transition: background 150ms ease;
    }

    .bg-eco-green-100 {
      background: #e8f5e9;
    }

    .bg-eco-green-200 {
      background: #c8e6c9;
    }

    .bg-white {
      background: #ffffff;
    }

    .animate-shake {
      animation: shake 820ms cubic-bezier(0.36, 0.07, 0.19, 0.97) both;
    }

    @keyframes shake {
      10%, 90% { transform: translateX(-1px); }
      20%, 80% { transform: translateX(2px); }
      30%, 50%, 70% { transform: translateX(-4px); }
      40%, 60% { transform: translateX(4px); }
    }

    .panel {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(46, 94, 58, 0.08);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th {
      text-align: left;
      padding: 12px;
      cursor: pointer;
      color: var(--accent-2);
      border-bottom: 2px solid #c8e6c9;
    }

    .cell {
      padding: 12px;
      border-bottom: 1px solid #c8e6c9;
    }

    .chart {
      margin: 0;
    }

    .chart svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-empty {
      color: #6b7a6e;
      text-align: center;
    }

    #urlList {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 6px;
    }

    #urlList a {
      color: var(--accent-2);
    }

    .toolbar {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
      color: #5b6b5e;
      font-size: 0.9rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.secondary {
      background: #e0e0e0;
      color: var(--ink);
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(31, 42, 34, 0.45);
      display: grid;
      place-items: center;
    }

    .modal {
      background: white;
      border-radius: 20px;
      padding: 24px;
      width: min(480px, 92vw);
      display: grid;
      gap: 14px;
    }

    .modal input {
      padding: 12px;
      border-radius: 12px;
      border: 1px solid #c8e6c9;
      font-size: 1rem;
    }

    .modal .actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    #warningPopup {
      position: fixed;
      top: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: #c63b2b;
      color: white;
      padding: 12px 20px;
      border-radius: 999px;
    }

    .loader {
      position: fixed;
      bottom: 24px;
      right: 24px;
      background: var(--accent-2);
      color: white;
      padding: 10px 18px;
      border-radius: 999px;
    }

    #preloader {
      position: fixed;
      inset: 0;
      background: var(--bg-1);
      display: grid;
      place-items: center;
      transition: opacity 500ms ease;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.6rem;
      color: var(--accent-2);
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px;
      }
    }
  </style>
</head>
<body>
  <div id="preloader">Sustainability Tracker</div>

  <main class="app">
    <header>
      <h1>Sustainability Tracker</h1>
      <p class="subtitle">Drop a product link, or click the box to paste one.</p>
    </header>

    <section id="dropZone">Drop a product URL here</section>

    <div class="toolbar">
      <span id="synced">{{SYNCED}}</span>
      <button id="resetBtn" type="button">Reset</button>
    </div>

    <noscript>
      <form class="panel" method="post" action="/submit">
        <input name="url" placeholder="https://" />
        <button type="submit">Track</button>
      </form>
      <form method="post" action="/reset">
        <button type="submit" class="secondary">Reset without scripts</button>
      </form>
    </noscript>

    <section class="panel">
      <h2>Products</h2>
      <table id="productTable">
        <thead>
          <tr><th>{{NAME_HEADER}}</th><th>{{PERCENT_HEADER}}</th></tr>
        </thead>
        <tbody>
{{TABLE_ROWS}}
        </tbody>
      </table>
    </section>

    <section class="panel">
      <h2>Comparison</h2>
      <div id="chartBox">{{CHART}}</div>
    </section>

    <section class="panel">
      <h2>Tracked URLs</h2>
      <ul id="urlList">
{{URL_LIST}}
      </ul>
    </section>
  </main>

  <div id="urlInputModal" class="overlay hidden">
    <div class="modal">
      <h2>Track a product</h2>
      <input id="urlInput" type="text" placeholder="https://" />
      <div class="actions">
        <button id="cancelUrlInput" type="button" class="secondary">Cancel</button>
        <button id="submitUrl" type="button">Submit</button>
      </div>
    </div>
  </div>

  <div id="warningPopup" class="{{WARNING_CLASS}}">{{WARNING_TEXT}}</div>
  <div id="fetch-loader" class="loader hidden">Fetching product data...</div>

  <script>
    const WARNING_MS = {{WARNING_MS}};
    const SHAKE_MS = {{SHAKE_MS}};
    const PRELOADER_DELAY_MS = {{PRELOADER_DELAY_MS}};
    const PRELOADER_FADE_MS = {{PRELOADER_FADE_MS}};

    const dropZone = document.getElementById('dropZone');
    const productTable = document.getElementById('productTable');
    const tableBody = productTable.querySelector('tbody');
    const chartBox = document.getElementById('chartBox');
    const urlList = document.getElementById('urlList');
    const syncedEl = document.getElementById('synced');
    const resetBtn = document.getElementById('resetBtn');
    const warningPopup = document.getElementById('warningPopup');
    const urlInputModal = document.getElementById('urlInputModal');
    const urlInput = document.getElementById('urlInput');
    const cancelUrlInput = document.getElementById('cancelUrlInput');
    const submitUrl = document.getElementById('submitUrl');
    const loader = document.getElementById('fetch-loader');

    window.addEventListener('load', () => {
      if (!warningPopup.classList.contains('hidden')) {
        setTimeout(() => {
          warningPopup.classList.add('hidden');
        }, WARNING_MS);
      }
      const preloader = document.getElementById('preloader');
      setTimeout(() => {
        preloader.style.opacity = '0';
        setTimeout(() => {
          preloader.style.display = 'none';
        }, PRELOADER_FADE_MS);
      }, PRELOADER_DELAY_MS);
    });

    const postJson = async (url, payload) => {
      const options = { method: 'POST' };
      if (payload !== undefined) {
        options.headers = { 'Content-Type': 'application/json' };
        options.body = JSON.stringify(payload);
      }
      const response = await fetch(url, options);
      if (!response.ok) {
        throw new Error(`request failed with status ${response.status}`);
      }
      return response.json();
    };

    const applyPanels = (panels) => {
      if (!panels) {
        return;
      }
      tableBody.innerHTML = panels.table;
      chartBox.innerHTML = panels.chart;
      syncedEl.textContent = panels.synced;
      if (typeof panels.links === 'string') {
        urlList.innerHTML = panels.links;
      }
    };

    const showWarning = (message) => {
      warningPopup.textContent = message || 'Duplicate URL rejected!';
      warningPopup.classList.remove('hidden');
      setTimeout(() => {
        warningPopup.classList.add('hidden');
      }, WARNING_MS);
    };

    const rejectAnimation = () => {
      dropZone.classList.add('animate-shake');
      setTimeout(() => {
        dropZone.classList.remove('animate-shake');
      }, SHAKE_MS);
    };

    const rejectDuplicate = (message) => {
      showWarning(message);
      rejectAnimation();
    };

    // The loader only covers the backend fetch, so duplicates and blank
    // input are vetted first without it.
    const submitLink = async (source, text) => {
      let verdict;
      try {
        verdict = await postJson('/api/check', { source, text });
      } catch (error) {
        console.error('Error checking URL:', error);
        return;
      }
      if (verdict.status === 'duplicate') {
        rejectDuplicate(verdict.message);
        return;
      }
      if (verdict.status !== 'new') {
        return;
      }

      loader.classList.remove('hidden');
      try {
        const body = await postJson('/api/submit', { source, text });
        if (body.status === 'duplicate') {
          rejectDuplicate(body.message);
        }
        applyPanels(body.panels);
      } catch (error) {
        console.error('Error adding product:', error);
      } finally {
        loader.classList.add('hidden');
      }
    };

    dropZone.addEventListener('dragover', (event) => {
      event.preventDefault();
      dropZone.classList.add('bg-eco-green-200');
    });

    dropZone.addEventListener('dragleave', () => {
      dropZone.classList.remove('bg-eco-green-200');
    });

    dropZone.addEventListener('drop', (event) => {
      event.preventDefault();
      dropZone.classList.remove('bg-eco-green-200');
      submitLink('drop', event.dataTransfer.getData('text'));
    });

    dropZone.addEventListener('click', () => {
      urlInputModal.classList.remove('hidden');
      urlInput.focus();
    });

    cancelUrlInput.addEventListener('click', () => {
      urlInputModal.classList.add('hidden');
      urlInput.value = '';
    });

    submitUrl.addEventListener('click', () => {
      const text = urlInput.value;
      if (text.trim()) {
        submitLink('typed', text);
        urlInputModal.classList.add('hidden');
        urlInput.value = '';
      }
    });

    productTable.querySelectorAll('th').forEach((th) => {
      th.addEventListener('click', async () => {
        try {
          const body = await postJson('/api/sort', { header: th.textContent.trim() });
          applyPanels(body.panels);
        } catch (error) {
          console.error('Error sorting products:', error);
        }
      });
    });

    resetBtn.addEventListener('click', async () => {
      try {
        const body = await postJson('/api/reset');
        if (body.status !== 'cleared') {
          throw new Error('backend reset failed');
        }
        applyPanels(body.panels);
      } catch (error) {
        console.error('Error resetting data:', error);
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CHART_TITLE, RowShade};

    fn screen() -> Screen {
        Screen {
            table: vec![
                TableRow {
                    shade: RowShade::Tinted,
                    name: "<b>Tote</b>".to_string(),
                    percentage: "+5.20%".to_string(),
                },
                TableRow {
                    shade: RowShade::Plain,
                    name: "Satchel".to_string(),
                    percentage: "-3.10%".to_string(),
                },
            ],
            chart: Some(ChartSeries {
                title: CHART_TITLE,
                labels: vec!["<b>Tote</b>".to_string(), "Satchel".to_string()],
                values: vec![5.2, -3.1],
            }),
            chart_id: Some(7),
            links: vec![UrlLink {
                href: "https://shop.test/tote?a=1&b=2".to_string(),
                label: "https://shop.test/tote?a=1&b=2".to_string(),
            }],
            loading: false,
            synced_at: Some("12:30:00".to_string()),
        }
    }

    fn empty_screen() -> Screen {
        Screen {
            table: Vec::new(),
            chart: None,
            chart_id: None,
            links: Vec::new(),
            loading: false,
            synced_at: None,
        }
    }

    #[test]
    fn page_fills_every_marker() {
        let html = render_page(&screen(), None);
        assert!(!html.contains("{{"));
        assert!(html.contains("const WARNING_MS = 3000;"));
        assert!(html.contains("const SHAKE_MS = 820;"));
        assert!(html.contains("<th>Product Name</th><th>Percentage</th>"));
        assert!(html.contains("Last synced 12:30:00"));
        assert!(html.contains(r#"<figure id="chart-7""#));
        assert!(html.contains(r#"<div id="warningPopup" class="hidden"></div>"#));
    }

    #[test]
    fn loader_starts_hidden_even_while_an_add_is_pending() {
        let mut busy = screen();
        busy.loading = true;
        let html = render_page(&busy, None);
        assert!(html.contains(r#"<div id="fetch-loader" class="loader hidden">"#));
    }

    #[test]
    fn duplicate_status_shows_warning_on_load() {
        let html = render_page(&empty_screen(), Some("duplicate"));
        assert!(html.contains(r#"<div id="warningPopup" class="">Duplicate URL rejected!</div>"#));

        for status in [Some("added"), Some("cleared"), Some("<script>"), None] {
            let html = render_page(&empty_screen(), status);
            assert!(html.contains(r#"<div id="warningPopup" class="hidden"></div>"#));
        }
    }

    #[test]
    fn names_and_links_are_escaped() {
        let html = render_page(&screen(), None);
        assert!(html.contains("&lt;b&gt;Tote&lt;/b&gt;"));
        assert!(!html.contains("<b>Tote</b>"));
        assert!(html.contains(r#"href="https://shop.test/tote?a=1&amp;b=2" target="_blank""#));
    }

    #[test]
    fn table_body_has_one_row_per_entry_with_shade() {
        let body = render_table_body(&screen().table);
        assert_eq!(body.matches("<tr ").count(), 2);
        assert!(body.starts_with(r#"<tr class="bg-eco-green-100">"#));
        assert!(body.contains(r#"<tr class="bg-white">"#));
        assert!(render_table_body(&[]).is_empty());
    }

    #[test]
    fn chart_is_an_svg_figure_with_title_and_labels() {
        let figure = render_chart(&screen());
        assert!(figure.starts_with(r#"<figure id="chart-7" class="chart""#));
        assert!(figure.ends_with("</figure>"));
        assert!(figure.contains("<svg"));
        assert!(figure.contains("</svg>"));
        assert!(figure.contains(CHART_TITLE));
        assert!(figure.contains("Satchel"));
        assert!(figure.contains("&lt;b&gt;Tote&lt;/b&gt;"));
        assert!(!figure.contains("<b>Tote</b>"));
    }

    #[test]
    fn chart_svg_has_drawing_size() {
        let series = screen().chart.unwrap();
        let svg = bar_chart_svg(&series).unwrap();
        assert!(svg.contains(r#"width="600""#));
        assert!(svg.contains(r#"height="280""#));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn empty_screen_renders_placeholders() {
        let screen = empty_screen();
        let panels = render_panels(&screen, true);
        assert!(panels.table.is_empty());
        assert!(panels.chart.contains("No products tracked yet."));
        assert_eq!(panels.links.as_deref(), Some(""));
        assert_eq!(panels.synced, "Not synced yet");
    }

    #[test]
    fn sort_panels_skip_links() {
        let panels = render_panels(&screen(), false);
        assert!(panels.links.is_none());
    }

    #[test]
    fn script_links_are_neutralised() {
        let links = [UrlLink {
            href: "JavaScript:alert(1)".to_string(),
            label: "JavaScript:alert(1)".to_string(),
        }];
        assert!(render_links(&links).contains(r##"href="#""##));
    }

    #[test]
    fn fill_does_not_rescan_substitutions() {
        let out = fill("<{{A}}|{{B}}|{{C}}>", &[("A", "{{B}}"), ("B", "b")]);
        assert_eq!(out, "<{{B}}|b|{{C}}>");
    }

    #[test]
    fn axis_values_drop_needless_decimals() {
        assert_eq!(format_axis_value(10.0), "10");
        assert_eq!(format_axis_value(2.25), "2.3");
        assert_eq!(format_axis_value(-1.5), "-1.5");
    }
}

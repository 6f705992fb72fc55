use crate::models::Product;
use serde::Serialize;

pub const TABLE_NAME_MAX: usize = 30;
pub const CHART_LABEL_MAX: usize = 20;
pub const LINK_LABEL_MAX: usize = 40;
pub const CHART_TITLE: &str = "Sustainability Percentage";

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowShade {
    Tinted,
    Plain,
}

impl RowShade {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowShade::Tinted
        } else {
            RowShade::Plain
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RowShade::Tinted => "bg-eco-green-100",
            RowShade::Plain => "bg-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub shade: RowShade,
    pub name: String,
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub table: Vec<TableRow>,
    pub chart: ChartSeries,
    pub links: Vec<UrlLink>,
}

pub fn render(products: &[Product]) -> ViewModel {
    ViewModel {
        table: table_rows(products),
        chart: chart_series(products),
        links: url_links(products),
    }
}

pub fn table_rows(products: &[Product]) -> Vec<TableRow> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| TableRow {
            shade: RowShade::for_index(index),
            name: truncate(&product.product_name, TABLE_NAME_MAX),
            percentage: format_percentage(product.percentage),
        })
        .collect()
}

pub fn chart_series(products: &[Product]) -> ChartSeries {
    ChartSeries {
        title: CHART_TITLE,
        labels: products
            .iter()
            .map(|product| truncate(&product.product_name, CHART_LABEL_MAX))
            .collect(),
        values: products
            .iter()
            .map(|product| product.percentage.unwrap_or(0.0))
            .collect(),
    }
}

pub fn url_links(products: &[Product]) -> Vec<UrlLink> {
    products
        .iter()
        .map(|product| UrlLink {
            href: product.url.clone(),
            label: truncate(&product.url, LINK_LABEL_MAX),
        })
        .collect()
}

/// Cuts `text` to `max_len` characters, the last three being `...`.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(value) if value != 0.0 && !value.is_nan() => {
            let sign = if value > 0.0 { "+" } else { "" };
            format!("{sign}{value:.2}%")
        }
        _ => "0%".to_string(),
    }
}

//! Bar charts rendered to SVG strings.

use berita_core::{Error, Result};
use plotters::prelude::*;

use crate::aggregate::SourceCount;
use crate::text::WordCount;

pub const SOURCE_BAR_COLOR: RGBColor = RGBColor(0x4d, 0xa6, 0xff);
pub const TRENDING_BAR_COLOR: RGBColor = RGBColor(0xfa, 0x80, 0x72);

const FONT: &str = "sans-serif";

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Layout of a single bar chart.
#[derive(Debug, Clone)]
pub struct BarChartSpec<'a> {
    pub caption: Option<&'a str>,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub color: RGBColor,
    pub size: (u32, u32),
}

/// Draw one bar per `(label, value)`. No bars still yields a valid, empty
/// chart.
pub fn bar_chart(bars: &[(String, usize)], spec: &BarChartSpec<'_>) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, spec.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let slots = bars.len().max(1) as u32;
        let top = bars.iter().map(|(_, v)| *v).max().unwrap_or(0) as u32 + 1;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(50);
        if let Some(caption) = spec.caption {
            builder.caption(caption, (FONT, 22));
        }
        let mut chart = builder
            .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..top)
            .map_err(render_error)?;

        let label = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => bars
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots as usize + 1)
            .x_label_formatter(&label)
            .x_desc(spec.x_desc)
            .y_desc(spec.y_desc)
            .label_style((FONT, 13))
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(spec.color.filled())
                    .margin(8)
                    .data(bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v as u32))),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

/// "Jumlah Artikel per Sumber Berita".
pub fn source_chart(counts: &[SourceCount]) -> Result<String> {
    let bars: Vec<(String, usize)> = counts
        .iter()
        .map(|c| (c.source.clone(), c.count))
        .collect();
    bar_chart(
        &bars,
        &BarChartSpec {
            caption: None,
            x_desc: "Sumber Berita",
            y_desc: "Jumlah Artikel",
            color: SOURCE_BAR_COLOR,
            size: (1000, 500),
        },
    )
}

/// "5 Kata Paling Trending".
pub fn trending_chart(words: &[WordCount]) -> Result<String> {
    let bars: Vec<(String, usize)> = words.iter().map(|w| (w.word.clone(), w.count)).collect();
    bar_chart(
        &bars,
        &BarChartSpec {
            caption: Some("5 Kata Paling Trending"),
            x_desc: "Kata",
            y_desc: "Frekuensi",
            color: TRENDING_BAR_COLOR,
            size: (640, 480),
        },
    )
}

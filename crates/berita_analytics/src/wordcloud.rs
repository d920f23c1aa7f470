//! Word cloud of the filtered titles.
//!
//! Words are counted, scaled by relative frequency and placed on an
//! Archimedean spiral starting at the canvas centre. The first free spot
//! wins; a word that does not fit is retried smaller, and once a word fails
//! at the minimum size the cloud is considered full. The layout is
//! deterministic so the same titles always give the same picture.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use plotters::prelude::*;
use regex::Regex;

use berita_core::Result;

use crate::charts::render_error;
use crate::stopwords::is_stopword;
use crate::text::{most_common, WordCount};

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 400;
pub const MAX_WORDS: usize = 200;

const MIN_FONT: u32 = 10;
const SHRINK: f64 = 0.8;
const RELATIVE_SCALING: f64 = 0.5;
const SPIRAL_STEP: f64 = 0.1;
const GLYPH_WIDTH: f64 = 0.6;
const PADDING: i32 = 2;

const PALETTE: [RGBColor; 6] = [
    RGBColor(0x44, 0x01, 0x54),
    RGBColor(0x3b, 0x52, 0x8b),
    RGBColor(0x21, 0x90, 0x8d),
    RGBColor(0x5d, 0xc8, 0x63),
    RGBColor(0x2c, 0x72, 0x8e),
    RGBColor(0x47, 0x2d, 0x7b),
];

lazy_static! {
    static ref CLOUD_TOKEN: Regex = Regex::new(r"\w[\w']+").unwrap();
}

/// Fixed canvas the cloud is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub color: RGBColor,
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside(&self, canvas: Canvas) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.w <= canvas.width as i32
            && self.y + self.h <= canvas.height as i32
    }
}

/// Word counts for the cloud: `\w[\w']+` tokens with a trailing `'s`
/// removed, numbers and stopwords dropped, most frequent first.
pub fn cloud_frequencies(text: &str) -> Vec<WordCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in CLOUD_TOKEN.find_iter(text).map(|m| m.as_str()) {
        let word = token.strip_suffix("'s").unwrap_or(token);
        if word.is_empty() || word.chars().all(|c| c.is_numeric()) || is_stopword(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    most_common(counts, MAX_WORDS)
}

/// Estimated box of `text` at `font_size`.
fn text_extent(text: &str, font_size: u32) -> (i32, i32) {
    let chars = text.chars().count() as f64;
    let w = (chars * font_size as f64 * GLYPH_WIDTH).ceil() as i32 + PADDING * 2;
    let h = font_size as i32 + PADDING * 2;
    (w, h)
}

fn find_spot(w: i32, h: i32, canvas: Canvas, taken: &[Rect]) -> Option<Rect> {
    let cx = canvas.width as f64 / 2.0;
    let cy = canvas.height as f64 / 2.0;
    let aspect = canvas.width as f64 / canvas.height as f64;
    // Past this radius every point of the spiral lies outside the canvas.
    let max_radius = (cx / aspect).max(cy) + w.max(h) as f64;

    let mut t: f64 = 0.0;
    while t <= max_radius {
        let x = cx + t * t.cos() * aspect - w as f64 / 2.0;
        let y = cy + t * t.sin() - h as f64 / 2.0;
        let candidate = Rect {
            x: x.round() as i32,
            y: y.round() as i32,
            w,
            h,
        };
        if candidate.inside(canvas) && !taken.iter().any(|r| r.overlaps(&candidate)) {
            return Some(candidate);
        }
        t += SPIRAL_STEP;
    }
    None
}

/// Place the words, largest first.
pub fn layout(words: &[WordCount], canvas: Canvas) -> Vec<PlacedWord> {
    let Some(max_count) = words.first().map(|w| w.count) else {
        return Vec::new();
    };
    let max_font = (canvas.height / 4).max(MIN_FONT);

    let mut taken: Vec<Rect> = Vec::new();
    let mut placed = Vec::new();
    'words: for (i, word) in words.iter().enumerate() {
        let ratio = word.count as f64 / max_count as f64;
        let scale = ratio.powf(RELATIVE_SCALING);
        let mut font_size = ((max_font as f64 * scale).round() as u32).max(MIN_FONT);

        loop {
            let (w, h) = text_extent(&word.word, font_size);
            if let Some(rect) = find_spot(w, h, canvas, &taken) {
                taken.push(rect);
                placed.push(PlacedWord {
                    text: word.word.clone(),
                    x: rect.x + PADDING,
                    y: rect.y + PADDING,
                    font_size,
                    color: PALETTE[i % PALETTE.len()],
                });
                break;
            }
            if font_size <= MIN_FONT {
                tracing::trace!(word = %word.word, placed = placed.len(), "word cloud is full");
                break 'words;
            }
            font_size = ((font_size as f64 * SHRINK) as u32).max(MIN_FONT);
        }
    }
    placed
}

/// Draw placed words on a white canvas.
pub fn render_svg(words: &[PlacedWord], canvas: Canvas) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (canvas.width, canvas.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;
        for word in words {
            let style = ("sans-serif", word.font_size as f64)
                .into_font()
                .color(&word.color);
            root.draw(&Text::new(word.text.as_str(), (word.x, word.y), style))
                .map_err(render_error)?;
        }
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

/// Full pipeline from a lower-cased corpus to SVG. An empty corpus gives a
/// blank canvas.
pub fn word_cloud(text: &str) -> Result<String> {
    let canvas = Canvas::default();
    let words = cloud_frequencies(text);
    render_svg(&layout(&words, canvas), canvas)
}

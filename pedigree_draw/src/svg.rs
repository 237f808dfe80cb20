// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface.
//!
//! Renders a presentation pass as a standalone SVG document for inspection
//! and debugging. Connectors are emitted under the cards, mirroring the
//! stacking a live renderer uses. Not pixel-faithful to any host; the card
//! styling here is deliberately plain.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Line, Rect};
use pedigree_layout::ExpandKey;
use pedigree_model::{Gender, Person};
use peniko::Color;

use crate::{Palette, Surface};

const CARD_CORNER_RADIUS: f64 = 12.0;
const LINE_WIDTH: f64 = 2.0;

/// A surface that accumulates an SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    palette: Palette,
    cards: Vec<String>,
    lines: Vec<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl SvgSurface {
    /// Creates an empty surface with the given palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            cards: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Discards everything drawn so far.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.lines.clear();
    }

    /// Assembles the accumulated elements into an SVG document.
    ///
    /// `width`/`height` set both the document size and the
    /// `viewBox="0 0 width height"`; callers typically pass the padded
    /// content size of the viewport.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        // Connectors go under the cards.
        for line in &self.lines {
            out.push_str(line);
        }
        for card in &self.cards {
            out.push_str(card);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn card(&mut self, person: &Person, rect: Rect, toggle: Option<&ExpandKey>) {
        let fill = match person.gender {
            Gender::Male => self.palette.male,
            Gender::Female => self.palette.female,
        };

        let mut el = String::new();
        let _ = write!(el, "  <g");
        if let Some(key) = toggle {
            let _ = write!(el, " data-key=\"{}\" cursor=\"pointer\"", escape(&key_text(key)));
        }
        let _ = write!(
            el,
            ">\n    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{CARD_CORNER_RADIUS}\" fill=\"{}\"/>\n",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(fill),
        );
        let _ = write!(
            el,
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
            rect.center().x,
            rect.center().y,
            escape(&person.full_name()),
        );
        if let Some(years) = years_label(person) {
            let _ = write!(
                el,
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" opacity=\"0.6\">{}</text>\n",
                rect.center().x,
                rect.center().y + 20.0,
                escape(&years),
            );
        }
        el.push_str("  </g>\n");
        self.cards.push(el);
    }

    fn line(&mut self, line: Line) {
        let mut el = String::new();
        let _ = write!(
            el,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{LINE_WIDTH}\"/>\n",
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
            hex(self.palette.line),
        );
        self.lines.push(el);
    }
}

fn key_text(key: &ExpandKey) -> String {
    let mut text = String::new();
    let _ = write!(text, "{key}");
    text
}

fn years_label(person: &Person) -> Option<String> {
    let birth = person.birth_year();
    let death = person.death_year();
    match (birth, death) {
        (None, None) => None,
        (birth, death) => {
            let mut label = String::new();
            label.push_str(birth.unwrap_or("?"));
            if let Some(death) = death {
                let _ = write!(label, " - {death}");
            }
            Some(label)
        }
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut out = String::new();
    let _ = write!(out, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

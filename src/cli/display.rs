// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bkvocab CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BKVOCAB_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piped
//! output stays plain.

use std::io::{self, Write};
use std::sync::OnceLock;

use bkvocab::{Edge, TreeStats};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BKVOCAB_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg", background 7+ (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(out: &mut impl Write, content: &str) -> io::Result<()> {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    writeln!(out, "{}{}{}{}", border, content, " ".repeat(pad), border)
}

/// ┌─ LABEL ──────────┐
pub fn section_top(out: &mut impl Write, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    writeln!(
        out,
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// └──────────────────┘
pub fn section_bot(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Edge key colored by how close the two words are.
pub fn distance_badge(distance: usize) -> String {
    let text = format!("[{}]", distance);
    match distance {
        0 => themed(GRAY, &[], &text),
        1 => themed(GREEN, &[BOLD], &text),
        2 => themed(YELLOW, &[], &text),
        _ => themed(RED, &[], &text),
    }
}

/// One line of the `tree` listing, indented two spaces per level.
pub fn edge_line(edge: &Edge<'_>) -> String {
    format!(
        "{}{} {}",
        "  ".repeat(edge.depth),
        distance_badge(edge.distance),
        edge.child
    )
}

/// Boxed summary for the `stats` command.
pub fn write_stats(out: &mut impl Write, stats: &TreeStats, root: Option<&str>) -> io::Result<()> {
    section_top(out, "BK-TREE")?;
    row(out, &format!(" words       {}", stats.len))?;
    row(out, &format!(" height      {}", stats.height))?;
    row(out, &format!(" max fanout  {}", stats.max_fanout))?;
    row(out, &format!(" root        {}", root.unwrap_or("-")))?;
    if !stats.edge_histogram.is_empty() {
        row(out, "")?;
        row(out, &format!(" {}", themed(CYAN, &[BOLD], "edges per key")))?;
        for (key, count) in &stats.edge_histogram {
            row(out, &format!("   {}{}", pad_right(&distance_badge(*key), 10), count))?;
        }
    }
    section_bot(out)
}

use colored::*;

use crate::mprint;
use crate::terminal::{colors, print};
use bandmatch_common::config::Config;
use bandmatch_common::{success, warn};
use bandmatch_core::User;

pub fn check(user: &User, bands: &[String], cfg: &Config) {
    print::header("favorite band lookup", cfg.quiet);
    print_user(user, bands, cfg);

    let matched: Option<&str> = user.favorite_band_matches(bands);

    print_result(matched, cfg);
    print_summary(user, matched, bands.len(), cfg);
}

fn print_user(user: &User, bands: &[String], cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::set_key_width(&["user", "favorite band", "bands"]);
    print::aligned_line("user", user.name());
    print::aligned_line("favorite band", user.favorite_band().color(colors::ACCENT));
    print::aligned_line("bands", format_bands(bands));
}

fn print_result(matched: Option<&str>, cfg: &Config) {
    if cfg.quiet > 1 {
        match matched {
            Some(band) => print::print(band),
            None => print::print("none"),
        }
        return;
    }

    let value: ColoredString = match matched {
        Some(band) => band.color(colors::MATCH).bold(),
        None => "none".color(colors::NO_MATCH),
    };
    print::aligned_line("match", value);
}

/// How the closing summary is rendered for a given quiet level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    /// Separator plus a centered line.
    Framed,
    /// A single status line.
    StatusLine,
    Hidden,
}

impl SummaryStyle {
    pub fn for_quiet(q_level: u8) -> Self {
        match q_level {
            0 => SummaryStyle::Framed,
            1 => SummaryStyle::StatusLine,
            _ => SummaryStyle::Hidden,
        }
    }
}

fn print_summary(user: &User, matched: Option<&str>, total: usize, cfg: &Config) {
    let style = SummaryStyle::for_quiet(cfg.quiet);
    if style == SummaryStyle::Hidden {
        return;
    }

    let unit: &str = if total == 1 { "band" } else { "bands" };
    match (matched, style) {
        (Some(band), SummaryStyle::Framed) => {
            let output = format!("{} likes {band}, found among {total} {unit}", user.name());
            print::fat_separator();
            print::centerln(&output);
        }
        (Some(band), _) => {
            mprint!();
            success!("{} likes {band}, found among {total} {unit}", user.name());
        }
        (None, _) => {
            warn!("{} not found among {total} {unit}", user.favorite_band());
        }
    }
}

pub fn format_bands(bands: &[String]) -> String {
    if bands.is_empty() {
        return String::from("(none)");
    }

    bands
        .iter()
        .map(|band| format!("\"{band}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

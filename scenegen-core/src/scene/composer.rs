//! Outfit and partner enrichment of sampled lines.
//!
//! Placement rules, with `n` the number of lines in a section:
//! - opening: every line gets the shared outfit phrase; the last
//!   `max(1, n / 4)` lines also get a partner.
//! - middle: the first `max(1, n / 4)` lines draw from `part1`, the rest from
//!   `part2`; the first `max(1, n / 2)` lines get the outfit phrase; every line
//!   gets a partner.
//! - closing: every line gets the closing tag; the first `max(1, n / 4)`
//!   lines also get a partner.
//!
//! Fragments are joined with `", "`; empty fragments are left out.

use crate::config::constants::delimiters;
use crate::scene::corpus::ClothingConfig;
use rand::Rng;
use rand::seq::SliceRandom;

/// Partner alternatives parsed from a `/`-separated string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerSpec {
    options: Vec<String>,
}

impl PartnerSpec {
    /// Split on `/`, trim, drop empty alternatives
    pub fn parse(raw: &str) -> Self {
        let options = raw
            .split(delimiters::SEGMENT)
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .map(str::to_string)
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// An independent draw; `None` when there are no alternatives
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.options.choose(rng).map(String::as_str)
    }
}

/// Enriched opening, middle and closing lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedSegments {
    pub opening: Vec<String>,
    pub middle: Vec<String>,
    pub closing: Vec<String>,
}

impl ComposedSegments {
    /// All lines in opening, middle, closing order
    pub fn into_lines(self) -> Vec<String> {
        let mut lines = self.opening;
        lines.extend(self.middle);
        lines.extend(self.closing);
        lines
    }
}

/// Number of lines in a quarter-sized placement group
fn quarter(count: usize) -> usize {
    (count / 4).max(1)
}

fn half(count: usize) -> usize {
    (count / 2).max(1)
}

fn choose_or_empty<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or("")
}

fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(delimiters::FRAGMENT)
}

/// Reads the clothing document; never mutates it or the input lines
pub struct Composer<'a> {
    clothing: &'a ClothingConfig,
}

impl<'a> Composer<'a> {
    pub fn new(clothing: &'a ClothingConfig) -> Self {
        Self { clothing }
    }

    /// Random color and clothing item, comma-joined, or whichever half exists
    pub fn outfit_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let color = choose_or_empty(&self.clothing.opening.colors, rng);
        let clothing = choose_or_empty(&self.clothing.opening.clothing, rng);
        join_fragments([color, clothing])
    }

    pub fn compose<R: Rng + ?Sized>(
        &self,
        opening: &[String],
        middle: &[String],
        closing: &[String],
        partner: &PartnerSpec,
        rng: &mut R,
    ) -> ComposedSegments {
        let outfit = self.outfit_phrase(rng);

        ComposedSegments {
            opening: self.compose_opening(opening, &outfit, partner, rng),
            middle: self.compose_middle(middle, &outfit, partner, rng),
            closing: self.compose_closing(closing, partner, rng),
        }
    }

    fn compose_opening<R: Rng + ?Sized>(
        &self,
        lines: &[String],
        outfit: &str,
        partner: &PartnerSpec,
        rng: &mut R,
    ) -> Vec<String> {
        let partner_from = lines.len().saturating_sub(quarter(lines.len()));

        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let partner_text = if index >= partner_from {
                    partner.pick(rng)
                } else {
                    None
                };
                join_fragments([outfit, partner_text.unwrap_or(""), line.as_str()])
            })
            .collect()
    }

    fn compose_middle<R: Rng + ?Sized>(
        &self,
        lines: &[String],
        outfit: &str,
        partner: &PartnerSpec,
        rng: &mut R,
    ) -> Vec<String> {
        let part1_count = quarter(lines.len());
        let outfit_count = half(lines.len());

        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let pool = if index < part1_count {
                    &self.clothing.middle.part1
                } else {
                    &self.clothing.middle.part2
                };
                let item = choose_or_empty(pool, rng);
                let partner_text = partner.pick(rng).unwrap_or("");
                let outfit_text = if index < outfit_count { outfit } else { "" };

                join_fragments([outfit_text, item, partner_text, line.as_str()])
            })
            .collect()
    }

    fn compose_closing<R: Rng + ?Sized>(
        &self,
        lines: &[String],
        partner: &PartnerSpec,
        rng: &mut R,
    ) -> Vec<String> {
        let partner_count = quarter(lines.len());
        let tag = self.clothing.closing.tag.as_str();

        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let partner_text = if index < partner_count {
                    partner.pick(rng)
                } else {
                    None
                };
                join_fragments([tag, partner_text.unwrap_or(""), line.as_str()])
            })
            .collect()
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text direction and the mirrored layout it implies.

use super::Lang;
use serde::{Deserialize, Serialize};

/// Document-level text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// A physical screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }
}

/// Direction for a language: Arabic is right-to-left, English left-to-right.
pub fn direction_for(lang: Lang) -> Direction {
    match lang {
        Lang::En => Direction::Ltr,
        Lang::Ar => Direction::Rtl,
    }
}

impl Direction {
    /// Value for an HTML `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Edge where a line of text starts.
    pub fn leading_edge(&self) -> Edge {
        match self {
            Direction::Ltr => Edge::Left,
            Direction::Rtl => Edge::Right,
        }
    }

    pub fn trailing_edge(&self) -> Edge {
        self.leading_edge().opposite()
    }

    /// Which way a "forward"/"next" arrow points.
    pub fn forward_arrow(&self) -> Edge {
        self.trailing_edge()
    }

    pub fn mirrored(&self) -> Direction {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    /// Concrete placement hints for a renderer.
    pub fn layout(&self) -> LayoutHints {
        LayoutHints {
            dir: *self,
            forward_arrow: self.forward_arrow(),
            // mobile drawer slides in from the trailing edge
            drawer_edge: self.trailing_edge(),
            badge_edge: self.leading_edge(),
            // gap sits between an inline icon and the text after it
            icon_gap_side: self.trailing_edge(),
        }
    }
}

/// Mirrored placement derived from a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHints {
    pub dir: Direction,
    pub forward_arrow: Edge,
    pub drawer_edge: Edge,
    pub badge_edge: Edge,
    pub icon_gap_side: Edge,
}

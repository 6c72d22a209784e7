//! Buy/sell mode and the search box.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::prelude::*;
use crate::storefront::StorefrontError;
use crate::{SEARCH_PLACEHOLDERS, SELL_MODE_PARAM};

const BUY_TITLE: &str = "FIND WHAT YOU NEED";
const SELL_TITLE: &str = "START RENTING TODAY";
const SELL_PLACEHOLDER: &str = "What are you renting?";
const SELL_REDIRECT: &str = "index.html?mode=sell";

/// Whether the visitor is browsing to rent or offering items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketMode {
    #[default]
    #[display(fmt = "buy")]
    Buy,
    #[display(fmt = "sell")]
    Sell,
}

impl MarketMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    pub const fn hero_title(self) -> &'static str {
        match self {
            Self::Buy => BUY_TITLE,
            Self::Sell => SELL_TITLE,
        }
    }

    /// Reads `mode=sell` from a query string such as `?mode=sell&x=1`.
    ///
    /// Anything else means buy mode.
    pub fn from_query(query: &str) -> Self {
        let is_sell = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "mode" && value == SELL_MODE_PARAM);
        if is_sell { Self::Sell } else { Self::Buy }
    }
}

impl FromStr for MarketMode {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(StorefrontError::UnknownMode(other.to_string())),
        }
    }
}

/// Kind of page the toggle sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKind {
    #[default]
    Home,
    Category,
    Product,
}

/// What pressing the toggle does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeTransition {
    /// Mode flipped in place
    Switched(MarketMode),
    /// Leave for the home page in sell mode
    Redirect(&'static str),
}

/// A search to run, tagged with the mode it was made in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub mode: MarketMode,
}

/// Buy/sell switch in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeToggle {
    mode: MarketMode,
    page: PageKind,
}

impl ModeToggle {
    /// Starts in the mode requested by the page's query string.
    pub fn new(page: PageKind, query: &str) -> Self {
        Self {
            mode: MarketMode::from_query(query),
            page,
        }
    }

    pub const fn mode(&self) -> MarketMode {
        self.mode
    }

    pub const fn hero_title(&self) -> &'static str {
        self.mode.hero_title()
    }

    /// Listing pages only exist for buyers, so switching to sell there
    /// leaves for the home page.
    pub fn toggle(&mut self) -> ModeTransition {
        if self.mode == MarketMode::Buy
            && matches!(self.page, PageKind::Category | PageKind::Product)
        {
            info!(
                redirect = SELL_REDIRECT,
                "switching to sell mode from a listing page"
            );
            return ModeTransition::Redirect(SELL_REDIRECT);
        }
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "market mode toggled");
        ModeTransition::Switched(self.mode)
    }

    /// Search placeholder for the current mode; buy mode rotates.
    pub fn search_placeholder<R: Rng>(&self, rotator: &mut PlaceholderRotator<R>) -> &'static str {
        match self.mode {
            MarketMode::Buy => rotator.next_placeholder(),
            MarketMode::Sell => SELL_PLACEHOLDER,
        }
    }

    /// Turns the search box contents into a request; blank input does nothing.
    pub fn search(&self, raw: &str) -> Option<SearchRequest> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        info!(mode = %self.mode, query, "search requested");
        Some(SearchRequest {
            query: query.to_string(),
            mode: self.mode,
        })
    }
}

/// Picks search placeholders at random, never the same one twice running.
#[derive(Debug, Clone)]
pub struct PlaceholderRotator<R> {
    rng: R,
    placeholders: &'static [&'static str],
    last: Option<usize>,
}

impl<R: Rng> PlaceholderRotator<R> {
    pub const fn new(rng: R) -> Self {
        Self::with_placeholders(rng, &SEARCH_PLACEHOLDERS)
    }

    pub const fn with_placeholders(rng: R, placeholders: &'static [&'static str]) -> Self {
        Self {
            rng,
            placeholders,
            last: None,
        }
    }

    /// The next placeholder; empty when the list is empty.
    pub fn next_placeholder(&mut self) -> &'static str {
        let len = self.placeholders.len();
        let index = match (len, self.last) {
            (0, _) => return "",
            (1, _) | (_, None) => self.rng.random_range(0..len),
            (_, Some(last)) => {
                // Draw from the others and shift past the previous pick
                let pick = self.rng.random_range(0..len - 1);
                if pick >= last { pick + 1 } else { pick }
            }
        };
        self.last = Some(index);
        self.placeholders.get(index).copied().unwrap_or_default()
    }
}

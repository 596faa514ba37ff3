//! Command-line interface definitions.
//!
//! Three subcommands map onto the three Bing News request shapes:
//! `phrase` (free-text search), `cat` (category browse), and `trend`
//! (trending topics). Markets and categories are closed sets, matched
//! case-insensitively, and carry the exact spellings the API expects.

use std::fmt;
use std::io::{self, Write};

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Error;

/// Search for news articles using the Bing News Search API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search news by word or phrase
    Phrase {
        /// Phrase to search for; prompted for interactively if omitted
        #[arg(short = 'p', long)]
        search_phrase: Option<String>,
    },
    /// Browse news for a category
    Cat {
        /// News category to browse
        #[arg(short, long, value_enum, ignore_case = true)]
        category: Category,
        /// Regional edition of the results
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = Market::EnGb)]
        market: Market,
    },
    /// Show trending news topics
    Trend {
        /// Regional edition of the results
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = Market::EnGb)]
        market: Market,
    },
}

/// Locale code controlling the regional edition of results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Market {
    #[value(name = "en-GB")]
    EnGb,
    #[value(name = "en-US")]
    EnUs,
}

impl Market {
    /// The `mkt` query parameter value.
    pub fn code(self) -> &'static str {
        match self {
            Market::EnGb => "en-GB",
            Market::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Category {
    #[value(name = "Business")]
    Business,
    #[value(name = "ScienceAndTechnology")]
    ScienceAndTechnology,
    #[value(name = "Sports")]
    Sports,
    #[value(name = "World")]
    World,
    #[value(name = "Entertainment")]
    Entertainment,
}

impl Category {
    /// The `category` query parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::ScienceAndTechnology => "ScienceAndTechnology",
            Category::Sports => "Sports",
            Category::World => "World",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ask for a search phrase on stdin. An empty reply is an error.
pub fn prompt_search_phrase() -> Result<String, Error> {
    print!("What phrase are you searching for? ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let phrase = line.trim();
    if phrase.is_empty() {
        return Err(Error::EmptyPhrase);
    }
    Ok(phrase.to_string())
}

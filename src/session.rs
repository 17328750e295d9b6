//! The interactive loop: pick filters, load trips, show statistics, restart.

use anyhow::Result;
use chrono::Weekday;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::info;

use crate::analyzers::report;
use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::dataset::{self, CityFiles, TripDataset};
use crate::filters::{Choice, City, FilterSelection, Month};
use crate::given;
use crate::output::{RULE, elapsed_line};
use crate::pager::page_raw_data;
use crate::prompt::{Confirm, Console, Reply};

const CITY_PROMPT: &str = "\nSelect a city (New York City, Chicago, Washington):\n>";
const MONTH_PROMPT: &str = "\nSelect a month (January to June):\n>";
const WEEKDAY_PROMPT: &str = "\nSelect a weekday:\n>";
const MENU_PROMPT: &str = "\nSelect the information you would like:\n [ts] Time Stats\n [ss] Station Stats\n [tds] Trip Duration Stats\n [us] User Stats\n [rd] Raw data\n [r] Restart\n>";
const RESTART_PROMPT: &str = "\nWould you like to restart? [y/n]\n>";

/// Entries of the statistics menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Time,
    Stations,
    Durations,
    Users,
    RawData,
    Restart,
}

impl Choice for MenuAction {
    const ALL: &'static [Self] = &[
        MenuAction::Time,
        MenuAction::Stations,
        MenuAction::Durations,
        MenuAction::Users,
        MenuAction::RawData,
        MenuAction::Restart,
    ];

    fn key(self) -> &'static str {
        match self {
            MenuAction::Time => "ts",
            MenuAction::Stations => "ss",
            MenuAction::Durations => "tds",
            MenuAction::Users => "us",
            MenuAction::RawData => "rd",
            MenuAction::Restart => "r",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined to restart.
    Finished,
    /// The user typed the abort keyword.
    Aborted,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    files: CityFiles,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, files: CityFiles) -> Self {
        Self { console, files }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs filter selection, the menu and the restart prompt until the user
    /// stops.
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or trip data cannot be loaded.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = match self.explore()? {
            Reply::Given(()) => Outcome::Finished,
            Reply::Abort => Outcome::Aborted,
        };
        info!(?outcome, "Session ended");
        Ok(outcome)
    }

    fn explore(&mut self) -> Result<Reply<()>> {
        loop {
            self.console.clear()?;
            let filters = given!(collect_filters(&mut self.console)?);
            info!(
                cities = %filters.cities,
                months = %filters.months,
                weekdays = %filters.weekdays,
                "Filters confirmed"
            );

            let dataset = self.load(&filters)?;
            given!(self.menu(&filters, &dataset)?);

            match given!(self.console.ask_choice::<Confirm>(RESTART_PROMPT)?) {
                Confirm::Yes => continue,
                Confirm::No => return Ok(Reply::Given(())),
            }
        }
    }

    fn load(&mut self, filters: &FilterSelection) -> Result<TripDataset> {
        self.console.say("\nLoading data for your selected filters...")?;
        let started = Instant::now();

        let dataset = dataset::load(&self.files, filters)?;
        info!(trips = dataset.len(), "Trip data loaded");

        self.console.say(&format!("\n{}", elapsed_line(started)))?;
        self.console.say(RULE)?;
        Ok(dataset)
    }

    fn menu(&mut self, filters: &FilterSelection, dataset: &TripDataset) -> Result<Reply<()>> {
        loop {
            let action = given!(self.console.ask_choice::<MenuAction>(MENU_PROMPT)?);
            self.console.clear()?;
            info!(?action, "Menu action");

            match action {
                MenuAction::Time => report(
                    self.console.output(),
                    "The Most Frequent Times of Travel",
                    || TimeStats::from_dataset(dataset),
                )?,
                MenuAction::Stations => report(
                    self.console.output(),
                    "The Most Popular Stations and Trip",
                    || StationStats::from_dataset(dataset),
                )?,
                MenuAction::Durations => report(self.console.output(), "Trip Duration", || {
                    DurationStats::from_dataset(dataset)
                })?,
                MenuAction::Users => report(self.console.output(), "User Stats", || {
                    UserStats::from_dataset(dataset, &filters.city_names())
                })?,
                MenuAction::RawData => given!(page_raw_data(&mut self.console, dataset)?),
                MenuAction::Restart => return Ok(Reply::Given(())),
            }
        }
    }
}

/// Greets the user and asks for city, month and weekday until the user
/// confirms the selection.
///
/// # Errors
///
/// Returns an error if console I/O fails.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Reply<FilterSelection>> {
    console.say("Hello! Let's explore some US bikeshare data!")?;
    console.say("Type 'end' at any time to exit the program.\n")?;

    loop {
        let cities = given!(console.ask_selection::<City>(CITY_PROMPT)?);
        let months = given!(console.ask_selection::<Month>(MONTH_PROMPT)?);
        let weekdays = given!(console.ask_selection::<Weekday>(WEEKDAY_PROMPT)?);

        let filters = FilterSelection {
            cities,
            months,
            weekdays,
        };

        let confirm_prompt = format!("\nConfirm filters:\n{filters}\n [y] Yes\n [n] No\n>");
        match given!(console.ask_choice::<Confirm>(&confirm_prompt)?) {
            Confirm::Yes => {
                console.say(RULE)?;
                return Ok(Reply::Given(filters));
            }
            Confirm::No => console.say("\nLet's try again!")?,
        }
    }
}

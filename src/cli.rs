//! Command-line options.
//!
//! ```bash
//! tracklens                                  # reads data/data.csv
//! tracklens --data exports/top10.csv --artist "Daft Punk"
//! TRACKLENS_DATA=top10.json tracklens --check
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::SearchQuery;
use crate::data::model::NumericColumn;

/// Default location of the source file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";

#[derive(Parser, Debug)]
#[command(name = "tracklens")]
#[command(about = "Explore artists' top tracks: search, metrics and scatter plots")]
#[command(version)]
pub struct Args {
    /// Source file (.csv with a leading index column, or .json records)
    #[arg(long, env = "TRACKLENS_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Artist to select on start-up (substring, case-sensitive)
    #[arg(long)]
    pub artist: Option<String>,

    /// Characteristic on the scatter plot's x axis
    #[arg(long, default_value = "danceability", value_parser = parse_characteristic)]
    pub x_axis: NumericColumn,

    /// Engagement metric on the scatter plot's y axis
    #[arg(long, default_value = "stream", value_parser = parse_engagement)]
    pub y_axis: NumericColumn,

    /// Load and preprocess the source, print a summary and exit
    #[arg(long)]
    pub check: bool,
}

impl Args {
    /// The query the first render cycle starts with.
    pub fn initial_query(&self) -> SearchQuery {
        match self.artist.as_deref().filter(|a| !a.is_empty()) {
            Some(artist) => SearchQuery::artist(artist),
            None => SearchQuery::default(),
        }
    }
}

fn parse_characteristic(name: &str) -> Result<NumericColumn, String> {
    match NumericColumn::from_name(name) {
        Some(c) if !c.is_engagement() => Ok(c),
        _ => Err(format!("'{name}' is not a characteristic score")),
    }
}

fn parse_engagement(name: &str) -> Result<NumericColumn, String> {
    match NumericColumn::from_name(name) {
        Some(c) if c.is_engagement() => Ok(c),
        _ => Err(format!("'{name}' is not an engagement metric (stream, views, likes)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_data_path() {
        let args = Args::try_parse_from(["tracklens"]).unwrap();
        assert!(!args.check);
        assert!(args.initial_query().is_empty());
        assert_eq!(args.x_axis, NumericColumn::Danceability);
        assert_eq!(args.y_axis, NumericColumn::Stream);
        // TRACKLENS_DATA may be set in the environment running the tests.
        if std::env::var_os("TRACKLENS_DATA").is_none() {
            assert_eq!(args.data, PathBuf::from(DEFAULT_DATA_PATH));
        }
    }

    #[test]
    fn artist_becomes_initial_query() {
        let args =
            Args::try_parse_from(["tracklens", "--data", "x.json", "--artist", "BTS", "--check"])
                .unwrap();
        assert_eq!(args.data, PathBuf::from("x.json"));
        assert!(args.check);
        assert_eq!(args.initial_query(), SearchQuery::artist("BTS"));
    }

    #[test]
    fn axes_must_come_from_their_groups() {
        let args =
            Args::try_parse_from(["tracklens", "--x-axis", "Valence", "--y-axis", "likes"]).unwrap();
        assert_eq!(args.x_axis, NumericColumn::Valence);
        assert_eq!(args.y_axis, NumericColumn::Likes);

        assert!(Args::try_parse_from(["tracklens", "--x-axis", "views"]).is_err());
        assert!(Args::try_parse_from(["tracklens", "--y-axis", "energy"]).is_err());
        assert!(Args::try_parse_from(["tracklens", "--x-axis", "tempo"]).is_err());
    }
}

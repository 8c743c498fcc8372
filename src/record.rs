// src/record.rs
use crate::direction::Direction;

/// One (track, artist) lookup as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub title: String,
    pub artist: Option<String>,
}

impl Query {
    pub fn new(title: impl Into<String>, artist: Option<&str>) -> Self {
        let artist = artist
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from);
        Self { title: title.into().trim().to_string(), artist }
    }

    /// "Title by Artist" for progress lines.
    pub fn describe(&self) -> String {
        match &self.artist {
            Some(a) => format!("{} by {}", self.title, a),
            None => self.title.clone(),
        }
    }
}

/// One relationship between the queried track and a related track.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SampleRecord {
    pub query: String,
    pub direction: Direction,
    pub sample_type: String,
    pub genre: String,
    pub title: String,
    pub artist: String,
    pub year: String,
}

impl SampleRecord {
    pub const HEADERS: [&'static str; 7] =
        ["Query", "Direction", "Type", "Genre", "Title", "Artist", "Year"];

    /// Genre and year may be blank; everything else must be present.
    pub fn is_valid(&self) -> bool {
        !self.query.is_empty()
            && !self.sample_type.is_empty()
            && !self.title.is_empty()
            && !self.artist.is_empty()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.query.clone(),
            s!(self.direction.key()),
            self.sample_type.clone(),
            self.genre.clone(),
            self.title.clone(),
            self.artist.clone(),
            self.year.clone(),
        ]
    }
}

/// Both directions for one detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listings {
    pub contains_sample_of: Vec<SampleRecord>,
    pub was_sampled_in: Vec<SampleRecord>,
}

impl Listings {
    pub fn get(&self, direction: Direction) -> &[SampleRecord] {
        match direction {
            Direction::ContainsSampleOf => &self.contains_sample_of,
            Direction::WasSampledIn => &self.was_sampled_in,
        }
    }

    pub fn set(&mut self, direction: Direction, records: Vec<SampleRecord>) {
        match direction {
            Direction::ContainsSampleOf => self.contains_sample_of = records,
            Direction::WasSampledIn => self.was_sampled_in = records,
        }
    }

    pub fn len(&self) -> usize {
        self.contains_sample_of.len() + self.was_sampled_in.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten in the order the directions are given; unlisted directions are dropped.
    pub fn into_records(mut self, directions: &[Direction]) -> Vec<SampleRecord> {
        let mut out = Vec::with_capacity(self.len());
        for d in directions {
            let taken = match d {
                Direction::ContainsSampleOf => std::mem::take(&mut self.contains_sample_of),
                Direction::WasSampledIn => std::mem::take(&mut self.was_sampled_in),
            };
            out.extend(taken);
        }
        out
    }
}

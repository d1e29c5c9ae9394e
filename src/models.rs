//! Catalog rows and the JSON views handlers return.

use serde::Serialize;
use sqlx::FromRow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Human {
    pub id: i64,
    pub name: String,
    pub year_born: i64,
}

/// A human's role in a movie (`humans_in_movies` row).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct HumanInMovie {
    pub id: i64,
    pub role: String,
    pub movie_id: i64,
    pub human_id: i64,
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie(name = {}, genre = {}, year = {})", self.name, self.genre, self.year)
    }
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Human(name = {}, year_born = {})", self.name, self.year_born)
    }
}

impl fmt::Display for HumanInMovie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HumanInMovie(role = {}, movie_id = {}, human_id = {})",
            self.role, self.movie_id, self.human_id
        )
    }
}

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub name: String,
    pub genre: String,
    pub year: String,
}

#[derive(Clone, Debug)]
pub struct NewHuman {
    pub name: String,
    pub year_born: i64,
}

#[derive(Clone, Debug)]
pub struct NewCasting {
    pub human_id: i64,
    pub role: String,
}

/// Collection listing of humans: id and name only.
#[derive(Clone, Debug, Serialize)]
pub struct HumanSummary {
    pub id: i64,
    pub name: String,
}

impl From<Human> for HumanSummary {
    fn from(h: Human) -> Self {
        HumanSummary { id: h.id, name: h.name }
    }
}

/// A human as cast in one movie.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub role: String,
}

/// A movie with the role a given human played in it.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Appearance {
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub year: String,
    pub role: String,
}

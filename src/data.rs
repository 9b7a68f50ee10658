//! Static catalog behind the two pages.
//!
//! The viewer renders from an embedded catalog; nothing is fetched and
//! nothing is written back. A broken asset degrades to empty pages with
//! a diagnostic instead of failing the app.

use dioxus::logger::tracing;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub actors: Vec<Actor>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    pub rating: f64,
    pub duration_minutes: u32,
    pub description: String,
    pub poster: String,
    pub video_src: String,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub similar: Vec<String>,
}

impl Movie {
    /// Runtime as shown under the title, e.g. `1 год 52 хв`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        if hours == 0 {
            format!("{minutes} хв")
        } else {
            format!("{hours} год {minutes} хв")
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub actor_id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub birthplace: String,
    pub photo: String,
    pub biography_intro: String,
    pub biography_full: String,
    #[serde(default)]
    pub filmography: Vec<FilmographyEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilmographyEntry {
    #[serde(default)]
    pub movie_id: Option<String>,
    pub title: String,
    pub year: u32,
    pub role: String,
    pub poster: String,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../assets/catalog.json")).unwrap_or_else(|err| {
        tracing::error!("catalog asset is invalid: {err}");
        Catalog::default()
    })
});

/// The movie the root page shows.
pub fn featured_movie() -> Option<&'static Movie> {
    CATALOG.movies.first()
}

pub fn movie(id: &str) -> Option<&'static Movie> {
    CATALOG.movies.iter().find(|movie| movie.id == id)
}

pub fn actor(id: &str) -> Option<&'static Actor> {
    CATALOG.actors.iter().find(|actor| actor.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_and_has_a_featured_movie() {
        let featured = featured_movie().expect("catalog should not be empty");
        assert!(!featured.title.is_empty());
        assert!(!featured.video_src.is_empty());
        assert!(featured.duration_minutes > 0);
    }

    #[test]
    fn cast_links_resolve_to_actors() {
        let featured = featured_movie().unwrap();
        assert!(!featured.cast.is_empty());
        for member in &featured.cast {
            let actor = actor(&member.actor_id);
            assert!(actor.is_some(), "no actor for {}", member.actor_id);
            assert_eq!(actor.unwrap().name, member.name);
        }
    }

    #[test]
    fn similar_links_resolve_to_movies() {
        let featured = featured_movie().unwrap();
        assert!(!featured.similar.is_empty());
        for id in &featured.similar {
            assert!(movie(id).is_some(), "no movie for {id}");
        }
    }

    #[test]
    fn filmography_movie_links_resolve_when_present() {
        for actor in &CATALOG.actors {
            for entry in &actor.filmography {
                if let Some(id) = &entry.movie_id {
                    assert!(movie(id).is_some(), "no movie for {id}");
                }
            }
        }
    }

    #[test]
    fn unknown_ids_yield_none() {
        assert!(movie("does-not-exist").is_none());
        assert!(actor("does-not-exist").is_none());
    }

    #[test]
    fn duration_label_splits_hours() {
        let mut movie = Movie::default();
        movie.duration_minutes = 112;
        assert_eq!(movie.duration_label(), "1 год 52 хв");
        movie.duration_minutes = 45;
        assert_eq!(movie.duration_label(), "45 хв");
    }
}

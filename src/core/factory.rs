//! Local constructors and updaters. Nothing here talks to the API.

use crate::domain::model::{Actor, ActorNationality, Actress, ActressNationality, Person};
use rand::Rng;

/// Ids handed out by the constructors fall in `0..ID_RANGE_END`.
pub const ID_RANGE_END: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActress {
    pub name: String,
    pub birth_year: i64,
    pub death_year: Option<i64>,
    pub biography: String,
    pub image: String,
    pub most_famous_movies: [String; 3],
    pub awards: String,
    pub nationality: ActressNationality,
}

/// Fields left as `None` keep their current value. `id` and `name` are fixed
/// once a record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActressUpdate {
    pub birth_year: Option<i64>,
    /// `Some(None)` clears the death year.
    pub death_year: Option<Option<i64>>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub most_famous_movies: Option<[String; 3]>,
    pub awards: Option<String>,
    pub nationality: Option<ActressNationality>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub name: String,
    pub birth_year: i64,
    pub death_year: Option<i64>,
    pub biography: String,
    pub image: String,
    pub known_for: [String; 3],
    pub awards: Vec<String>,
    pub nationality: ActorNationality,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorUpdate {
    pub birth_year: Option<i64>,
    pub death_year: Option<Option<i64>>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub known_for: Option<[String; 3]>,
    pub awards: Option<Vec<String>>,
    pub nationality: Option<ActorNationality>,
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(0..ID_RANGE_END)
}

fn merge_person(
    base: &Person,
    birth_year: Option<i64>,
    death_year: Option<Option<i64>>,
    biography: Option<String>,
    image: Option<String>,
) -> Person {
    Person {
        id: base.id,
        name: base.name.clone(),
        birth_year: birth_year.unwrap_or(base.birth_year),
        death_year: death_year.unwrap_or(base.death_year),
        biography: biography.unwrap_or_else(|| base.biography.clone()),
        image: image.unwrap_or_else(|| base.image.clone()),
    }
}

pub fn create_actress(input: NewActress) -> Actress {
    create_actress_with(input, &mut rand::thread_rng())
}

pub fn create_actress_with<R: Rng + ?Sized>(input: NewActress, rng: &mut R) -> Actress {
    Actress {
        person: Person {
            id: random_id(rng),
            name: input.name,
            birth_year: input.birth_year,
            death_year: input.death_year,
            biography: input.biography,
            image: input.image,
        },
        most_famous_movies: input.most_famous_movies,
        awards: input.awards,
        nationality: input.nationality,
    }
}

pub fn update_actress(actress: &Actress, update: ActressUpdate) -> Actress {
    Actress {
        person: merge_person(
            &actress.person,
            update.birth_year,
            update.death_year,
            update.biography,
            update.image,
        ),
        most_famous_movies: update
            .most_famous_movies
            .unwrap_or_else(|| actress.most_famous_movies.clone()),
        awards: update.awards.unwrap_or_else(|| actress.awards.clone()),
        nationality: update.nationality.unwrap_or(actress.nationality),
    }
}

pub fn create_actor(input: NewActor) -> Actor {
    create_actor_with(input, &mut rand::thread_rng())
}

pub fn create_actor_with<R: Rng + ?Sized>(input: NewActor, rng: &mut R) -> Actor {
    Actor {
        person: Person {
            id: random_id(rng),
            name: input.name,
            birth_year: input.birth_year,
            death_year: input.death_year,
            biography: input.biography,
            image: input.image,
        },
        known_for: input.known_for,
        awards: input.awards,
        nationality: input.nationality,
    }
}

pub fn update_actor(actor: &Actor, update: ActorUpdate) -> Actor {
    Actor {
        person: merge_person(
            &actor.person,
            update.birth_year,
            update.death_year,
            update.biography,
            update.image,
        ),
        known_for: update.known_for.unwrap_or_else(|| actor.known_for.clone()),
        awards: update.awards.unwrap_or_else(|| actor.awards.clone()),
        nationality: update.nationality.unwrap_or(actor.nationality),
    }
}

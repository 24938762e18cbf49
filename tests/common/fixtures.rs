//! Canned Jikan payloads, trimmed to the fields the mappers read.

use serde_json::{json, Value};

pub fn attack_on_titan_search() -> Value {
    json!({
        "pagination": { "last_visible_page": 1, "has_next_page": false },
        "data": [{
            "mal_id": 16498,
            "title": "Attack on Titan",
            "episodes": 25,
            "aired": { "from": "2013-04-07", "to": "2013-09-29" },
            "producers": [{ "mal_id": 1, "name": "Studio X" }]
        }]
    })
}

pub fn top_anime() -> Value {
    json!({
        "data": [
            {
                "mal_id": 52991,
                "title": "Sousou no Frieren",
                "title_english": "Frieren: Beyond Journey's End",
                "type": "TV",
                "episodes": 28,
                "status": "Finished Airing",
                "rating": "PG-13 - Teens 13 or older",
                "rank": 1,
                "synopsis": "The demon king has been defeated.",
                "season": "fall",
                "year": 2023
            },
            {
                "mal_id": 5114,
                "title": "Fullmetal Alchemist: Brotherhood",
                "title_english": null,
                "type": "TV",
                "episodes": 64,
                "rank": 2
            }
        ]
    })
}

pub fn random_manga() -> Value {
    json!({
        "data": {
            "mal_id": 2,
            "title": "Berserk",
            "type": "Manga",
            "chapters": null,
            "volumes": null,
            "status": "Publishing",
            "rank": 1,
            "synopsis": "Guts, a former mercenary."
        }
    })
}

pub fn reviews() -> Value {
    json!({
        "data": [{
            "mal_id": 7406,
            "user": { "username": "reviewer", "url": "https://myanimelist.net/profile/reviewer" },
            "score": 9,
            "date": "2013-09-30T00:00:00+00:00",
            "review": "Loud, tense and relentless.",
            "is_spoiler": false,
            "is_preliminary": true
        }]
    })
}

pub fn recommendations() -> Value {
    json!({
        "data": [
            { "entry": { "mal_id": 1535, "title": "Death Note" }, "votes": 120 },
            "broken",
            { "entry": { "mal_id": 30276, "title": "One Punch Man" }, "votes": 40 }
        ]
    })
}

pub fn news() -> Value {
    json!({
        "data": [{
            "mal_id": 60000,
            "url": "https://myanimelist.net/news/60000",
            "title": "Final season announced",
            "date": "2023-03-01T10:00:00+00:00",
            "author_username": "editor",
            "excerpt": "The final season airs this spring."
        }]
    })
}

pub fn seasonal() -> Value {
    json!({
        "data": [{
            "mal_id": 16498,
            "title": "Attack on Titan",
            "season": "spring",
            "year": 2013,
            "studios": [{ "mal_id": 858, "name": "Wit Studio" }],
            "genres": [{ "mal_id": 1, "name": "Action" }, { "mal_id": 8, "name": "Drama" }]
        }]
    })
}

pub fn manga_search() -> Value {
    json!({
        "data": [{
            "mal_id": 2,
            "title": "Berserk",
            "chapters": 0,
            "volumes": 0,
            "status": "Publishing",
            "publishing": true,
            "published": { "from": "1989-08-25", "to": null },
            "authors": [{ "mal_id": 1868, "name": "Miura, Kentarou" }],
            "genres": [{ "mal_id": 1, "name": "Action" }]
        }]
    })
}

pub fn producers() -> Value {
    json!({
        "data": [{
            "mal_id": 21,
            "titles": [
                { "type": "Default", "title": "Studio Ghibli" },
                { "type": "Japanese", "title": "スタジオジブリ" }
            ],
            "favorites": 12000,
            "established": "1985-06-15T00:00:00+00:00",
            "about": "Founded by Hayao Miyazaki and Isao Takahata.",
            "count": 35
        }]
    })
}

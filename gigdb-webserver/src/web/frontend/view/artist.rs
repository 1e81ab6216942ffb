use maud::{html, Markup};

use super::{page, search_form, GENRES};
use gigdb_core::{
    entities::*,
    usecases::{ArtistPage, ArtistSearchResults},
};

pub fn artists(artists: &[Artist]) -> Markup {
    page(
        "Artists",
        None,
        html! {
            main {
                h2 { "Artists" }
                (search_form("/artists/search", None, "Find an artist"))
                @if artists.is_empty() {
                    p { "No artists have been listed yet." }
                } @else {
                    ul class="result-list" {
                        @for artist in artists {
                            li {
                                a href=(format!("/artists/{}", artist.id)) { (artist.name) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_search_results(search_term: &str, results: &ArtistSearchResults) -> Markup {
    page(
        "Artist Search",
        None,
        html! {
            main {
                h2 { "Artists" }
                (search_form("/artists/search", Some(search_term), "Find an artist"))
                p {
                    "Number of search results for "
                    em { (format!("'{search_term}'")) }
                    ": " (results.count)
                }
                ul class="result-list" {
                    @for artist in &results.items {
                        li {
                            a href=(format!("/artists/{}", artist.id)) { (artist.name) }
                            span class="upcoming-count" {
                                (artist.num_upcoming_shows) " upcoming shows"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist(artist_page: &ArtistPage) -> Markup {
    let ArtistPage {
        artist,
        past,
        upcoming,
    } = artist_page;
    page(
        &artist.name,
        None,
        html! {
            main {
                div class="profile" {
                    img class="profile-image" src=(artist.image_url) alt=(artist.name);
                    div class="profile-details" {
                        h2 { (artist.name) }
                        p class="genres" {
                            @for genre in &artist.genres {
                                span class="badge" { (genre) }
                            }
                        }
                        p { (artist.city) ", " (artist.state) }
                        @if !artist.phone.is_empty() {
                            p { (artist.phone) }
                        }
                        @if let Some(ref website_url) = artist.website_url {
                            p { a href=(website_url) { (website_url) } }
                        }
                        @if let Some(ref facebook_url) = artist.facebook_url {
                            p { a href=(facebook_url) { (facebook_url) } }
                        }
                        @if artist.seeking_venue {
                            div class="seeking" {
                                strong { "Seeking a venue" }
                                @if let Some(ref description) = artist.seeking_description {
                                    p { (description) }
                                }
                            }
                        }
                        div class="actions" {
                            a class="btn" href=(format!("/artists/{}/edit", artist.id)) {
                                "Edit artist"
                            }
                        }
                    }
                }
                (show_section("Upcoming shows", upcoming))
                (show_section("Past shows", past))
            }
        },
    )
}

fn show_section(heading: &str, shows: &[ArtistShow]) -> Markup {
    html! {
        section class="shows" {
            h3 { (heading) " (" (shows.len()) ")" }
            @if shows.is_empty() {
                p { "No shows." }
            } @else {
                ul class="show-list" {
                    @for show in shows {
                        li {
                            img class="thumb" src=(show.venue_image_url) alt=(show.venue_name);
                            a href=(format!("/venues/{}", show.venue_id)) { (show.venue_name) }
                            span class="show-time" { (show.start_time) }
                        }
                    }
                }
            }
        }
    }
}

pub fn new_artist() -> Markup {
    artist_form(None)
}

pub fn edit_artist(artist: &Artist) -> Markup {
    artist_form(Some(artist))
}

fn artist_form(artist: Option<&Artist>) -> Markup {
    let (title, action, submit) = match artist {
        Some(artist) => (
            "Edit artist",
            format!("/artists/{}/edit", artist.id),
            "Save changes",
        ),
        None => (
            "List a new artist",
            "/artists/create".to_string(),
            "List artist",
        ),
    };
    page(
        title,
        None,
        html! {
            main {
                h2 { (title) }
                form class="entity-form" action=(action) method="POST" {
                    label {
                        "Name"
                        input type="text" name="name"
                            value=(artist.map(|a| a.name.as_str()).unwrap_or(""));
                    }
                    label {
                        "City"
                        input type="text" name="city"
                            value=(artist.map(|a| a.city.as_str()).unwrap_or(""));
                    }
                    label {
                        "State"
                        input type="text" name="state"
                            value=(artist.map(|a| a.state.as_str()).unwrap_or(""));
                    }
                    label {
                        "Phone"
                        input type="tel" name="phone"
                            value=(artist.map(|a| a.phone.as_str()).unwrap_or(""));
                    }
                    label {
                        "Image link"
                        input type="url" name="image_url"
                            value=(artist.map(|a| a.image_url.as_str()).unwrap_or(""));
                    }
                    label {
                        "Facebook link"
                        input type="url" name="facebook_url"
                            value=(artist.and_then(|a| a.facebook_url.as_deref()).unwrap_or(""));
                    }
                    label {
                        "Website link"
                        input type="url" name="website_url"
                            value=(artist.and_then(|a| a.website_url.as_deref()).unwrap_or(""));
                    }
                    label {
                        "Genres"
                        select name="genres" multiple {
                            @for genre in GENRES {
                                option value=(genre)
                                    selected[artist.is_some_and(|a| a.genres.iter().any(|g| g == genre))] {
                                    (genre)
                                }
                            }
                        }
                    }
                    label class="checkbox" {
                        input type="checkbox" name="seeking_venue"
                            checked[artist.is_some_and(|a| a.seeking_venue)];
                        "Seeking a venue"
                    }
                    label {
                        "Seeking description"
                        textarea name="seeking_description" {
                            (artist.and_then(|a| a.seeking_description.as_deref()).unwrap_or(""))
                        }
                    }
                    input class="btn" type="submit" value=(submit);
                }
            }
        },
    )
}

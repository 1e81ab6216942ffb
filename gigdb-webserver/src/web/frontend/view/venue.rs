use maud::{html, Markup, PreEscaped};

use super::{page, search_form, GENRES};
use gigdb_core::{
    entities::*,
    usecases::{LocaleGroup, VenuePage, VenueSearchResults},
};

pub fn venues(groups: &[LocaleGroup]) -> Markup {
    page(
        "Venues",
        None,
        html! {
            main {
                h2 { "Venues" }
                (search_form("/venues/search", None, "Find a venue"))
                @if groups.is_empty() {
                    p { "No venues have been listed yet." }
                }
                @for group in groups {
                    section class="locale-group" {
                        h3 { (group.city) ", " (group.state) }
                        ul class="result-list" {
                            @for venue in &group.venues {
                                li {
                                    a href=(format!("/venues/{}", venue.id)) { (venue.name) }
                                    span class="upcoming-count" {
                                        (venue.num_upcoming_shows) " upcoming shows"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_search_results(search_term: &str, results: &VenueSearchResults) -> Markup {
    page(
        "Venue Search",
        None,
        html! {
            main {
                h2 { "Venues" }
                (search_form("/venues/search", Some(search_term), "Find a venue"))
                p {
                    "Number of search results for "
                    em { (format!("'{search_term}'")) }
                    ": " (results.count)
                }
                ul class="result-list" {
                    @for venue in &results.items {
                        li {
                            a href=(format!("/venues/{}", venue.id)) { (venue.name) }
                            span class="upcoming-count" {
                                (venue.num_upcoming_shows) " upcoming shows"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue(venue_page: &VenuePage) -> Markup {
    let VenuePage {
        venue,
        past,
        upcoming,
    } = venue_page;
    page(
        &venue.name,
        None,
        html! {
            main {
                div class="profile" {
                    img class="profile-image" src=(venue.image_url) alt=(venue.name);
                    div class="profile-details" {
                        h2 { (venue.name) }
                        p class="genres" {
                            @for genre in &venue.genres {
                                span class="badge" { (genre) }
                            }
                        }
                        p { (venue.street_address) ", " (venue.city) ", " (venue.state) }
                        @if !venue.phone.is_empty() {
                            p { (venue.phone) }
                        }
                        p { a href=(venue.website_url) { (venue.website_url) } }
                        @if let Some(ref facebook_url) = venue.facebook_url {
                            p { a href=(facebook_url) { (facebook_url) } }
                        }
                        @if venue.seeking_talent {
                            div class="seeking" {
                                strong { "Seeking talent" }
                                @if let Some(ref description) = venue.seeking_description {
                                    p { (description) }
                                }
                            }
                        }
                        div class="actions" {
                            a class="btn" href=(format!("/venues/{}/edit", venue.id)) {
                                "Edit venue"
                            }
                            button class="btn btn-danger" onclick="deleteVenue()" {
                                "Delete venue"
                            }
                        }
                    }
                }
                (show_section("Upcoming shows", upcoming))
                (show_section("Past shows", past))
            }
            script { (PreEscaped(format!(
                "function deleteVenue(){{if(!confirm('Delete this venue and all of its shows?'))return;\
                 fetch('/venues/{}',{{method:'DELETE'}}).then(function(res){{\
                 if(res.ok){{window.location='/venues';}}else{{alert('The venue could not be deleted.');}}}});}}",
                venue.id
            ))) }
        },
    )
}

fn show_section(heading: &str, shows: &[VenueShow]) -> Markup {
    html! {
        section class="shows" {
            h3 { (heading) " (" (shows.len()) ")" }
            @if shows.is_empty() {
                p { "No shows." }
            } @else {
                ul class="show-list" {
                    @for show in shows {
                        li {
                            img class="thumb" src=(show.artist_image_url) alt=(show.artist_name);
                            a href=(format!("/artists/{}", show.artist_id)) { (show.artist_name) }
                            span class="show-time" { (show.start_time) }
                        }
                    }
                }
            }
        }
    }
}

pub fn new_venue() -> Markup {
    venue_form(None)
}

pub fn edit_venue(venue: &Venue) -> Markup {
    venue_form(Some(venue))
}

fn venue_form(venue: Option<&Venue>) -> Markup {
    let (title, action, submit) = match venue {
        Some(venue) => (
            "Edit venue",
            format!("/venues/{}/edit", venue.id),
            "Save changes",
        ),
        None => ("List a new venue", "/venues/create".to_string(), "List venue"),
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
                            value=(venue.map(|v| v.name.as_str()).unwrap_or(""));
                    }
                    label {
                        "City"
                        input type="text" name="city"
                            value=(venue.map(|v| v.city.as_str()).unwrap_or(""));
                    }
                    label {
                        "State"
                        input type="text" name="state"
                            value=(venue.map(|v| v.state.as_str()).unwrap_or(""));
                    }
                    label {
                        "Address"
                        input type="text" name="street_address"
                            value=(venue.map(|v| v.street_address.as_str()).unwrap_or(""));
                    }
                    label {
                        "Phone"
                        input type="tel" name="phone"
                            value=(venue.map(|v| v.phone.as_str()).unwrap_or(""));
                    }
                    label {
                        "Image link"
                        input type="url" name="image_url"
                            value=(venue.map(|v| v.image_url.as_str()).unwrap_or(""));
                    }
                    label {
                        "Facebook link"
                        input type="url" name="facebook_url"
                            value=(venue.and_then(|v| v.facebook_url.as_deref()).unwrap_or(""));
                    }
                    label {
                        "Website link"
                        input type="url" name="website_url"
                            value=(venue.map(|v| v.website_url.as_str()).unwrap_or(""));
                    }
                    label {
                        "Genres"
                        select name="genres" multiple {
                            @for genre in GENRES {
                                option value=(genre)
                                    selected[venue.is_some_and(|v| v.genres.iter().any(|g| g == genre))] {
                                    (genre)
                                }
                            }
                        }
                    }
                    label class="checkbox" {
                        input type="checkbox" name="seeking_talent"
                            checked[venue.is_some_and(|v| v.seeking_talent)];
                        "Seeking talent"
                    }
                    label {
                        "Seeking description"
                        textarea name="seeking_description" {
                            (venue.and_then(|v| v.seeking_description.as_deref()).unwrap_or(""))
                        }
                    }
                    input class="btn" type="submit" value=(submit);
                }
            }
        },
    )
}

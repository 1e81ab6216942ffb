use maud::{html, Markup};

use super::page;
use gigdb_core::entities::*;

pub fn shows(listings: &[ShowListing]) -> Markup {
    page(
        "Shows",
        None,
        html! {
            main {
                h2 { "Shows" }
                @if listings.is_empty() {
                    p { "No shows have been listed yet." }
                } @else {
                    table class="show-table" {
                        thead {
                            tr {
                                th { "Artist" }
                                th { "Venue" }
                                th { "Start time" }
                            }
                        }
                        tbody {
                            @for listing in listings {
                                tr {
                                    td {
                                        img class="thumb"
                                            src=(listing.artist_image_url)
                                            alt=(listing.artist_name);
                                        a href=(format!("/artists/{}", listing.artist_id)) {
                                            (listing.artist_name)
                                        }
                                    }
                                    td {
                                        a href=(format!("/venues/{}", listing.venue_id)) {
                                            (listing.venue_name)
                                        }
                                    }
                                    td { (listing.start_time) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn new_show(venues: &[Venue], artists: &[Artist]) -> Markup {
    page(
        "List a new show",
        None,
        html! {
            main {
                h2 { "List a new show" }
                form class="entity-form" action="/shows/create" method="POST" {
                    label {
                        "Artist"
                        select name="artist_id" {
                            @for artist in artists {
                                option value=(artist.id) { (artist.name) }
                            }
                        }
                    }
                    label {
                        "Venue"
                        select name="venue_id" {
                            @for venue in venues {
                                option value=(venue.id) { (venue.name) }
                            }
                        }
                    }
                    label {
                        "Start time"
                        input type="datetime-local" name="start_time" step="1";
                    }
                    input class="btn" type="submit" value="List show";
                }
            }
        },
    )
}

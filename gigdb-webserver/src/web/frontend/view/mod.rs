use maud::{html, Markup};
use rocket::request::FlashMessage;

use gigdb_core::usecases::DirectoryStats;

mod artist;
mod page;
mod show;
mod venue;

pub use artist::*;
use page::*;
pub use show::*;
pub use venue::*;

// Genre labels offered by the listing forms.
const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub fn index(flash: Option<&FlashMessage>, stats: DirectoryStats) -> Markup {
    page(
        "gigdb",
        flash,
        html! {
            main class="hero" {
                h1 { "gigdb" }
                p {
                    "A booking directory for venues, artists and the shows "
                    "that bring them together."
                }
                div class="stats" {
                    div class="stat" {
                        span class="stat-value" { (stats.venue_count) }
                        span class="stat-label" { "venues" }
                    }
                    div class="stat" {
                        span class="stat-value" { (stats.artist_count) }
                        span class="stat-label" { "artists" }
                    }
                    div class="stat" {
                        span class="stat-value" { (stats.show_count) }
                        span class="stat-label" { "shows" }
                    }
                }
            }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "Not Found",
        None,
        html! {
            main class="error-page" {
                h1 { "404" }
                p { "The page you are looking for does not exist." }
                a href="/" { "Back to the directory" }
            }
        },
    )
}

pub fn internal_error() -> Markup {
    page(
        "Server Error",
        None,
        html! {
            main class="error-page" {
                h1 { "500" }
                p { "Something went wrong on our side. Please try again later." }
                a href="/" { "Back to the directory" }
            }
        },
    )
}

fn search_form(action: &str, search_term: Option<&str>, placeholder: &str) -> Markup {
    html! {
        div class="search-form" {
            form action=(action) method="POST" {
                input
                    type="text"
                    name="search_term"
                    value=(search_term.unwrap_or(""))
                    size=(40)
                    maxlength=(120)
                    placeholder=(placeholder);
                input class="btn" type="submit" value="Find";
            }
        }
    }
}

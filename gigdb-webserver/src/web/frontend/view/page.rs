use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

pub fn page(title: &str, flash: Option<&FlashMessage>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/main.css";
            }
            body {
                header {
                    nav {
                        a class="brand" href="/" { "gigdb" }
                        a href="/venues" { "Venues" }
                        a href="/artists" { "Artists" }
                        a href="/shows" { "Shows" }
                        span class="spacer" {}
                        a class="btn" href="/venues/create" { "Post a venue" }
                        a class="btn" href="/artists/create" { "Post an artist" }
                        a class="btn" href="/shows/create" { "Post a show" }
                    }
                }
                @if let Some(flash) = flash {
                    div class=(format!("flash flash-{}", flash.kind())) { (flash.message()) }
                }
                (content)
            }
        }
    }
}

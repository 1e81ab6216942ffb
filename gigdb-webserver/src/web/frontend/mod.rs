use maud::Markup;
use rocket::{
    catch, get,
    request::FlashMessage,
    response::content::RawCss,
    routes, Route,
};

use crate::web::{error::Error, sqlite::Connections};
use gigdb_core::usecases;

mod artists;
mod shows;
mod venues;
mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, Error>;

#[get("/")]
pub fn get_index(pool: Connections, flash: Option<FlashMessage>) -> Result<Markup> {
    let stats = usecases::directory_stats(&pool.shared()?)?;
    Ok(view::index(flash.as_ref(), stats))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[catch(404)]
pub fn not_found() -> Markup {
    view::not_found()
}

#[catch(500)]
pub fn internal_error() -> Markup {
    view::internal_error()
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        // ---   venues   --- //
        venues::get_venues,
        venues::post_search_venues,
        venues::get_venue,
        venues::get_new_venue,
        venues::post_new_venue,
        venues::get_edit_venue,
        venues::post_edit_venue,
        venues::delete_venue,
        // ---   artists   --- //
        artists::get_artists,
        artists::post_search_artists,
        artists::get_artist,
        artists::get_new_artist,
        artists::post_new_artist,
        artists::get_edit_artist,
        artists::post_edit_artist,
        // ---   shows   --- //
        shows::get_shows,
        shows::get_new_show,
        shows::post_new_show,
    ]
}

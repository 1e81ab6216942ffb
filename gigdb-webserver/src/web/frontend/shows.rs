use maud::Markup;
use rocket::{
    form::Form,
    get, post,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{view, Result};
use crate::web::sqlite::Connections;
use gigdb_application::prelude as flows;
use gigdb_core::{repositories::*, usecases};

#[derive(FromForm)]
pub struct ShowForm {
    venue_id: String,
    artist_id: String,
    start_time: String,
}

#[get("/shows")]
pub fn get_shows(pool: Connections) -> Result<Markup> {
    let listings = usecases::show_directory(&pool.shared()?)?;
    Ok(view::shows(&listings))
}

#[get("/shows/create")]
pub fn get_new_show(pool: Connections) -> Result<Markup> {
    // The booking form offers all venues and artists for selection.
    let db = pool.shared()?;
    let venues = db.all_venues()?;
    let artists = db.all_artists()?;
    Ok(view::new_show(&venues, &artists))
}

#[post("/shows/create", data = "<show>")]
pub fn post_new_show(pool: Connections, show: Form<ShowForm>) -> Flash<Redirect> {
    let ShowForm {
        venue_id,
        artist_id,
        start_time,
    } = show.into_inner();
    let new_show = usecases::NewShow {
        venue_id,
        artist_id,
        start_time,
    };
    match flows::create_show(&pool, new_show) {
        Ok(_) => Flash::success(
            Redirect::to(uri!(super::get_index)),
            "Show was successfully listed!",
        ),
        Err(err) => {
            warn!("Failed to create show: {err}");
            Flash::error(
                Redirect::to(uri!(super::get_index)),
                "An error occurred. Show could not be listed.",
            )
        }
    }
}

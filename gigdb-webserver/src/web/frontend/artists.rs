use maud::Markup;
use rocket::{
    form::Form,
    get, post,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{venues::SearchForm, view, Result};
use crate::web::sqlite::Connections;
use gigdb_application::prelude as flows;
use gigdb_core::{entities::*, usecases};

#[derive(FromForm)]
pub struct ArtistForm {
    name: String,
    city: String,
    state: String,
    phone: String,
    image_url: String,
    facebook_url: Option<String>,
    website_url: Option<String>,
    genres: Vec<String>,
    #[field(default = false)]
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl From<ArtistForm> for usecases::NewArtist {
    fn from(from: ArtistForm) -> Self {
        let ArtistForm {
            name,
            city,
            state,
            phone,
            image_url,
            facebook_url,
            website_url,
            genres,
            seeking_venue,
            seeking_description,
        } = from;
        Self {
            name,
            city,
            state,
            phone,
            image_url,
            facebook_url,
            website_url,
            genres,
            seeking_venue,
            seeking_description,
        }
    }
}

#[get("/artists")]
pub fn get_artists(pool: Connections) -> Result<Markup> {
    let artists = usecases::artist_directory(&pool.shared()?)?;
    Ok(view::artists(&artists))
}

#[post("/artists/search", data = "<search>")]
pub fn post_search_artists(pool: Connections, search: Form<SearchForm>) -> Result<Markup> {
    let results =
        usecases::search_artists(&pool.shared()?, search.search_term, Timestamp::now())?;
    Ok(view::artist_search_results(search.search_term, &results))
}

#[get("/artists/<id>")]
pub fn get_artist(pool: Connections, id: &str) -> Result<Markup> {
    let page = usecases::artist_page(&pool.shared()?, id, Timestamp::now())?;
    Ok(view::artist(&page))
}

#[get("/artists/create")]
pub fn get_new_artist() -> Markup {
    view::new_artist()
}

#[post("/artists/create", data = "<artist>")]
pub fn post_new_artist(pool: Connections, artist: Form<ArtistForm>) -> Flash<Redirect> {
    let artist = artist.into_inner();
    let name = artist.name.clone();
    match flows::create_artist(&pool, artist.into()) {
        Ok(_) => Flash::success(
            Redirect::to(uri!(super::get_index)),
            format!("Artist {name} was successfully listed!"),
        ),
        Err(err) => {
            warn!("Failed to create artist {name}: {err}");
            Flash::error(
                Redirect::to(uri!(super::get_index)),
                format!("An error occurred. Artist {name} could not be listed."),
            )
        }
    }
}

#[get("/artists/<id>/edit")]
pub fn get_edit_artist(pool: Connections, id: &str) -> Result<Markup> {
    let artist = usecases::get_artist(&pool.shared()?, id)?;
    Ok(view::edit_artist(&artist))
}

#[allow(clippy::result_large_err)]
#[post("/artists/<id>/edit", data = "<artist>")]
pub fn post_edit_artist(
    pool: Connections,
    id: &str,
    artist: Form<ArtistForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    match flows::update_artist(&pool, Id::from(id), artist.into_inner().into()) {
        Ok(_) => Ok(Redirect::to(uri!(get_artist(id)))),
        Err(err) => {
            warn!("Failed to update artist {id}: {err}");
            Err(Flash::error(
                Redirect::to(uri!(get_edit_artist(id))),
                "An error occurred. The artist could not be updated.",
            ))
        }
    }
}

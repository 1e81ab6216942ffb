use maud::Markup;
use rocket::{
    delete,
    form::Form,
    get, post,
    response::{Flash, Redirect},
    serde::json::Json,
    uri, FromForm,
};
use serde::Serialize;

use super::{view, Result};
use crate::web::sqlite::Connections;
use gigdb_application::prelude as flows;
use gigdb_core::{entities::*, usecases};

#[derive(FromForm)]
pub struct SearchForm<'r> {
    pub(crate) search_term: &'r str,
}

#[derive(FromForm)]
pub struct VenueForm {
    name: String,
    city: String,
    state: String,
    street_address: String,
    phone: String,
    image_url: String,
    facebook_url: Option<String>,
    website_url: String,
    genres: Vec<String>,
    #[field(default = false)]
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl From<VenueForm> for usecases::NewVenue {
    fn from(from: VenueForm) -> Self {
        let VenueForm {
            name,
            city,
            state,
            street_address,
            phone,
            image_url,
            facebook_url,
            website_url,
            genres,
            seeking_talent,
            seeking_description,
        } = from;
        Self {
            name,
            city,
            state,
            street_address,
            phone,
            image_url,
            facebook_url,
            website_url,
            genres,
            seeking_talent,
            seeking_description,
        }
    }
}

#[get("/venues")]
pub fn get_venues(pool: Connections) -> Result<Markup> {
    let groups = usecases::venue_directory(&pool.shared()?, Timestamp::now())?;
    Ok(view::venues(&groups))
}

#[post("/venues/search", data = "<search>")]
pub fn post_search_venues(pool: Connections, search: Form<SearchForm>) -> Result<Markup> {
    let results = usecases::search_venues(&pool.shared()?, search.search_term, Timestamp::now())?;
    Ok(view::venue_search_results(search.search_term, &results))
}

#[get("/venues/<id>")]
pub fn get_venue(pool: Connections, id: &str) -> Result<Markup> {
    let page = usecases::venue_page(&pool.shared()?, id, Timestamp::now())?;
    Ok(view::venue(&page))
}

#[get("/venues/create")]
pub fn get_new_venue() -> Markup {
    view::new_venue()
}

#[post("/venues/create", data = "<venue>")]
pub fn post_new_venue(pool: Connections, venue: Form<VenueForm>) -> Flash<Redirect> {
    let venue = venue.into_inner();
    let name = venue.name.clone();
    match flows::create_venue(&pool, venue.into()) {
        Ok(_) => Flash::success(
            Redirect::to(uri!(super::get_index)),
            format!("Venue {name} was successfully listed!"),
        ),
        Err(err) => {
            warn!("Failed to create venue {name}: {err}");
            Flash::error(
                Redirect::to(uri!(super::get_index)),
                format!("An error occurred. Venue {name} could not be listed."),
            )
        }
    }
}

#[get("/venues/<id>/edit")]
pub fn get_edit_venue(pool: Connections, id: &str) -> Result<Markup> {
    let venue = usecases::get_venue(&pool.shared()?, id)?;
    Ok(view::edit_venue(&venue))
}

#[allow(clippy::result_large_err)]
#[post("/venues/<id>/edit", data = "<venue>")]
pub fn post_edit_venue(
    pool: Connections,
    id: &str,
    venue: Form<VenueForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    match flows::update_venue(&pool, Id::from(id), venue.into_inner().into()) {
        Ok(_) => Ok(Redirect::to(uri!(get_venue(id)))),
        Err(err) => {
            warn!("Failed to update venue {id}: {err}");
            Err(Flash::error(
                Redirect::to(uri!(get_edit_venue(id))),
                "An error occurred. The venue could not be updated.",
            ))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VenueDeleted {
    pub deleted: bool,
}

#[delete("/venues/<id>")]
pub fn delete_venue(pool: Connections, id: &str) -> Result<Json<VenueDeleted>> {
    flows::delete_venue(&pool, &Id::from(id))?;
    Ok(Json(VenueDeleted { deleted: true }))
}

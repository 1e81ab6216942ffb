use rocket::{catchers, config::Config as RocketCfg, Build, Rocket, Route};

mod error;
mod frontend;
mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: sqlite::Connections) -> Rocket<Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .register("/", catchers![frontend::not_found, frontend::internal_error]);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let instance = rocket_instance(options, db);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
